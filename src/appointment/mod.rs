//! Appointments and conflict detection.
//!
//! An [`Interval`] is a labelled half-open time range `[start, finish)`; an
//! [`IntervalSet`] is an append-only agenda of them that can report every
//! pairwise overlap via [`IntervalSet::conflicts`].

mod error;
mod interval;
mod interval_set;

#[cfg(test)]
mod tests;

pub use error::{IntervalError, ParseError, ParseErrorKind};
pub use interval::{Interval, DATE_FORMAT, TIME_FORMAT};
pub use interval_set::IntervalSet;
