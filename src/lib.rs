//! agenda - scheduling-conflict detection for flat appointment lists
//!
//! Appointments are labelled half-open time ranges. An agenda of them can be
//! swept once, after sorting by start, to report every double-booking as the
//! overlapping region of the two appointments involved.

pub mod appointment;
pub mod generator;
pub mod text;
pub mod units;

pub use appointment::{Interval, IntervalSet};
