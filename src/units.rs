//! Unit conversion between `qtty` time quantities and `chrono` deltas.
//!
//! Offsets and lengths are expressed as quantities of any time unit (hours for
//! the generator step, minutes for appointment length) while timestamps are
//! `chrono` values. These helpers bridge the two.

use chrono::TimeDelta;
use qtty::{Minute, Quantity, Unit};

/// Ties a step unit to the unit appointments are measured in.
///
/// The generator accepts its step in any time unit (`Hour` from the command
/// line, `Minute` in tests) as long as it converts to minutes; a length
/// quantity handed to `repeat` is rejected at compile time.
pub trait SameDim<To: Unit>: Unit<Dim = To::Dim> {}

impl<From, To> SameDim<To> for From
where
    From: Unit,
    To: Unit<Dim = From::Dim>,
{
}

/// Re-expresses a time quantity in another time unit, e.g. hours as minutes.
#[inline]
pub const fn convert<From, To>(q: Quantity<From>) -> Quantity<To>
where
    From: SameDim<To>,
    To: Unit,
{
    q.to_const::<To>()
}

/// Converts a time quantity to a `chrono` delta, rounded to whole minutes.
///
/// The text form of an appointment has minute precision, so offsets finer
/// than that could not be written out and read back.
///
/// Returns `None` for NaN, infinities, and values `chrono` cannot represent.
pub fn to_time_delta<U>(q: Quantity<U>) -> Option<TimeDelta>
where
    U: SameDim<Minute>,
{
    let minutes = convert::<U, Minute>(q).value().round();
    if !minutes.is_finite() || minutes.abs() >= i64::MAX as f64 {
        return None;
    }
    TimeDelta::try_minutes(minutes as i64)
}
