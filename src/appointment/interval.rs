//! A single labelled appointment.

use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use qtty::{Minute, Quantity};

use super::error::{IntervalError, ParseError, ParseErrorKind};

/// Calendar date layout of the text form.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time-of-day layout of the text form (24 hour, minute precision).
pub const TIME_FORMAT: &str = "%H:%M";

/// Half-open time range `[start, finish)` with a free-text label.
///
/// Equality and hashing consider only `start` and `finish`; the label is
/// carried along for reporting.
///
/// Intervals are only partially ordered: [`precedes`](Self::precedes) and
/// [`follows`](Self::follows) both fail for overlapping intervals. For that
/// reason `Interval` does not implement `PartialOrd`; sort collections by
/// [`start`](Self::start) instead.
///
/// # Example
///
/// ```rust
/// use agenda::appointment::Interval;
///
/// let nap: Interval = "2018-03-15 13:30 15:30 | Early afternoon nap".parse().unwrap();
/// let coffee: Interval = "2018-03-15 15:00 16:00 | Coffee break".parse().unwrap();
///
/// assert!(nap.overlaps(&coffee));
/// assert_eq!(
///     nap.intersect(&coffee).to_string(),
///     "2018-03-15 15:00 15:30 | Early afternoon nap and Coffee break"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Interval {
    start: NaiveDateTime,
    finish: NaiveDateTime,
    label: String,
}

impl Interval {
    /// Creates the appointment `[start, finish)`.
    ///
    /// Fails with [`IntervalError::InvalidRange`] unless `finish > start`.
    pub fn new(
        start: NaiveDateTime,
        finish: NaiveDateTime,
        label: impl Into<String>,
    ) -> Result<Self, IntervalError> {
        if finish <= start {
            return Err(IntervalError::InvalidRange { start, finish });
        }
        Ok(Self {
            start,
            finish,
            label: label.into(),
        })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn finish(&self) -> NaiveDateTime {
        self.finish
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Length of the appointment in minutes.
    pub fn duration(&self) -> Quantity<Minute> {
        Quantity::new((self.finish - self.start).num_seconds() as f64 / 60.0)
    }

    /// True if `self` is over by the time `other` begins.
    pub fn precedes(&self, other: &Interval) -> bool {
        self.finish <= other.start
    }

    /// True if `self` begins no earlier than `other` is over.
    pub fn follows(&self, other: &Interval) -> bool {
        self.start >= other.finish
    }

    /// Is there a non-zero overlap between the two periods?
    ///
    /// Appointments that merely share an endpoint do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        !self.precedes(other) && !self.follows(other)
    }

    /// The overlapping portion of two appointments, labelled with both
    /// source labels.
    ///
    /// # Panics
    ///
    /// Panics if the intervals do not overlap. Use
    /// [`try_intersect`](Self::try_intersect) when that is not known.
    pub fn intersect(&self, other: &Interval) -> Interval {
        assert!(
            self.overlaps(other),
            "Intervals do not overlap: '{}' and '{}'",
            self,
            other
        );
        self.overlap_region(other)
    }

    /// Like [`intersect`](Self::intersect) but reports
    /// [`IntervalError::NoOverlap`] instead of panicking.
    pub fn try_intersect(&self, other: &Interval) -> Result<Interval, IntervalError> {
        if !self.overlaps(other) {
            return Err(IntervalError::NoOverlap {
                first: self.to_string(),
                second: other.to_string(),
            });
        }
        Ok(self.overlap_region(other))
    }

    // Overlap guarantees max(starts) < min(finishes).
    fn overlap_region(&self, other: &Interval) -> Interval {
        Interval {
            start: self.start.max(other.start),
            finish: self.finish.min(other.finish),
            label: format!("{} and {}", self.label, other.label),
        }
    }

    /// True if the text form carries this appointment exactly: both ends on
    /// whole minutes and on the same calendar day.
    pub fn is_text_representable(&self) -> bool {
        let whole_minute = |t: NaiveDateTime| t.second() == 0 && t.nanosecond() == 0;
        self.start.date() == self.finish.date()
            && whole_minute(self.start)
            && whole_minute(self.finish)
    }

    /// Returns a copy moved by `offset`, carrying `label`.
    pub fn shifted(&self, offset: TimeDelta, label: impl Into<String>) -> Result<Self, IntervalError> {
        let out_of_range = || IntervalError::OutOfRange { start: self.start };
        let start = self
            .start
            .checked_add_signed(offset)
            .ok_or_else(out_of_range)?;
        let finish = self
            .finish
            .checked_add_signed(offset)
            .ok_or_else(out_of_range)?;
        Self::new(start, finish, label)
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.finish == other.finish
    }
}

impl Eq for Interval {}

impl Hash for Interval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.finish.hash(state);
    }
}

/// `yyyy-mm-dd hh:mm hh:mm | label`, dated by `start`.
///
/// Only accurate when `start` and `finish` fall on the same day.
impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} | {}",
            self.start.format(DATE_FORMAT),
            self.start.format(TIME_FORMAT),
            self.finish.format(TIME_FORMAT),
            self.label
        )
    }
}

/// Inverse of the `Display` form. The label is everything after the first
/// `|`, trimmed.
impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (period, label) = text
            .split_once('|')
            .ok_or_else(|| ParseError::new(text, ParseErrorKind::MissingSeparator))?;

        let fields: Vec<&str> = period.split_whitespace().collect();
        let [date, start, finish] = fields[..] else {
            return Err(ParseError::new(text, ParseErrorKind::FieldCount(fields.len())));
        };

        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|source| {
            ParseError::new(
                text,
                ParseErrorKind::Date {
                    value: date.to_string(),
                    source,
                },
            )
        })?;
        let start = parse_time(text, start)?;
        let finish = parse_time(text, finish)?;

        Interval::new(date.and_time(start), date.and_time(finish), label.trim())
            .map_err(|e| ParseError::new(text, e))
    }
}

fn parse_time(text: &str, value: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|source| {
        ParseError::new(
            text,
            ParseErrorKind::Time {
                value: value.to_string(),
                source,
            },
        )
    })
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 3)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("finish", &self.finish)?;
        s.serialize_field("label", &self.label)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: NaiveDateTime,
            finish: NaiveDateTime,
            #[serde(default)]
            label: String,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(raw.start, raw.finish, raw.label).map_err(serde::de::Error::custom)
    }
}
