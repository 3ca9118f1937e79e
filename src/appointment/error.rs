use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised by [`Interval`](super::Interval) construction and arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Period finish ({finish}) must be after start ({start})")]
    InvalidRange {
        start: NaiveDateTime,
        finish: NaiveDateTime,
    },

    #[error("Intervals do not overlap: '{first}' and '{second}'")]
    NoOverlap { first: String, second: String },

    #[error("Shifting the interval starting at {start} leaves the representable time range")]
    OutOfRange { start: NaiveDateTime },
}

/// What was wrong with a line handed to the appointment parser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("missing '|' between period and label")]
    MissingSeparator,

    #[error("expected 'YYYY-MM-DD HH:MM HH:MM' before '|', found {0} field(s)")]
    FieldCount(usize),

    #[error("bad date '{value}': {source}")]
    Date {
        value: String,
        source: chrono::ParseError,
    },

    #[error("bad time '{value}': {source}")]
    Time {
        value: String,
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Range(#[from] IntervalError),
}

/// A malformed appointment line, carrying the offending text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to parse '{text}': {kind}")]
pub struct ParseError {
    pub text: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(text: &str, kind: impl Into<ParseErrorKind>) -> Self {
        Self {
            text: text.to_string(),
            kind: kind.into(),
        }
    }
}
