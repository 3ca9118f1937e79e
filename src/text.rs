//! Reading agendas from line-oriented text.
//!
//! One appointment per line in the form `yyyy-mm-dd hh:mm hh:mm | label`.
//! Everything after `#` is a comment; lines with nothing left are skipped.
//! The first malformed line aborts the load.

use std::io::BufRead;

use thiserror::Error;

use crate::appointment::{Interval, IntervalSet, ParseError};

/// Errors that can occur while loading an agenda.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("failed to read agenda: {0}")]
    Io(#[from] std::io::Error),
}

/// Strips surrounding whitespace and any trailing comment.
/// Returns `None` when nothing remains.
fn content(line: &str) -> Option<&str> {
    let line = line
        .split_once('#')
        .map_or(line, |(before, _comment)| before)
        .trim();
    (!line.is_empty()).then_some(line)
}

/// Builds an agenda from a sequence of lines, skipping blanks and comments.
pub fn read_agenda<I, S>(lines: I) -> Result<IntervalSet, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut agenda = IntervalSet::new();
    for (index, line) in lines.into_iter().enumerate() {
        append_line(&mut agenda, index + 1, line.as_ref())?;
    }
    tracing::debug!(appointments = agenda.len(), "loaded agenda");
    Ok(agenda)
}

/// Parses one numbered line into `agenda`, skipping blanks and comments.
fn append_line(agenda: &mut IntervalSet, number: usize, line: &str) -> Result<(), LoadError> {
    let Some(text) = content(line) else {
        tracing::trace!(line = number, "skipping blank or comment line");
        return Ok(());
    };
    let interval = text
        .parse::<Interval>()
        .map_err(|source| LoadError::Parse { line: number, source })?;
    agenda.push(interval);
    Ok(())
}

/// Builds an agenda from a multi-line string.
///
/// ```rust
/// use agenda::text::parse_agenda;
///
/// let agenda = parse_agenda(
///     "
///     ## morning
///     2018-01-01 09:15 10:30 | drowsy
///     2018-01-01 10:15 11:20 | coffee   # again
///     ",
/// )
/// .unwrap();
/// assert_eq!(agenda.len(), 2);
/// assert_eq!(agenda[1].label(), "coffee");
/// ```
pub fn parse_agenda(text: &str) -> Result<IntervalSet, LoadError> {
    read_agenda(text.split('\n'))
}

/// Builds an agenda from a buffered reader such as a file or stdin.
///
/// Lines are parsed as they are read, so a malformed line is reported even if
/// the input turns unreadable further on.
pub fn load_agenda<R: BufRead>(reader: R) -> Result<IntervalSet, LoadError> {
    let mut agenda = IntervalSet::new();
    for (index, line) in reader.lines().enumerate() {
        append_line(&mut agenda, index + 1, &line?)?;
    }
    tracing::debug!(appointments = agenda.len(), "loaded agenda");
    Ok(agenda)
}
