//! Synthetic agendas for load-testing the conflict sweep.
//!
//! [`repeat`] lays copies of a seed appointment at a fixed offset;
//! [`generate`] adds optional, reproducibly placed collisions on top.

mod config;

pub use config::GeneratorConfig;

use chrono::TimeDelta;
use qtty::{Minute, Quantity};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::appointment::{Interval, IntervalError, IntervalSet, ParseError};
use crate::units::{convert, to_time_delta, SameDim};

/// Label carried by injected collisions.
pub const CONFLICT_LABEL: &str = "oops";

/// Errors that can occur while generating an agenda.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Interval(#[from] IntervalError),

    #[error("Step of {0} minutes cannot be represented as a time offset")]
    Step(f64),

    #[error("'{0}' cannot be written as a single-day appointment line")]
    NotRepresentable(String),
}

/// An agenda of `repetitions` appointments, each `step` after the previous.
///
/// The first keeps the seed label; the `n`-th copy is labelled `"<label> #n"`.
/// `step` is rounded to whole minutes. Fails with
/// [`GenerateError::NotRepresentable`] as soon as an appointment would not
/// survive the text form, e.g. one running past midnight.
///
/// ```rust
/// use agenda::generator::repeat;
/// use qtty::{Hour, Quantity};
///
/// let first = "2018-11-20 08:00 08:59 | Sample appt".parse().unwrap();
/// let agenda = repeat(&first, Quantity::<Hour>::new(1.0), 3).unwrap();
/// assert_eq!(
///     agenda.to_string(),
///     "2018-11-20 08:00 08:59 | Sample appt\n\
///      2018-11-20 09:00 09:59 | Sample appt #1\n\
///      2018-11-20 10:00 10:59 | Sample appt #2"
/// );
/// ```
pub fn repeat<U>(
    first: &Interval,
    step: Quantity<U>,
    repetitions: usize,
) -> Result<IntervalSet, GenerateError>
where
    U: SameDim<Minute>,
{
    let offset = to_time_delta(step)
        .ok_or_else(|| GenerateError::Step(convert::<U, Minute>(step).value()))?;

    let mut agenda = IntervalSet::with_capacity(repetitions);
    if repetitions == 0 {
        return Ok(agenda);
    }

    let mut appointment = first.clone();
    for n in 1..repetitions {
        let next = appointment.shifted(offset, format!("{} #{}", first.label(), n))?;
        agenda.push(representable(std::mem::replace(&mut appointment, next))?);
    }
    agenda.push(representable(appointment)?);
    Ok(agenda)
}

fn representable(interval: Interval) -> Result<Interval, GenerateError> {
    if interval.is_text_representable() {
        Ok(interval)
    } else {
        Err(GenerateError::NotRepresentable(interval.to_string()))
    }
}

/// Same as [`repeat`], with the seed appointment given in text form.
pub fn repeat_from_text<U>(
    first: &str,
    step: Quantity<U>,
    repetitions: usize,
) -> Result<IntervalSet, GenerateError>
where
    U: SameDim<Minute>,
{
    let first: Interval = first.parse()?;
    repeat(&first, step, repetitions)
}

/// Appends `count` [`CONFLICT_LABEL`] appointments, each starting halfway
/// (rounded down to a whole minute) through a randomly chosen existing
/// appointment and lasting as long as it, so every one overlaps at least its
/// victim. A collision that would run past the victim's day is cut back to end
/// with the victim.
///
/// Does nothing to an empty agenda.
pub fn inject_conflicts(
    agenda: &mut IntervalSet,
    count: usize,
    seed: u64,
) -> Result<(), GenerateError> {
    let originals = agenda.len();
    if originals == 0 {
        return Ok(());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..count {
        let victim = &agenda[rng.gen_range(0..originals)];
        let half = TimeDelta::minutes((victim.finish() - victim.start()).num_minutes() / 2);
        let mut oops = victim.shifted(half, CONFLICT_LABEL)?;
        if oops.start().date() != oops.finish().date() {
            oops = Interval::new(oops.start(), victim.finish(), CONFLICT_LABEL)?;
        }
        agenda.push(oops);
    }
    Ok(())
}

/// Builds the agenda described by `config`.
pub fn generate(config: &GeneratorConfig) -> Result<IntervalSet, GenerateError> {
    let mut agenda = repeat_from_text(&config.first, config.step, config.repetitions)?;
    inject_conflicts(&mut agenda, config.injected_conflicts, config.seed)?;
    tracing::debug!(
        appointments = agenda.len(),
        injected = config.injected_conflicts,
        "generated agenda"
    );
    Ok(agenda)
}
