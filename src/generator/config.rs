//! Configuration for synthetic agenda generation.

use qtty::{Hour, Quantity};

/// Controls how [`generate`](super::generate) builds a synthetic agenda.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed appointment in text form, e.g. `"2018-11-20 08:00 08:59 | Sample appt"`.
    pub first: String,
    /// Offset between consecutive appointments.
    pub step: Quantity<Hour>,
    /// Number of repeated appointments, the seed included.
    pub repetitions: usize,

    // --- Conflict injection ---
    /// Number of extra `"oops"` appointments that each collide with one
    /// generated appointment.
    pub injected_conflicts: usize,
    /// RNG seed choosing which appointments collide.
    pub seed: u64,
}

impl GeneratorConfig {
    /// Total appointments the configuration produces.
    pub fn total(&self) -> usize {
        self.repetitions + self.injected_conflicts
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            first: "2018-11-20 08:00 08:59 | Sample appt".to_string(),
            step: Quantity::new(1.0),
            repetitions: 5000,
            injected_conflicts: 0,
            seed: 0,
        }
    }
}
