//! An agenda: an ordered, append-only collection of appointments.
//!
//! [`IntervalSet`] wraps a `Vec<Interval>` in insertion order. Unlike a
//! canonical interval set it never merges or reorders on its own; callers sort
//! explicitly with [`IntervalSet::sort_by_start`]. The conflict sweep sorts in
//! place before scanning.
//!
//! Read access is transparent via `Deref<Target = [Interval]>`.

use std::fmt::Display;
use std::ops::Deref;

use super::interval::Interval;

/// Appointments in sequence order.
///
/// Equality is element-wise and order-sensitive; sort both sides first for an
/// order-independent comparison.
///
/// # Performance
///
/// - `push`: amortized O(1).
/// - `sort_by_start`: O(n log n), stable.
/// - `conflicts`: O(n log n) for the sort plus O(n + k) for the sweep, where
///   `k` is the number of overlapping pairs.
///
/// # Example
///
/// ```rust
/// use agenda::appointment::IntervalSet;
///
/// let mut agenda = IntervalSet::new();
/// agenda.push("2018-01-01 09:15 10:30 | drowsy".parse().unwrap());
/// agenda.push("2018-01-01 10:15 11:20 | coffee".parse().unwrap());
/// agenda.push("2018-01-01 11:30 12:00 | waking".parse().unwrap());
///
/// let conflicts = agenda.conflicts();
/// assert_eq!(conflicts.len(), 1);
/// assert_eq!(conflicts.to_string(), "2018-01-01 10:15 10:30 | drowsy and coffee");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntervalSet(Vec<Interval>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl IntervalSet {
    /// Creates an empty agenda.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty agenda with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Mutation methods
// ─────────────────────────────────────────────────────────────────────

impl IntervalSet {
    /// Appends an appointment to the end of the sequence.
    pub fn push(&mut self, interval: Interval) {
        self.0.push(interval);
    }

    /// Stable sort by start time; ties keep their relative order.
    pub fn sort_by_start(&mut self) {
        self.0.sort_by_key(Interval::start);
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conflict detection
// ─────────────────────────────────────────────────────────────────────

impl IntervalSet {
    /// Returns an agenda with the overlapping region of every conflicting
    /// pair, in discovery order.
    ///
    /// Sorts `self` by start as a side effect.
    ///
    /// After sorting, each appointment is compared only with its successors
    /// until the first one it does not overlap. Every later successor starts
    /// no earlier than that one, which already starts at or after the current
    /// appointment's finish, so none of them can overlap it either.
    pub fn conflicts(&mut self) -> IntervalSet {
        self.sort_by_start();

        let mut conflicts = IntervalSet::new();
        for (i, appointment) in self.0.iter().enumerate() {
            for other in &self.0[i + 1..] {
                if !appointment.overlaps(other) {
                    debug_assert!(appointment.precedes(other));
                    break;
                }
                conflicts.push(appointment.intersect(other));
            }
        }

        tracing::debug!(
            appointments = self.0.len(),
            conflicts = conflicts.len(),
            "scanned agenda for conflicts"
        );
        conflicts
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl Deref for IntervalSet {
    type Target = [Interval];

    fn deref(&self) -> &[Interval] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl From<Vec<Interval>> for IntervalSet {
    /// Wraps the appointments as-is, keeping their order.
    fn from(vec: Vec<Interval>) -> Self {
        Self(vec)
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Interval> for IntervalSet {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

// ─────────────────────────────────────────────────────────────────────
// Iterators
// ─────────────────────────────────────────────────────────────────────

impl IntoIterator for IntervalSet {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

/// Each appointment on its own line.
impl Display for IntervalSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", interval)?;
        }
        Ok(())
    }
}

/// Enables `assert_eq!(agenda, vec![...])` in tests.
impl PartialEq<Vec<Interval>> for IntervalSet {
    fn eq(&self, other: &Vec<Interval>) -> bool {
        self.0 == *other
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for IntervalSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntervalSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<Interval> as serde::Deserialize>::deserialize(deserializer).map(Self)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
