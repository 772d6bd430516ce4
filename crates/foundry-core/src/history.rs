//! Time-indexed history of one vector field at one grid point.

use std::collections::BTreeMap;

use crate::time::SimTime;
use crate::vector::Vector3;

/// Monotonically growing map from simulation time to a field value.
///
/// Entries are never pruned. Recording is first-write-wins: writing a
/// time that already holds a value is a no-op and reports `false`. The
/// current-density update depends on this (a zero written for a
/// non-conducting point is not replaced by the integrated value).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldHistory {
    entries: BTreeMap<SimTime, Vector3>,
}

impl FieldHistory {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// A history holding the zero vector at time zero.
    pub fn zero_at_start() -> Self {
        let mut h = Self::new();
        h.record(SimTime::ZERO, Vector3::ZERO);
        h
    }

    /// Record `value` at `time` unless a value already exists there.
    ///
    /// Returns `true` if the value was stored.
    pub fn record(&mut self, time: SimTime, value: Vector3) -> bool {
        use std::collections::btree_map::Entry;
        match self.entries.entry(time) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Value recorded at exactly `time`, if any.
    pub fn at(&self, time: SimTime) -> Option<Vector3> {
        self.entries.get(&time).copied()
    }

    /// Whether a value is recorded at exactly `time`.
    pub fn contains(&self, time: SimTime) -> bool {
        self.entries.contains_key(&time)
    }

    /// Number of recorded times.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded times in ascending order.
    pub fn times(&self) -> impl Iterator<Item = SimTime> + '_ {
        self.entries.keys().copied()
    }

    /// All `(time, value)` entries in ascending time order.
    pub fn iter(&self) -> impl Iterator<Item = (SimTime, Vector3)> + '_ {
        self.entries.iter().map(|(t, v)| (*t, *v))
    }
}
