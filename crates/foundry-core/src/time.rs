//! Simulation time as a totally ordered map key.

use std::cmp::Ordering;
use std::fmt;

/// A point in simulation time, usable as an ordered map key.
///
/// Wraps an `f64` and orders it with [`f64::total_cmp`], so equality is
/// exact: a history lookup at `0.1 + 0.2` does not find a value recorded
/// at `0.3`. Times produced by the stepper are always produced by the same
/// accumulation (`t + dt`), so they match themselves exactly.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimTime(pub f64);

impl SimTime {
    /// Time zero, when the initial fields live.
    pub const ZERO: Self = Self(0.0);

    /// The raw seconds value.
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl From<f64> for SimTime {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
