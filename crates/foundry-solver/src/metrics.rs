//! Timing and progress records returned by the solvers.

use foundry_core::SimTime;

/// Timing of one [`advance_one_step`](crate::FieldTimeStepper::advance_one_step).
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Current time after the step.
    pub time: SimTime,
    /// Points updated.
    pub points: usize,
    /// Time spent on the magnetic-field update.
    pub magnetic_us: u64,
    /// Time spent on the electric-field update.
    pub electric_us: u64,
    /// Time spent on the current-density update.
    pub current_us: u64,
    /// Wall-clock time for the whole step.
    pub total_us: u64,
}

/// Outcome of a converged relaxation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelaxationReport {
    /// Sweeps performed, including the final one with no changes.
    pub sweeps: u64,
    /// Non-converged point count of each sweep, in order.
    pub unconverged_per_sweep: Vec<usize>,
    /// Wall-clock time, in microseconds.
    pub elapsed_us: u64,
}

impl RelaxationReport {
    /// Non-converged count of the first sweep, or 0 if none ran.
    pub fn initial_unconverged(&self) -> usize {
        self.unconverged_per_sweep.first().copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.time, SimTime::ZERO);
        assert_eq!(m.points, 0);
        assert_eq!(m.total_us, 0);
        let r = RelaxationReport::default();
        assert_eq!(r.sweeps, 0);
        assert_eq!(r.initial_unconverged(), 0);
    }
}
