//! Relaxation solver errors.

use std::fmt;

/// Errors from [`VoltageRelaxation::relax`](crate::VoltageRelaxation::relax).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelaxError {
    /// The configured sweep cap was reached with points still changing.
    SweepLimitReached {
        /// Sweeps performed.
        sweeps: u64,
        /// Non-converged points in the last sweep.
        unconverged: usize,
    },
}

impl fmt::Display for RelaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SweepLimitReached {
                sweeps,
                unconverged,
            } => write!(
                f,
                "voltage relaxation did not converge after {sweeps} sweeps \
                 ({unconverged} points still changing)"
            ),
        }
    }
}

impl std::error::Error for RelaxError {}
