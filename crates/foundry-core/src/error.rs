//! Error types shared by the grid and the solvers.
//!
//! Missing data at the grid API is expressed with `Option`; these errors
//! are for the places where a solver needs a value that was never
//! recorded, and for contract violations such as computing the initial
//! electric field twice.

use std::error::Error;
use std::fmt;

use crate::field::FieldKind;
use crate::id::LatticeIndex;
use crate::time::SimTime;

/// A field value required by a computation is not recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The point's history for `kind` has no entry at `time`.
    MissingSample {
        /// Which history was queried.
        kind: FieldKind,
        /// Lattice position of the point.
        index: LatticeIndex,
        /// The requested time.
        time: SimTime,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSample { kind, index, time } => {
                write!(f, "{kind} at point {index} has no value at time {time}")
            }
        }
    }
}

impl Error for FieldError {}

/// Errors from the field time stepper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The one-shot initial electric field computation was requested a
    /// second time.
    InitialFieldAlreadyComputed,
    /// A time step was requested before the initial electric field exists.
    InitialFieldNotComputed,
    /// A required field sample is missing.
    Field(FieldError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitialFieldAlreadyComputed => {
                write!(f, "the initial electric field was already computed")
            }
            Self::InitialFieldNotComputed => {
                write!(f, "the initial electric field has not been computed")
            }
            Self::Field(e) => write!(f, "field data: {e}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FieldError> for StepError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}
