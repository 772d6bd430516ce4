//! Error types for grid construction and seeding.

use foundry_core::GridKey;
use std::fmt;

/// Errors arising from grid construction or seeding.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Attempted to construct a grid with zero points per dimension.
    EmptyGrid,
    /// The axis bounds are not finite or `end < start`.
    InvalidBounds {
        /// Requested start bound.
        start: f64,
        /// Requested end bound.
        end: f64,
    },
    /// The lattice would hold more points per axis than supported.
    TooManyPoints {
        /// Points per axis the bounds and spacing would produce.
        per_axis: u64,
    },
    /// A seed coordinate does not resolve to a lattice site.
    OffLattice {
        /// The offending coordinate.
        key: GridKey,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one point per dimension"),
            Self::InvalidBounds { start, end } => {
                write!(f, "invalid axis bounds: start {start}, end {end}")
            }
            Self::TooManyPoints { per_axis } => {
                write!(f, "grid of {per_axis} points per axis is too large")
            }
            Self::OffLattice { key } => {
                write!(f, "coordinate ({key}) is not a grid point")
            }
        }
    }
}

impl std::error::Error for GridError {}
