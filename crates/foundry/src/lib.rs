//! Foundry: a finite-difference time-domain electromagnetic field simulator.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Foundry sub-crates, plus the driver that strings the stages of a run
//! together. For most users, adding `foundry` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use foundry::prelude::*;
//!
//! // 7×7×7 unit-spacing lattice with an electrode through the centre column.
//! let mut grid = SpatialGrid::with_bounds(7, 0.0, 6.0).unwrap();
//! for k in 0..7 {
//!     let key = GridKey::new(3.0, 3.0, f64::from(k));
//!     grid.set_conductivity(key, 1.0);
//!     grid.set_voltage(key, 1.0);
//! }
//!
//! VoltageRelaxation::default().relax(&mut grid).unwrap();
//!
//! let mut stepper = FieldTimeStepper::new(StepperConfig::default()).unwrap();
//! stepper.compute_initial_electric_field(&mut grid).unwrap();
//! let metrics = stepper.advance_one_step(&mut grid).unwrap();
//! assert_eq!(metrics.time, SimTime(0.00125));
//! assert!(grid.field(FieldKind::Magnetic, GridKey::new(1.0, 1.0, 1.0), metrics.time).is_some());
//! ```
//!
//! # Modules
//!
//! Each re-exported module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `foundry-core` | Vectors, keys, time, histories, constants, field errors |
//! | [`grid`] | `foundry-grid` | Lattice geometry, points, classification, the grid |
//! | [`solver`] | `foundry-solver` | Voltage relaxation, curl stencils, RK4 time stepping |
//! | [`io`] | `foundry-io` | Text import/export, device points, state digests |
//!
//! [`run`] and [`scenario`] hold the driver.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`foundry-core`).
///
/// [`Vector3`](types::Vector3), [`GridKey`](types::GridKey),
/// [`SimTime`](types::SimTime), [`FieldKind`](types::FieldKind), the
/// per-point [`FieldHistory`](types::FieldHistory) and the physical
/// constants.
pub use foundry_core as types;

/// The uniform 3D lattice (`foundry-grid`).
pub use foundry_grid as grid;

/// Numerical solvers (`foundry-solver`).
///
/// [`solver::VoltageRelaxation`] for the initial voltage field and
/// [`solver::FieldTimeStepper`] for the coupled B/E/J update.
pub use foundry_solver as solver;

/// Text formats and digests (`foundry-io`).
pub use foundry_io as io;

pub mod run;
pub mod scenario;

pub use run::{run, DeviceImport, Exports, RunConfig, RunError, RunSummary, Seed};

/// Common imports for typical Foundry usage.
///
/// ```rust
/// use foundry::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use foundry_core::{
        Axis, Direction, FieldKind, GridKey, LatticeIndex, PhysicalConstants, SimTime, Vector3,
    };

    // Errors
    pub use foundry_core::{FieldError, StepError};
    pub use foundry_grid::GridError;
    pub use foundry_io::IoError;
    pub use foundry_solver::{ConfigError, RelaxError};

    // Grid
    pub use foundry_grid::{Classification, GridGeometry, GridPoint, SpatialGrid, VoltageSeed};

    // Solvers
    pub use foundry_solver::{
        FieldTimeStepper, RelaxationReport, StepMetrics, StepperConfig, VoltageRelaxation,
    };

    // Driver
    pub use crate::run::{run, RunConfig, RunError, RunSummary, Seed};
}
