//! Numerical solvers for Foundry simulations.
//!
//! - [`VoltageRelaxation`]: Gauss–Seidel relaxation of the initial voltage
//!   field to a discrete Laplace fixed point, with electrodes held fixed.
//! - [`curl`] and [`voltage_gradient`]: central-difference stencils.
//! - [`FieldTimeStepper`]: computes the initial electric field from the
//!   relaxed voltages, then advances B, E and J with fourth-order
//!   Runge–Kutta, one full-grid sweep per stage.
//!
//! Neither solver holds on to the grid. Every operation borrows the
//! [`SpatialGrid`](foundry_grid::SpatialGrid) for its own duration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod curl;
pub mod error;
pub mod metrics;
pub mod relaxation;
pub mod stepper;

pub use config::{ConfigError, StepperConfig};
pub use curl::{curl, voltage_gradient, CurlSource};
pub use error::RelaxError;
pub use metrics::{RelaxationReport, StepMetrics};
pub use relaxation::{VoltageRelaxation, VoltageRelaxationBuilder};
pub use stepper::FieldTimeStepper;
