//! Core types for the Foundry electromagnetic field simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared by every other crate in the workspace:
//! field vectors, grid keys and lattice indices, simulation time,
//! per-point field histories, physical constants, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod error;
pub mod field;
pub mod history;
pub mod id;
pub mod time;
pub mod vector;

pub use constants::{PhysicalConstants, MATERIAL_PERMITTIVITY, VACUUM_PERMITTIVITY};
pub use error::{FieldError, StepError};
pub use field::FieldKind;
pub use history::FieldHistory;
pub use id::{Axis, Direction, GridKey, LatticeIndex};
pub use time::SimTime;
pub use vector::Vector3;
