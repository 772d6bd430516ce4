//! Spatial grid for Foundry simulations.
//!
//! A [`SpatialGrid`] owns every [`GridPoint`] of a uniform cubic lattice in
//! a flat arena addressed by [`LatticeIndex`](foundry_core::LatticeIndex).
//! Real-valued [`GridKey`](foundry_core::GridKey)s are resolved to lattice
//! sites by the [`GridGeometry`].
//!
//! Lookups for positions that are not on the grid return `None`. There is
//! no sentinel point: callers decide what an absent neighbour means (the
//! relaxation solver reads it as zero volts, the curl stencil substitutes
//! the centre value).
//!
//! # Layout
//!
//! Points are stored in canonical order, `i` outermost and `k` innermost,
//! so the flat index of `(i, j, k)` is `(i * n + j) * n + k` for `n` points
//! per axis.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod classification;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod point;
pub mod seed;

#[cfg(test)]
pub(crate) mod compliance;

pub use classification::Classification;
pub use error::GridError;
pub use geometry::GridGeometry;
pub use grid::SpatialGrid;
pub use point::{GridPoint, Rk4Scratch};
pub use seed::VoltageSeed;
