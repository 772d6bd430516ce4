//! Test fixtures and assertion helpers for Foundry development.
//!
//! Grid builders for the small cubes the solver tests run on, plus
//! helpers that fill uniform fields and compare vectors with a tolerance.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use foundry_core::{Axis, Direction, FieldKind, LatticeIndex, SimTime, Vector3};
use foundry_grid::SpatialGrid;

pub use fixtures::{centre_electrode_cube, cube, rod_cube};

/// Record `value` for `kind` at `time` on every point.
///
/// Points that already hold a value at `time` keep it.
pub fn fill_field(grid: &mut SpatialGrid, kind: FieldKind, time: SimTime, value: Vector3) {
    for p in grid.points_mut() {
        p.record_field(kind, time, value);
    }
}

/// Mean of the six axis-neighbour voltages of `index`, absent neighbours
/// counting as zero.
pub fn six_neighbour_mean(grid: &SpatialGrid, index: LatticeIndex) -> f64 {
    let mut sum = 0.0;
    for axis in Axis::ALL {
        for direction in [Direction::Prev, Direction::Next] {
            sum += grid
                .neighbour(index, axis, direction)
                .and_then(|n| grid.point_at(n))
                .map_or(0.0, |p| p.voltage());
        }
    }
    sum / 6.0
}

/// Assert every component of `a` is within `tol` of `b`.
#[track_caller]
pub fn assert_vec_close(a: Vector3, b: Vector3, tol: f64) {
    assert!(
        (a - b).max_abs() <= tol,
        "vectors differ by more than {tol}: {a:?} vs {b:?}"
    );
}
