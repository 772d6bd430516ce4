//! Grid invariant helpers shared by the unit tests.

use crate::classification::Classification;
use crate::grid::SpatialGrid;
use foundry_core::{Axis, Direction};
use indexmap::IndexSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &SpatialGrid) {
    for p in grid.points() {
        let idx = p.index();
        for nb in grid.neighbours(idx) {
            assert!(
                grid.neighbours(nb).contains(&idx),
                "neighbour symmetry violated: {nb} in N({idx}) but {idx} not in N({nb})"
            );
        }
    }
}

/// Assert that `Next` then `Prev` along any axis returns to the start.
pub fn assert_steps_invert(grid: &SpatialGrid) {
    for p in grid.points() {
        let idx = p.index();
        for axis in Axis::ALL {
            if let Some(n) = grid.neighbour(idx, axis, Direction::Next) {
                assert_eq!(grid.neighbour(n, axis, Direction::Prev), Some(idx));
            }
        }
    }
}

/// Assert that the arena holds exactly one point per lattice site, each
/// stored at its canonical position and resolvable from its own key.
pub fn assert_canonical_ordering_complete(grid: &SpatialGrid) {
    let geo = grid.geometry();
    assert_eq!(grid.len(), geo.len(), "point count != lattice size");
    let unique: IndexSet<_> = grid.points().iter().map(|p| p.index()).collect();
    assert_eq!(unique.len(), grid.len(), "duplicate lattice sites");
    for (position, p) in grid.points().iter().enumerate() {
        assert_eq!(geo.flat(p.index()), Some(position));
        assert_eq!(grid.index_of(p.key()), Some(p.index()));
    }
}

/// Assert the classification census of a cube whose end bound lies on the
/// lattice and which has at least two sites per axis.
pub fn assert_classification_counts(grid: &SpatialGrid) {
    let n = grid.geometry().points_per_axis() as usize;
    assert!(n >= 2, "census needs at least two sites per axis");
    let inner = n - 2;
    let count = |c: Classification| grid.points().iter().filter(|p| p.classification() == c).count();
    assert_eq!(count(Classification::Corner), 8);
    assert_eq!(count(Classification::Edge), 12 * inner);
    assert_eq!(count(Classification::Top), inner * inner);
    assert_eq!(count(Classification::Bottom), inner * inner);
    assert_eq!(count(Classification::SideFace), 4 * inner * inner);
    assert_eq!(count(Classification::Normal), inner * inner * inner);
    assert_eq!(count(Classification::Unclassified), 0);
    assert_eq!(count(Classification::Null), 0);
}

/// Run every compliance check.
pub fn run_full_compliance(grid: &SpatialGrid) {
    assert_neighbours_symmetric(grid);
    assert_steps_invert(grid);
    assert_canonical_ordering_complete(grid);
    assert_classification_counts(grid);
}
