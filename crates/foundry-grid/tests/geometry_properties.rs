//! Property tests for grid geometry and classification.

use foundry_core::{GridKey, LatticeIndex};
use foundry_grid::{Classification, GridGeometry, SpatialGrid};
use proptest::prelude::*;

proptest! {
    #[test]
    fn spacing_times_count_is_bounds_diff_plus_one(
        ppd in 1u32..200,
        start in -50i32..50,
        span in 0u32..200,
    ) {
        let start = f64::from(start);
        let end = start + f64::from(span);
        let geo = GridGeometry::new(ppd, start, end).unwrap();
        let lhs = geo.spacing_delta() * f64::from(geo.points_per_dim());
        prop_assert!((lhs - (geo.bounds_diff() + 1.0)).abs() < 1e-9);
        prop_assert!(geo.points_per_axis() <= ppd);
        // The last site never overshoots the end bound.
        let last = geo.coordinate(geo.points_per_axis() - 1);
        prop_assert!(last <= end + 1e-9 * geo.spacing_delta());
    }

    #[test]
    fn key_locate_round_trip(
        n in 2u32..30,
        i in 0u32..30,
        j in 0u32..30,
        k in 0u32..30,
    ) {
        let geo = GridGeometry::new(n, 0.0, f64::from(n - 1)).unwrap();
        let idx = LatticeIndex::new(i % n, j % n, k % n);
        prop_assert_eq!(geo.locate(geo.key(idx)), Some(idx));
    }

    #[test]
    fn classification_is_reflection_symmetric_in_i_and_j(
        n in 2u32..12,
        i in 0u32..12,
        j in 0u32..12,
        k in 0u32..12,
    ) {
        let geo = GridGeometry::new(n, 0.0, f64::from(n - 1)).unwrap();
        let (i, j, k) = (i % n, j % n, k % n);
        let c = geo.classify(LatticeIndex::new(i, j, k));
        prop_assert_eq!(c, geo.classify(LatticeIndex::new(n - 1 - i, j, k)));
        prop_assert_eq!(c, geo.classify(LatticeIndex::new(i, n - 1 - j, k)));
        prop_assert_eq!(c, geo.classify(LatticeIndex::new(j, i, k)));
    }

    #[test]
    fn k_reflection_swaps_top_and_bottom(
        n in 3u32..12,
        i in 1u32..11,
        j in 1u32..11,
    ) {
        let geo = GridGeometry::new(n, 0.0, f64::from(n - 1)).unwrap();
        let (i, j) = (1 + i % (n - 2), 1 + j % (n - 2));
        prop_assert_eq!(geo.classify(LatticeIndex::new(i, j, 0)), Classification::Bottom);
        prop_assert_eq!(geo.classify(LatticeIndex::new(i, j, n - 1)), Classification::Top);
    }
}

#[test]
fn default_driver_geometry() {
    let geo = GridGeometry::new(101, 0.0, 100.0).unwrap();
    assert_eq!(geo.len(), 101 * 101 * 101);
    assert_eq!(geo.midpoint(), 50.0);
    assert_eq!(
        geo.locate(GridKey::new(50.0, 50.0, 100.0)).map(|idx| geo.classify(idx)),
        Some(Classification::Top)
    );
    assert_eq!(
        geo.locate(GridKey::new(0.0, 50.0, 50.0)).map(|idx| geo.classify(idx)),
        Some(Classification::SideFace)
    );
}

#[test]
fn offset_bounds_resolve_keys() {
    let grid = SpatialGrid::with_bounds(5, -2.0, 2.0).unwrap();
    assert_eq!(grid.geometry().spacing_delta(), 1.0);
    assert!(grid.exists(GridKey::new(-2.0, 0.0, 2.0)));
    assert!(!grid.exists(GridKey::new(-3.0, 0.0, 2.0)));
}
