//! End-to-end relaxation scenarios on small cubes.

use foundry_core::GridKey;
use foundry_grid::Classification;
use foundry_solver::VoltageRelaxation;
use foundry_test_utils::{centre_electrode_cube, rod_cube, six_neighbour_mean};
use proptest::prelude::*;

#[test]
fn centre_electrode_3x3x3_converges_and_holds() {
    let mut grid = centre_electrode_cube(3, 1.0);
    let centre = GridKey::new(1.0, 1.0, 1.0);
    let solver = VoltageRelaxation::default();

    solver.sweep(&mut grid);
    assert_eq!(grid.voltage(centre), Some(1.0));

    let report = solver.relax(&mut grid).unwrap();
    assert_eq!(report.unconverged_per_sweep.last(), Some(&0));
    assert_eq!(report.sweeps as usize, report.unconverged_per_sweep.len());
    assert_eq!(grid.voltage(centre), Some(1.0));

    // Face-adjacent points see the electrode and end up positive.
    let face = grid.voltage(GridKey::new(1.0, 1.0, 0.0)).unwrap();
    assert!(face > 0.0 && face < 1.0, "face voltage {face}");
}

#[test]
fn converged_grid_is_a_fixed_point() {
    let mut grid = centre_electrode_cube(5, 2.0);
    let solver = VoltageRelaxation::default();
    solver.relax(&mut grid).unwrap();
    let before: Vec<f64> = grid.points().iter().map(|p| p.voltage()).collect();
    assert_eq!(solver.sweep(&mut grid), 0);
    let after: Vec<f64> = grid.points().iter().map(|p| p.voltage()).collect();
    assert_eq!(before, after);
}

#[test]
fn electrodes_keep_their_voltage() {
    let mut grid = rod_cube(5, 3.5);
    let solver = VoltageRelaxation::default();
    solver.relax(&mut grid).unwrap();
    for p in grid.points().iter().filter(|p| p.is_electrode()) {
        assert_eq!(p.voltage(), 3.5, "electrode at {} moved", p.index());
    }
}

#[test]
fn interior_matches_neighbour_average() {
    let mut grid = rod_cube(7, 1.0);
    VoltageRelaxation::default().relax(&mut grid).unwrap();
    for p in grid.points() {
        if p.is_electrode() || p.classification() != Classification::Normal {
            continue;
        }
        let mean = six_neighbour_mean(&grid, p.index());
        assert!(
            (p.voltage() - mean).abs() < 2e-3,
            "{}: {} vs {}",
            p.index(),
            p.voltage(),
            mean
        );
    }
}

#[test]
fn finer_precision_needs_more_sweeps() {
    let mut coarse = centre_electrode_cube(5, 1.0);
    let mut fine = coarse.clone();
    let a = VoltageRelaxation::builder().decimal_places(2).build().unwrap();
    let b = VoltageRelaxation::builder().decimal_places(6).build().unwrap();
    let ra = a.relax(&mut coarse).unwrap();
    let rb = b.relax(&mut fine).unwrap();
    assert!(rb.sweeps >= ra.sweeps);
}

proptest! {
    #[test]
    fn relaxed_voltages_stay_between_ground_and_electrode(v in 0.01f64..100.0) {
        let mut grid = centre_electrode_cube(3, v);
        VoltageRelaxation::default().relax(&mut grid).unwrap();
        for p in grid.points() {
            prop_assert!(p.voltage() >= 0.0 && p.voltage() <= v, "{} at {}", p.voltage(), p.index());
        }
    }
}
