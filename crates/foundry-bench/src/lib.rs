//! Benchmark profiles for the Foundry field simulator.
//!
//! - [`reference_profile`]: 21×21×21 lattice (9261 points) with a
//!   centre electrode rod
//! - [`stress_profile`]: 41×41×41 lattice (68921 points), same layout
//! - [`relaxed`]: a profile after voltage relaxation, ready for stepping

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use foundry_core::LatticeIndex;
use foundry_grid::SpatialGrid;
use foundry_solver::{FieldTimeStepper, StepperConfig, VoltageRelaxation};

fn rod_profile(n: u32) -> SpatialGrid {
    let mut grid = SpatialGrid::with_bounds(n, 0.0, f64::from(n - 1)).unwrap();
    let c = n / 2;
    for k in 0..n {
        let p = grid.point_at_mut(LatticeIndex::new(c, c, k)).unwrap();
        p.set_conductivity(1.0);
        p.set_voltage(1.0);
    }
    grid
}

/// 21×21×21 unit-spacing lattice with a 1 V electrode through the centre
/// column.
pub fn reference_profile() -> SpatialGrid {
    rod_profile(21)
}

/// 41×41×41 unit-spacing lattice, same layout as [`reference_profile`].
pub fn stress_profile() -> SpatialGrid {
    rod_profile(41)
}

/// `grid` relaxed to convergence at the default precision.
pub fn relaxed(mut grid: SpatialGrid) -> SpatialGrid {
    VoltageRelaxation::default().relax(&mut grid).unwrap();
    grid
}

/// A relaxed grid and a stepper that has already computed the initial
/// electric field, with the default time increment.
pub fn ready_to_step(grid: SpatialGrid) -> (SpatialGrid, FieldTimeStepper) {
    let mut grid = relaxed(grid);
    let mut stepper = FieldTimeStepper::new(StepperConfig::default()).unwrap();
    stepper.compute_initial_electric_field(&mut grid).unwrap();
    (grid, stepper)
}
