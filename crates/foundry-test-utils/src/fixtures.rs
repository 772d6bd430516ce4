//! Reusable grid fixtures.
//!
//! - [`cube`]: `n` points per axis on bounds `0..=n-1`, spacing 1.
//! - [`centre_electrode_cube`]: a cube with one electrode at its centre.
//! - [`rod_cube`]: a cube with an electrode column through its centre.

use foundry_core::GridKey;
use foundry_grid::SpatialGrid;

/// Unit-spacing cube with `n` points per axis.
///
/// # Panics
///
/// Panics if `n` is 0 or exceeds the supported lattice size.
pub fn cube(n: u32) -> SpatialGrid {
    SpatialGrid::with_bounds(n, 0.0, f64::from(n - 1)).expect("valid cube fixture")
}

/// Unit-spacing cube of odd size `n` whose centre point is an electrode
/// held at `voltage`.
pub fn centre_electrode_cube(n: u32, voltage: f64) -> SpatialGrid {
    let mut grid = cube(n);
    let c = f64::from(n / 2);
    let key = GridKey::new(c, c, c);
    grid.set_conductivity(key, 1.0);
    grid.set_voltage(key, voltage);
    grid
}

/// Unit-spacing cube with the centre column `(n/2, n/2, k)` as an
/// electrode at `voltage` for every `k`.
pub fn rod_cube(n: u32, voltage: f64) -> SpatialGrid {
    let mut grid = cube(n);
    let c = f64::from(n / 2);
    for k in 0..n {
        let key = GridKey::new(c, c, f64::from(k));
        grid.set_conductivity(key, 1.0);
        grid.set_voltage(key, voltage);
    }
    grid
}
