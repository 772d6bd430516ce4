//! Synthetic electrode layouts that need no dataset.

use foundry_core::LatticeIndex;
use foundry_grid::{GridGeometry, SpatialGrid};
use tracing::debug;

/// Lattice position of the centre column `(c, c, ·)` and of the axial
/// midpoint, with `c = per_axis / 2`.
pub fn centre_position(geometry: &GridGeometry) -> u32 {
    geometry.points_per_axis() / 2
}

/// A grid with a vertical electrode rod through the centre column.
///
/// Without a gap every cell of the column is an electrode at `voltage`.
/// With a gap the centre cell is left as plain material; cells below it
/// are electrodes at 0 V and cells above it electrodes at `voltage`,
/// modelling a cut wire held at a potential on one side.
pub fn rod(geometry: GridGeometry, voltage: f64, gap: bool) -> SpatialGrid {
    let mut grid = SpatialGrid::new(geometry);
    let c = centre_position(&geometry);
    for k in 0..geometry.points_per_axis() {
        let v = if !gap {
            voltage
        } else if k == c {
            continue;
        } else if k < c {
            0.0
        } else {
            voltage
        };
        if let Some(p) = grid.point_at_mut(LatticeIndex::new(c, c, k)) {
            p.set_conductivity(1.0);
            p.set_voltage(v);
        }
    }
    debug!(centre = c, voltage, gap, "rod seeded");
    grid
}

/// Make the centre cell of the rod conducting, closing the gap left by
/// [`rod`]. Its voltage is left as is.
///
/// Returns `false` if the grid has no centre cell.
pub fn close_gap(grid: &mut SpatialGrid) -> bool {
    let c = centre_position(grid.geometry());
    match grid.point_at_mut(LatticeIndex::new(c, c, c)) {
        Some(p) => {
            p.set_conductivity(1.0);
            debug!(centre = c, "rod gap closed");
            true
        }
        None => false,
    }
}
