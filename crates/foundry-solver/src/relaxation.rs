//! Gauss–Seidel relaxation of the initial voltage field.
//!
//! Constructed via the builder pattern: [`VoltageRelaxation::builder`].

use std::time::Instant;

use foundry_core::{Axis, Direction, LatticeIndex};
use foundry_grid::{Classification, SpatialGrid};
use tracing::{debug, info, warn};

use crate::config::ConfigError;
use crate::error::RelaxError;
use crate::metrics::RelaxationReport;

/// Relaxes non-electrode voltages towards the discrete Laplace fixed point.
///
/// Each sweep visits the points in canonical order and replaces the
/// voltage of every point with conductivity 0 by a candidate:
///
/// ```text
/// v = (v[i-1] + v[i+1] + v[j-1] + v[j+1] + v[k-1] + v[k+1]) / 6
/// ```
///
/// Absent neighbours read as 0 V. A [`Top`](Classification::Top) point uses
/// its twin on the start K bound in place of `v[k+1]`; a
/// [`Bottom`](Classification::Bottom) point uses its twin on the end K bound
/// in place of `v[k-1]`. Updates are visible to the rest of the sweep.
///
/// A point counts as non-converged when the candidate and the stored value
/// differ after scaling by `10^decimal_places` and truncating toward zero.
/// Electrodes (conductivity > 0) are never touched.
///
/// ```
/// use foundry_core::GridKey;
/// use foundry_grid::SpatialGrid;
/// use foundry_solver::VoltageRelaxation;
///
/// let mut grid = SpatialGrid::with_bounds(3, 0.0, 2.0).unwrap();
/// let centre = GridKey::new(1.0, 1.0, 1.0);
/// grid.set_conductivity(centre, 1.0);
/// grid.set_voltage(centre, 1.0);
///
/// let report = VoltageRelaxation::default().relax(&mut grid).unwrap();
/// assert_eq!(report.unconverged_per_sweep.last(), Some(&0));
/// assert_eq!(grid.voltage(centre), Some(1.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VoltageRelaxation {
    decimal_places: u32,
    scale: f64,
    max_sweeps: Option<u64>,
}

/// Builder for [`VoltageRelaxation`].
///
/// Defaults: 3 decimal places, no sweep cap.
#[derive(Clone, Debug)]
pub struct VoltageRelaxationBuilder {
    decimal_places: u32,
    max_sweeps: Option<u64>,
}

impl VoltageRelaxation {
    /// Default comparison precision.
    pub const DEFAULT_DECIMAL_PLACES: u32 = 3;

    /// Largest accepted comparison precision.
    pub const MAX_DECIMAL_PLACES: u32 = 15;

    /// Create a new builder.
    pub fn builder() -> VoltageRelaxationBuilder {
        VoltageRelaxationBuilder {
            decimal_places: Self::DEFAULT_DECIMAL_PLACES,
            max_sweeps: None,
        }
    }

    /// Comparison precision in decimal places.
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Sweep cap, if any.
    pub fn max_sweeps(&self) -> Option<u64> {
        self.max_sweeps
    }

    /// Whether `a` and `b` agree to the configured number of decimal places.
    pub fn agrees(&self, a: f64, b: f64) -> bool {
        (a * self.scale).trunc() == (b * self.scale).trunc()
    }

    /// Candidate voltage of the point at `index` from the current voltages.
    pub fn candidate(&self, grid: &SpatialGrid, index: LatticeIndex) -> f64 {
        let at = |n: Option<LatticeIndex>| {
            n.and_then(|n| grid.point_at(n))
                .map_or(0.0, |p| p.voltage())
        };
        let step = |axis, direction| at(grid.neighbour(index, axis, direction));

        let lateral = step(Axis::I, Direction::Next)
            + step(Axis::I, Direction::Prev)
            + step(Axis::J, Direction::Next)
            + step(Axis::J, Direction::Prev);

        let classification = grid
            .point_at(index)
            .map_or(Classification::Null, |p| p.classification());
        let axial = match classification {
            Classification::Top => at(grid.twin(index)) + step(Axis::K, Direction::Prev),
            Classification::Bottom => step(Axis::K, Direction::Next) + at(grid.twin(index)),
            _ => step(Axis::K, Direction::Next) + step(Axis::K, Direction::Prev),
        };

        (lateral + axial) / 6.0
    }

    /// Run one sweep over the grid and return the number of points whose
    /// voltage changed.
    pub fn sweep(&self, grid: &mut SpatialGrid) -> usize {
        let mut unconverged = 0;
        for position in 0..grid.len() {
            let point = &grid.points()[position];
            if point.is_electrode() {
                continue;
            }
            let current = point.voltage();
            let candidate = self.candidate(grid, point.index());
            if !self.agrees(candidate, current) {
                grid.points_mut()[position].set_voltage(candidate);
                unconverged += 1;
            }
        }
        unconverged
    }

    /// Sweep until a full sweep changes nothing.
    ///
    /// Without a sweep cap this does not return until the grid converges.
    /// With one, returns `Err(RelaxError::SweepLimitReached)` once the cap
    /// is reached while points are still changing.
    pub fn relax(&self, grid: &mut SpatialGrid) -> Result<RelaxationReport, RelaxError> {
        let started = Instant::now();
        let mut report = RelaxationReport::default();
        loop {
            let unconverged = self.sweep(grid);
            report.sweeps += 1;
            report.unconverged_per_sweep.push(unconverged);
            debug!(sweep = report.sweeps, unconverged, "relaxation sweep");

            if unconverged == 0 {
                break;
            }
            if let Some(cap) = self.max_sweeps {
                if report.sweeps >= cap {
                    warn!(
                        sweeps = report.sweeps,
                        unconverged, "relaxation stopped at sweep limit"
                    );
                    return Err(RelaxError::SweepLimitReached {
                        sweeps: report.sweeps,
                        unconverged,
                    });
                }
            }
        }
        report.elapsed_us = started.elapsed().as_micros() as u64;
        info!(
            sweeps = report.sweeps,
            elapsed_us = report.elapsed_us,
            "voltage relaxation converged"
        );
        Ok(report)
    }
}

impl Default for VoltageRelaxation {
    fn default() -> Self {
        Self {
            decimal_places: Self::DEFAULT_DECIMAL_PLACES,
            scale: 10f64.powi(Self::DEFAULT_DECIMAL_PLACES as i32),
            max_sweeps: None,
        }
    }
}

impl VoltageRelaxationBuilder {
    /// Set the comparison precision in decimal places.
    pub fn decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// Cap the number of sweeps.
    pub fn max_sweeps(mut self, sweeps: u64) -> Self {
        self.max_sweeps = Some(sweeps);
        self
    }

    /// Build the solver.
    ///
    /// Returns `Err(ConfigError::InvalidDecimalPlaces)` above
    /// [`MAX_DECIMAL_PLACES`](VoltageRelaxation::MAX_DECIMAL_PLACES) and
    /// `Err(ConfigError::InvalidSweepLimit)` for a cap of zero.
    pub fn build(self) -> Result<VoltageRelaxation, ConfigError> {
        if self.decimal_places > VoltageRelaxation::MAX_DECIMAL_PLACES {
            return Err(ConfigError::InvalidDecimalPlaces {
                value: self.decimal_places,
                max: VoltageRelaxation::MAX_DECIMAL_PLACES,
            });
        }
        if self.max_sweeps == Some(0) {
            return Err(ConfigError::InvalidSweepLimit);
        }
        Ok(VoltageRelaxation {
            decimal_places: self.decimal_places,
            scale: 10f64.powi(self.decimal_places as i32),
            max_sweeps: self.max_sweeps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundry_core::GridKey;
    use foundry_test_utils::{centre_electrode_cube, cube, six_neighbour_mean};

    #[test]
    fn truncated_comparison() {
        let r = VoltageRelaxation::default();
        assert!(r.agrees(0.1234, 0.1239));
        assert!(!r.agrees(0.1234, 0.1241));
        // Truncation is toward zero on both sides of 0.
        assert!(r.agrees(-0.0004, 0.0004));
        assert!(!r.agrees(-0.0014, -0.0004));
    }

    #[test]
    fn builder_defaults_match_default() {
        let built = VoltageRelaxation::builder().build().unwrap();
        assert_eq!(built, VoltageRelaxation::default());
        assert_eq!(built.decimal_places(), 3);
        assert_eq!(built.max_sweeps(), None);
    }

    #[test]
    fn builder_rejects_bad_parameters() {
        assert!(matches!(
            VoltageRelaxation::builder().decimal_places(16).build(),
            Err(ConfigError::InvalidDecimalPlaces { value: 16, max: 15 })
        ));
        assert_eq!(
            VoltageRelaxation::builder().max_sweeps(0).build(),
            Err(ConfigError::InvalidSweepLimit)
        );
    }

    #[test]
    fn centre_electrode_survives_first_sweep() {
        let mut grid = centre_electrode_cube(3, 1.0);
        let r = VoltageRelaxation::default();
        let changed = r.sweep(&mut grid);
        assert!(changed > 0);
        assert_eq!(grid.voltage(GridKey::new(1.0, 1.0, 1.0)), Some(1.0));
    }

    #[test]
    fn twin_replaces_missing_axial_neighbour() {
        let mut grid = cube(3);
        // Bottom twin of (1, 1, 2) is (1, 1, 0).
        grid.set_voltage(GridKey::new(1.0, 1.0, 0.0), 6.0);
        let r = VoltageRelaxation::default();
        let top = LatticeIndex::new(1, 1, 2);
        // Prev K of the top point is (1, 1, 1) at 0 V; the twin supplies 6 V.
        assert_eq!(r.candidate(&grid, top), 1.0);
    }

    #[test]
    fn bottom_point_reads_twin_on_end_bound() {
        let mut grid = cube(3);
        grid.set_voltage(GridKey::new(1.0, 1.0, 2.0), 6.0);
        let r = VoltageRelaxation::default();
        let bottom = LatticeIndex::new(1, 1, 0);
        assert_eq!(grid.point_at(bottom).unwrap().classification(), Classification::Bottom);
        // Next K (1, 1, 1) is 0 V; the twin (1, 1, 2) stands in for prev K.
        assert_eq!(r.candidate(&grid, bottom), 1.0);
    }

    #[test]
    fn edge_point_on_k_bound_has_no_twin() {
        let mut grid = cube(3);
        let edge = LatticeIndex::new(0, 1, 2);
        assert_eq!(grid.point_at(edge).unwrap().classification(), Classification::Edge);
        // (0, 1, 0) would be the twin if edges used one.
        grid.set_voltage(GridKey::new(0.0, 1.0, 0.0), 6.0);
        let r = VoltageRelaxation::default();
        assert_eq!(r.candidate(&grid, edge), 0.0);
    }

    #[test]
    fn sweep_cap_reports_last_count() {
        let mut grid = centre_electrode_cube(5, 1.0);
        let r = VoltageRelaxation::builder().max_sweeps(1).build().unwrap();
        match r.relax(&mut grid) {
            Err(RelaxError::SweepLimitReached {
                sweeps,
                unconverged,
            }) => {
                assert_eq!(sweeps, 1);
                assert!(unconverged > 0);
            }
            other => panic!("expected sweep limit, got {other:?}"),
        }
    }

    #[test]
    fn converged_interior_satisfies_laplace() {
        let mut grid = centre_electrode_cube(5, 1.0);
        VoltageRelaxation::default().relax(&mut grid).unwrap();
        for p in grid.points() {
            if p.is_electrode() || p.classification() != Classification::Normal {
                continue;
            }
            let mean = six_neighbour_mean(&grid, p.index());
            assert!(
                (p.voltage() - mean).abs() < 2e-3,
                "point {} voltage {} vs neighbour mean {}",
                p.index(),
                p.voltage(),
                mean
            );
        }
    }
}
