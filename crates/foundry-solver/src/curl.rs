//! Central-difference stencils: the discrete curl and the voltage gradient.

use foundry_core::{Axis, Direction, FieldError, FieldKind, SimTime, Vector3};
use foundry_grid::{GridPoint, SpatialGrid};

/// Which per-point vector the curl stencil reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurlSource {
    /// Electric field history.
    Electric,
    /// Magnetic field history.
    Magnetic,
    /// First Runge–Kutta estimate `y1`.
    Stage1,
    /// Second Runge–Kutta estimate `y2`.
    Stage2,
    /// Third Runge–Kutta estimate `y3`.
    Stage3,
}

impl CurlSource {
    /// Read this source at `point`.
    ///
    /// History sources need a value recorded at exactly `time`. Stage
    /// sources ignore `time` and always succeed.
    pub fn sample(self, point: &GridPoint, time: SimTime) -> Result<Vector3, FieldError> {
        let scratch = point.scratch();
        match self {
            Self::Electric => history_sample(point, FieldKind::Electric, time),
            Self::Magnetic => history_sample(point, FieldKind::Magnetic, time),
            Self::Stage1 => Ok(scratch.y1),
            Self::Stage2 => Ok(scratch.y2),
            Self::Stage3 => Ok(scratch.y3),
        }
    }
}

/// Value of history `kind` at `point` and exactly `time`.
pub(crate) fn history_sample(point: &GridPoint, kind: FieldKind, time: SimTime) -> Result<Vector3, FieldError> {
    point
        .field(kind, time)
        .ok_or(FieldError::MissingSample {
            kind,
            index: point.index(),
            time,
        })
}

/// Discrete curl of `source` at `point`.
///
/// ```text
/// x = (F[j+1].z - F[j-1].z - F[k+1].y + F[k-1].y) / 2h
/// y = (F[k+1].x - F[k-1].x - F[i+1].z + F[i-1].z) / 2h
/// z = (F[i+1].y - F[i-1].y - F[j+1].x + F[j-1].x) / 2h
/// ```
///
/// `h` is the grid spacing. A neighbour outside the grid contributes the
/// value at `point` itself, so the difference along that axis becomes
/// one-sided.
pub fn curl(
    grid: &SpatialGrid,
    source: CurlSource,
    point: &GridPoint,
    time: SimTime,
) -> Result<Vector3, FieldError> {
    let centre = source.sample(point, time)?;
    let index = point.index();
    let at = |axis: Axis, direction: Direction| -> Result<Vector3, FieldError> {
        match grid
            .neighbour(index, axis, direction)
            .and_then(|n| grid.point_at(n))
        {
            Some(p) => source.sample(p, time),
            None => Ok(centre),
        }
    };

    let next_i = at(Axis::I, Direction::Next)?;
    let prev_i = at(Axis::I, Direction::Prev)?;
    let next_j = at(Axis::J, Direction::Next)?;
    let prev_j = at(Axis::J, Direction::Prev)?;
    let next_k = at(Axis::K, Direction::Next)?;
    let prev_k = at(Axis::K, Direction::Prev)?;

    let denom = 2.0 * grid.geometry().spacing_delta();
    Ok(Vector3::new(
        (next_j.z - prev_j.z - next_k.y + prev_k.y) / denom,
        (next_k.x - prev_k.x - next_i.z + prev_i.z) / denom,
        (next_i.y - prev_i.y - next_j.x + prev_j.x) / denom,
    ))
}

/// Negative voltage gradient at `point` by central differences:
/// `(v[prev] - v[next]) / 2h` on each axis, absent neighbours reading 0 V.
pub fn voltage_gradient(grid: &SpatialGrid, point: &GridPoint) -> Vector3 {
    let index = point.index();
    let v = |axis, direction| {
        grid.neighbour(index, axis, direction)
            .and_then(|n| grid.point_at(n))
            .map_or(0.0, GridPoint::voltage)
    };
    let diff = |axis| v(axis, Direction::Prev) - v(axis, Direction::Next);
    let denom = 2.0 * grid.geometry().spacing_delta();
    (1.0 / denom) * Vector3::new(diff(Axis::I), diff(Axis::J), diff(Axis::K))
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundry_core::{GridKey, LatticeIndex};
    use foundry_test_utils::{assert_vec_close, cube, fill_field};

    fn point(grid: &SpatialGrid, i: u32, j: u32, k: u32) -> &GridPoint {
        grid.point_at(LatticeIndex::new(i, j, k)).unwrap()
    }

    #[test]
    fn uniform_field_has_zero_curl_everywhere() {
        let mut grid = cube(4);
        fill_field(&mut grid, FieldKind::Electric, SimTime::ZERO, Vector3::new(1.5, -2.0, 0.25));
        for p in grid.points() {
            let c = curl(&grid, CurlSource::Electric, p, SimTime::ZERO).unwrap();
            assert_eq!(c, Vector3::ZERO, "non-zero curl at {}", p.index());
        }
    }

    #[test]
    fn shear_field_curls_about_k() {
        // E = (0, x, 0) has curl (0, 0, 1).
        let mut grid = cube(5);
        let keys: Vec<GridKey> = grid.points().iter().map(|p| p.key()).collect();
        for key in keys {
            grid.set_field(FieldKind::Electric, key, Vector3::new(0.0, key.x, 0.0), SimTime::ZERO);
        }
        let interior = curl(&grid, CurlSource::Electric, point(&grid, 2, 2, 2), SimTime::ZERO).unwrap();
        assert_vec_close(interior, Vector3::new(0.0, 0.0, 1.0), 1e-12);
        // At i = 0 the previous neighbour is absent and the stencil is one-sided.
        let edge = curl(&grid, CurlSource::Electric, point(&grid, 0, 2, 2), SimTime::ZERO).unwrap();
        assert_vec_close(edge, Vector3::new(0.0, 0.0, 0.5), 1e-12);
    }

    #[test]
    fn stage_sources_read_scratch() {
        let mut grid = cube(3);
        for p in grid.points_mut() {
            p.scratch_mut().y2 = Vector3::new(0.0, 0.0, 7.0);
        }
        let p = point(&grid, 1, 1, 1);
        assert_eq!(CurlSource::Stage2.sample(p, SimTime(99.0)), Ok(Vector3::new(0.0, 0.0, 7.0)));
        assert_eq!(CurlSource::Stage1.sample(p, SimTime::ZERO), Ok(Vector3::ZERO));
        assert_eq!(curl(&grid, CurlSource::Stage2, p, SimTime::ZERO), Ok(Vector3::ZERO));
    }

    #[test]
    fn missing_time_is_an_error() {
        let grid = cube(3);
        let p = point(&grid, 1, 1, 1);
        assert_eq!(
            curl(&grid, CurlSource::Electric, p, SimTime::ZERO),
            Err(FieldError::MissingSample {
                kind: FieldKind::Electric,
                index: LatticeIndex::new(1, 1, 1),
                time: SimTime::ZERO,
            })
        );
        // B(0) exists from construction.
        assert_eq!(curl(&grid, CurlSource::Magnetic, p, SimTime::ZERO), Ok(Vector3::ZERO));
    }

    #[test]
    fn gradient_of_axial_ramp() {
        let mut grid = cube(5);
        let keys: Vec<GridKey> = grid.points().iter().map(|p| p.key()).collect();
        for key in keys {
            grid.set_voltage(key, key.z);
        }
        let interior = voltage_gradient(&grid, point(&grid, 2, 2, 2));
        assert_vec_close(interior, Vector3::new(0.0, 0.0, -1.0), 1e-12);
        // k = 0: previous neighbour reads 0 V, next is 1 V.
        let bottom = voltage_gradient(&grid, point(&grid, 2, 2, 0));
        assert_vec_close(bottom, Vector3::new(0.0, 0.0, -0.5), 1e-12);
    }
}
