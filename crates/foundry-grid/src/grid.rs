//! The point arena and its coordinate-based accessors.

use foundry_core::{Axis, Direction, FieldKind, GridKey, LatticeIndex, SimTime, Vector3};
use smallvec::SmallVec;

use crate::classification::Classification;
use crate::error::GridError;
use crate::geometry::GridGeometry;
use crate::point::GridPoint;
use crate::seed::VoltageSeed;

/// Every point of a cubic lattice, owned in canonical order.
///
/// Points are created at construction and never added or removed. Writes
/// addressed to a key that is not on the grid are dropped and reported
/// with a `false` return; reads return `None`.
///
/// # Examples
///
/// ```
/// use foundry_core::{Axis, Direction, GridKey};
/// use foundry_grid::{GridGeometry, SpatialGrid};
///
/// let grid = SpatialGrid::new(GridGeometry::new(3, 0.0, 2.0).unwrap());
/// assert_eq!(grid.len(), 27);
///
/// let corner = GridKey::new(0.0, 0.0, 0.0);
/// assert!(grid.neighbour_point(corner, Axis::I, Direction::Prev).is_none());
/// assert!(grid.neighbour_point(corner, Axis::I, Direction::Next).is_some());
/// ```
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    geometry: GridGeometry,
    points: Vec<GridPoint>,
}

impl SpatialGrid {
    /// Generate every lattice site with zero voltage and conductivity.
    pub fn new(geometry: GridGeometry) -> Self {
        let points = geometry
            .indices()
            .map(|index| {
                GridPoint::new(
                    index,
                    geometry.key(index),
                    geometry.permittivity(index),
                    geometry.classify(index),
                )
            })
            .collect();
        Self { geometry, points }
    }

    /// Shorthand for [`GridGeometry::new`] followed by [`SpatialGrid::new`].
    pub fn with_bounds(points_per_dim: u32, start: f64, end: f64) -> Result<Self, GridError> {
        Ok(Self::new(GridGeometry::new(points_per_dim, start, end)?))
    }

    /// Generate the lattice and apply an external voltage dataset.
    ///
    /// Sites the dataset does not mention keep zero voltage and
    /// conductivity. Later records for the same site overwrite earlier
    /// ones. Returns `Err(GridError::OffLattice)` for a record whose
    /// coordinates are not a lattice site.
    pub fn from_seeds<I>(geometry: GridGeometry, seeds: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = VoltageSeed>,
    {
        let mut grid = Self::new(geometry);
        for seed in seeds {
            let point = grid
                .point_mut(seed.key)
                .ok_or(GridError::OffLattice { key: seed.key })?;
            point.set_conductivity(seed.conductivity);
            point.set_voltage(seed.voltage);
        }
        Ok(grid)
    }

    /// The grid geometry.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in canonical order.
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// All points in canonical order, mutably.
    pub fn points_mut(&mut self) -> &mut [GridPoint] {
        &mut self.points
    }

    /// Iterate `(key, point)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (GridKey, &GridPoint)> + '_ {
        self.points.iter().map(|p| (p.key(), p))
    }

    /// Lattice site named by `key`.
    pub fn index_of(&self, key: GridKey) -> Option<LatticeIndex> {
        self.geometry.locate(key)
    }

    /// Whether `key` names a point of this grid.
    pub fn exists(&self, key: GridKey) -> bool {
        self.index_of(key).is_some()
    }

    /// Point at `index`.
    pub fn point_at(&self, index: LatticeIndex) -> Option<&GridPoint> {
        self.geometry.flat(index).map(|p| &self.points[p])
    }

    /// Mutable point at `index`.
    pub fn point_at_mut(&mut self, index: LatticeIndex) -> Option<&mut GridPoint> {
        let p = self.geometry.flat(index)?;
        Some(&mut self.points[p])
    }

    /// Point named by `key`.
    pub fn point(&self, key: GridKey) -> Option<&GridPoint> {
        self.point_at(self.index_of(key)?)
    }

    /// Mutable point named by `key`.
    pub fn point_mut(&mut self, key: GridKey) -> Option<&mut GridPoint> {
        let index = self.index_of(key)?;
        self.point_at_mut(index)
    }

    /// Adjacent site along `axis`, or `None` at the domain edge.
    pub fn neighbour(
        &self,
        index: LatticeIndex,
        axis: Axis,
        direction: Direction,
    ) -> Option<LatticeIndex> {
        index
            .step(axis, direction)
            .filter(|&n| self.geometry.contains(n))
    }

    /// Point one spacing away from `key` along `axis`.
    pub fn neighbour_point(
        &self,
        key: GridKey,
        axis: Axis,
        direction: Direction,
    ) -> Option<&GridPoint> {
        let index = self.index_of(key)?;
        self.point_at(self.neighbour(index, axis, direction)?)
    }

    /// Every present axis neighbour of `index`, at most six.
    pub fn neighbours(&self, index: LatticeIndex) -> SmallVec<[LatticeIndex; 6]> {
        let mut out = SmallVec::new();
        for axis in Axis::ALL {
            for direction in [Direction::Prev, Direction::Next] {
                if let Some(n) = self.neighbour(index, axis, direction) {
                    out.push(n);
                }
            }
        }
        out
    }

    /// Site sharing `index`'s I and J at the opposite K bound.
    ///
    /// A site on the start K bound pairs with the end K bound (when the end
    /// bound is on the lattice); a site on the end K bound pairs with the
    /// start. Any other site has no twin.
    pub fn twin(&self, index: LatticeIndex) -> Option<LatticeIndex> {
        if !self.geometry.contains(index) {
            return None;
        }
        if self.geometry.on_start(index.k) {
            let end = self.geometry.end_position()?;
            Some(index.with(Axis::K, end))
        } else if self.geometry.on_end(index.k) {
            Some(index.with(Axis::K, 0))
        } else {
            None
        }
    }

    /// Classification of the point at `key`, or [`Classification::Null`]
    /// when `key` is not on the grid.
    pub fn classification(&self, key: GridKey) -> Classification {
        self.point(key)
            .map_or(Classification::Null, GridPoint::classification)
    }

    /// Voltage at `key`.
    pub fn voltage(&self, key: GridKey) -> Option<f64> {
        self.point(key).map(GridPoint::voltage)
    }

    /// Voltage at `key`, reading absent points as zero.
    pub fn voltage_or_zero(&self, key: GridKey) -> f64 {
        self.voltage(key).unwrap_or(0.0)
    }

    /// Conductivity at `key`.
    pub fn conductivity(&self, key: GridKey) -> Option<f64> {
        self.point(key).map(GridPoint::conductivity)
    }

    /// Set the voltage at `key`. Returns `false` and does nothing when
    /// `key` is not on the grid.
    pub fn set_voltage(&mut self, key: GridKey, voltage: f64) -> bool {
        match self.point_mut(key) {
            Some(p) => {
                p.set_voltage(voltage);
                true
            }
            None => false,
        }
    }

    /// Set the conductivity at `key`. Returns `false` and does nothing when
    /// `key` is not on the grid.
    pub fn set_conductivity(&mut self, key: GridKey, conductivity: f64) -> bool {
        match self.point_mut(key) {
            Some(p) => {
                p.set_conductivity(conductivity);
                true
            }
            None => false,
        }
    }

    /// Field `kind` at `key` and exactly `time`.
    ///
    /// `None` when the point is absent or nothing is recorded at `time`.
    pub fn field(&self, kind: FieldKind, key: GridKey, time: SimTime) -> Option<Vector3> {
        self.point(key)?.field(kind, time)
    }

    /// Record field `kind` at `key` and `time`.
    ///
    /// Returns `false` when the point is absent or already holds a value
    /// at `time`.
    pub fn set_field(&mut self, kind: FieldKind, key: GridKey, value: Vector3, time: SimTime) -> bool {
        self.point_mut(key)
            .is_some_and(|p| p.record_field(kind, time, value))
    }
}
