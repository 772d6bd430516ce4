//! Bounds, spacing and lattice arithmetic of a uniform cubic grid.

use foundry_core::constants::{MATERIAL_PERMITTIVITY, MIDPLANE_PERMITTIVITY, VACUUM_PERMITTIVITY};
use foundry_core::{Axis, GridKey, LatticeIndex};

use crate::classification::Classification;
use crate::error::GridError;

/// Geometry of a cubic grid: identical bounds and spacing on every axis.
///
/// The spacing is `(|end - start| + 1) / points_per_dim`. Lattice sites
/// sit at `start + n * spacing` for `n` in `0..points_per_axis()`, which
/// covers every coordinate from `start` up to and including `end` when
/// `end` falls on the lattice.
///
/// # Examples
///
/// ```
/// use foundry_core::{GridKey, LatticeIndex};
/// use foundry_grid::GridGeometry;
///
/// let geo = GridGeometry::new(101, 0.0, 100.0).unwrap();
/// assert_eq!(geo.spacing_delta(), 1.0);
/// assert_eq!(geo.points_per_axis(), 101);
/// assert_eq!(
///     geo.locate(GridKey::new(50.0, 50.0, 45.0)),
///     Some(LatticeIndex::new(50, 50, 45))
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    points_per_dim: u32,
    start: f64,
    end: f64,
    spacing: f64,
    per_axis: u32,
}

impl GridGeometry {
    /// Largest supported number of lattice sites per axis.
    pub const MAX_PER_AXIS: u32 = 1024;

    /// Relative snapping tolerance used when resolving coordinates, as a
    /// fraction of the spacing.
    pub const SNAP_TOLERANCE: f64 = 1e-9;

    /// Create the geometry for `points_per_dim` points between `start` and
    /// `end` inclusive.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if `points_per_dim` is 0,
    /// `Err(GridError::InvalidBounds)` if a bound is not finite or
    /// `end < start`, and `Err(GridError::TooManyPoints)` if the lattice
    /// would exceed [`MAX_PER_AXIS`](Self::MAX_PER_AXIS) sites per axis.
    pub fn new(points_per_dim: u32, start: f64, end: f64) -> Result<Self, GridError> {
        if points_per_dim == 0 {
            return Err(GridError::EmptyGrid);
        }
        if !start.is_finite() || !end.is_finite() || end < start {
            return Err(GridError::InvalidBounds { start, end });
        }
        let diff = (end - start).abs();
        let spacing = (diff + 1.0) / f64::from(points_per_dim);
        let steps = (diff / spacing + Self::SNAP_TOLERANCE).floor();
        // `steps` is finite and non-negative here; the cast saturates.
        let per_axis = steps as u64 + 1;
        if per_axis > u64::from(Self::MAX_PER_AXIS) {
            return Err(GridError::TooManyPoints { per_axis });
        }
        Ok(Self {
            points_per_dim,
            start,
            end,
            spacing,
            per_axis: per_axis as u32,
        })
    }

    /// Points per dimension as configured.
    pub fn points_per_dim(&self) -> u32 {
        self.points_per_dim
    }

    /// Lattice sites per axis actually generated between the bounds.
    pub fn points_per_axis(&self) -> u32 {
        self.per_axis
    }

    /// Total number of lattice sites.
    pub fn len(&self) -> usize {
        let n = self.per_axis as usize;
        n * n * n
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Start bound, shared by all axes.
    pub fn start_bound(&self) -> f64 {
        self.start
    }

    /// End bound, shared by all axes.
    pub fn end_bound(&self) -> f64 {
        self.end
    }

    /// `|end - start|`.
    pub fn bounds_diff(&self) -> f64 {
        (self.end - self.start).abs()
    }

    /// Distance between adjacent lattice sites.
    pub fn spacing_delta(&self) -> f64 {
        self.spacing
    }

    /// Axial midpoint between the bounds.
    pub fn midpoint(&self) -> f64 {
        self.start + (self.end - self.start) / 2.0
    }

    fn tolerance(&self) -> f64 {
        Self::SNAP_TOLERANCE * self.spacing
    }

    /// Coordinate of lattice position `n` along any axis.
    pub fn coordinate(&self, n: u32) -> f64 {
        self.start + f64::from(n) * self.spacing
    }

    /// Real-valued key of a lattice site.
    pub fn key(&self, index: LatticeIndex) -> GridKey {
        GridKey::new(
            self.coordinate(index.i),
            self.coordinate(index.j),
            self.coordinate(index.k),
        )
    }

    /// Resolve one coordinate to a lattice position.
    pub fn locate_coordinate(&self, coordinate: f64) -> Option<u32> {
        if !coordinate.is_finite() {
            return None;
        }
        let n = (coordinate - self.start) / self.spacing;
        let nearest = n.round();
        if nearest < 0.0 || nearest >= f64::from(self.per_axis) {
            return None;
        }
        if ((n - nearest) * self.spacing).abs() > self.tolerance() {
            return None;
        }
        Some(nearest as u32)
    }

    /// Resolve a key to the lattice site it names.
    ///
    /// Snaps to the nearest site when every component is within
    /// [`SNAP_TOLERANCE`](Self::SNAP_TOLERANCE) spacings of it; otherwise
    /// the key is not on the grid.
    pub fn locate(&self, key: GridKey) -> Option<LatticeIndex> {
        Some(LatticeIndex::new(
            self.locate_coordinate(key.x)?,
            self.locate_coordinate(key.y)?,
            self.locate_coordinate(key.z)?,
        ))
    }

    /// Whether `index` lies inside the lattice.
    pub fn contains(&self, index: LatticeIndex) -> bool {
        index.i < self.per_axis && index.j < self.per_axis && index.k < self.per_axis
    }

    /// Canonical flat position of `index`, or `None` outside the lattice.
    pub fn flat(&self, index: LatticeIndex) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        let n = self.per_axis as usize;
        Some((index.i as usize * n + index.j as usize) * n + index.k as usize)
    }

    /// Inverse of [`flat`](Self::flat). `position` must be below [`len`](Self::len).
    pub fn unflat(&self, position: usize) -> LatticeIndex {
        let n = self.per_axis as usize;
        LatticeIndex::new(
            (position / (n * n)) as u32,
            ((position / n) % n) as u32,
            (position % n) as u32,
        )
    }

    /// Every lattice site in canonical order.
    pub fn indices(&self) -> impl Iterator<Item = LatticeIndex> + '_ {
        (0..self.len()).map(move |p| self.unflat(p))
    }

    /// Whether lattice position `n` lies on the start bound.
    pub fn on_start(&self, n: u32) -> bool {
        n == 0
    }

    /// Whether lattice position `n` lies on the end bound.
    pub fn on_end(&self, n: u32) -> bool {
        (self.coordinate(n) - self.end).abs() <= self.tolerance()
    }

    /// Lattice position of the end bound, if the end bound is on the lattice.
    pub fn end_position(&self) -> Option<u32> {
        let last = self.per_axis - 1;
        self.on_end(last).then_some(last)
    }

    /// Classification of the site at `index`.
    pub fn classify(&self, index: LatticeIndex) -> Classification {
        let on_bound = Axis::ALL.map(|axis| {
            let n = index.along(axis);
            self.on_start(n) || self.on_end(n)
        });
        Classification::from_bounds(on_bound, self.on_start(index.k), self.on_end(index.k))
    }

    /// Relative permittivity assigned by K position: vacuum above the
    /// midpoint, substrate material below it, and 1 on the midplane.
    pub fn permittivity(&self, index: LatticeIndex) -> f64 {
        let z = self.coordinate(index.k);
        let mid = self.midpoint();
        if (z - mid).abs() <= self.tolerance() {
            MIDPLANE_PERMITTIVITY
        } else if z > mid {
            VACUUM_PERMITTIVITY
        } else {
            MATERIAL_PERMITTIVITY
        }
    }
}
