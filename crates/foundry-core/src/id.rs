//! Grid addressing: real-valued [`GridKey`]s, integer [`LatticeIndex`]es,
//! and the [`Axis`] / [`Direction`] pair used by neighbour queries.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A real-valued `(x, y, z)` grid coordinate used as an addressing key.
///
/// Identity is exact: two keys are equal iff all three components are
/// bit-for-bit identical (`f64::to_bits`). The hash is derived from the
/// same bits, so `GridKey` is a lawful `HashMap`/`HashSet` key. Note that
/// `0.0` and `-0.0` are therefore *different* keys.
///
/// The grid itself addresses points by [`LatticeIndex`]; a `GridKey` is
/// resolved to a lattice site by the grid geometry, which snaps to the
/// nearest site within a small tolerance.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridKey {
    /// Coordinate along the I axis.
    pub x: f64,
    /// Coordinate along the J axis.
    pub y: f64,
    /// Coordinate along the K axis.
    pub z: f64,
}

impl GridKey {
    /// Create a key from its three coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Coordinate along `axis`.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::I => self.x,
            Axis::J => self.y,
            Axis::K => self.z,
        }
    }

    fn bits(&self) -> [u64; 3] {
        [self.x.to_bits(), self.y.to_bits(), self.z.to_bits()]
    }
}

impl PartialEq for GridKey {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for GridKey {}

impl Hash for GridKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

/// Formats as `"x y z"`, the coordinate layout of the text formats.
impl fmt::Display for GridKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// Integer position of a point on the cubic lattice.
///
/// `(0, 0, 0)` is the point at `startBound` on every axis. Lattice indices
/// are the grid's internal address; coordinates are recomputed from them
/// on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeIndex {
    /// Index along the I axis.
    pub i: u32,
    /// Index along the J axis.
    pub j: u32,
    /// Index along the K axis.
    pub k: u32,
}

impl LatticeIndex {
    /// Create a lattice index.
    pub const fn new(i: u32, j: u32, k: u32) -> Self {
        Self { i, j, k }
    }

    /// Index along `axis`.
    pub fn along(&self, axis: Axis) -> u32 {
        match axis {
            Axis::I => self.i,
            Axis::J => self.j,
            Axis::K => self.k,
        }
    }

    /// Copy of `self` with the component along `axis` replaced by `value`.
    pub fn with(self, axis: Axis, value: u32) -> Self {
        match axis {
            Axis::I => Self { i: value, ..self },
            Axis::J => Self { j: value, ..self },
            Axis::K => Self { k: value, ..self },
        }
    }

    /// Step one site along `axis` in `direction`.
    ///
    /// Returns `None` when stepping `Prev` from index 0. Upper bounds are
    /// not known here; the grid checks them.
    pub fn step(self, axis: Axis, direction: Direction) -> Option<Self> {
        let current = self.along(axis);
        let next = match direction {
            Direction::Next => current.checked_add(1)?,
            Direction::Prev => current.checked_sub(1)?,
        };
        Some(self.with(axis, next))
    }
}

impl fmt::Display for LatticeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.i, self.j, self.k)
    }
}

/// One of the three lattice axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First axis (x component).
    I,
    /// Second axis (y component).
    J,
    /// Third, "axial" axis (z component). Top and bottom faces are
    /// perpendicular to it.
    K,
}

impl Axis {
    /// All three axes in `I, J, K` order.
    pub const ALL: [Axis; 3] = [Axis::I, Axis::J, Axis::K];
}

/// Direction of a neighbour step along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards larger coordinates (`+ spacingDelta`).
    Next,
    /// Towards smaller coordinates (`- spacingDelta`).
    Prev,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn grid_key_equality_is_bitwise() {
        let a = GridKey::new(1.0, 2.0, 3.0);
        let b = GridKey::new(1.0, 2.0, 3.0);
        assert_eq!(a, b);
        assert_ne!(GridKey::new(0.0, 0.0, 0.0), GridKey::new(-0.0, 0.0, 0.0));
    }

    #[test]
    fn grid_key_hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(GridKey::new(0.1 + 0.2, 1.0, 1.0));
        assert!(set.contains(&GridKey::new(0.1 + 0.2, 1.0, 1.0)));
        // 0.1 + 0.2 != 0.3 in binary floating point.
        assert!(!set.contains(&GridKey::new(0.3, 1.0, 1.0)));
    }

    #[test]
    fn nan_key_equals_itself() {
        let k = GridKey::new(f64::NAN, 0.0, 0.0);
        assert_eq!(k, k);
    }

    #[test]
    fn lattice_step_prev_from_zero_is_none() {
        let idx = LatticeIndex::new(0, 3, 0);
        assert_eq!(idx.step(Axis::I, Direction::Prev), None);
        assert_eq!(idx.step(Axis::K, Direction::Prev), None);
        assert_eq!(
            idx.step(Axis::J, Direction::Prev),
            Some(LatticeIndex::new(0, 2, 0))
        );
    }

    #[test]
    fn lattice_step_next_increments_one_axis() {
        let idx = LatticeIndex::new(1, 1, 1);
        assert_eq!(
            idx.step(Axis::K, Direction::Next),
            Some(LatticeIndex::new(1, 1, 2))
        );
        assert_eq!(
            LatticeIndex::new(u32::MAX, 0, 0).step(Axis::I, Direction::Next),
            None
        );
    }

    #[test]
    fn along_matches_components() {
        let idx = LatticeIndex::new(4, 5, 6);
        let got: Vec<u32> = Axis::ALL.iter().map(|&a| idx.along(a)).collect();
        assert_eq!(got, vec![4, 5, 6]);
        let key = GridKey::new(0.5, 1.5, 2.5);
        assert_eq!(key.along(Axis::J), 1.5);
    }
}
