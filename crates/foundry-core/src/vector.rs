//! Three-component field vector.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A three-component real vector used for every field quantity
/// (electric field, magnetic field, current density, RK4 stages).
///
/// `Vector3` is a plain value type: it is `Copy`, supports componentwise
/// addition and subtraction, scalar multiplication from either side, and
/// exact componentwise equality. Components are named after the lattice
/// axes (`x` ↔ I, `y` ↔ J, `z` ↔ K).
///
/// # Examples
///
/// ```
/// use foundry_core::Vector3;
///
/// let a = Vector3::new(1.0, 2.0, 3.0);
/// let b = Vector3::new(0.5, 0.5, 0.5);
/// assert_eq!(a + b, Vector3::new(1.5, 2.5, 3.5));
/// assert_eq!(2.0 * a, a * 2.0);
/// assert_eq!(a - a, Vector3::ZERO);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    /// Component along the I axis.
    pub x: f64,
    /// Component along the J axis.
    pub y: f64,
    /// Component along the K axis.
    pub z: f64,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a vector from its three components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A vector with all three components equal to `v`.
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Returns `true` if the vector compares equal to [`Vector3::ZERO`].
    ///
    /// Uses `==` on each component, so `-0.0` counts as zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Components as an array `[x, y, z]`.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Largest absolute component.
    pub fn max_abs(&self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

/// Formats as `"x y z"`, the layout used by the text export formats.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}
