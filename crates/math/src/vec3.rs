//! Three-component real vector.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::error::{MathError, MathResult};

/// A point or direction in 3D space.
///
/// Equality is component-wise. Adding or subtracting an `f64` broadcasts the
/// scalar to all three components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// All three components set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// The constant `(1, 1, 1)`.
    pub const fn ones() -> Self {
        Self::splat(1.0)
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise scalar multiplication.
    pub fn scale(self, s: f64) -> Self {
        Self::new(s * self.x, s * self.y, s * self.z)
    }

    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product.
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - rhs.y * self.z,
            self.z * rhs.x - rhs.z * self.x,
            self.x * rhs.y - rhs.x * self.y,
        )
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        // hypot scales internally, so large components do not overflow.
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Divides every component by `s`.
    pub fn div_scalar(self, s: f64) -> MathResult<Self> {
        if s == 0.0 {
            return Err(MathError::DivideByZero {
                context: "vector divided by zero scalar",
            });
        }
        Ok(self.scale(1.0 / s))
    }

    /// Unit vector in the same direction.
    pub fn normalize(self) -> MathResult<Self> {
        let n = self.norm();
        if n == 0.0 {
            return Err(MathError::DivideByZero {
                context: "normalize zero-length vector",
            });
        }
        if !n.is_finite() {
            return Err(MathError::UnsupportedOperation(format!(
                "normalize vector with non-finite length {n}"
            )));
        }
        Ok(Self::new(self.x / n, self.y / n, self.z / n))
    }

    /// Angle between two vectors in radians, within `[0, pi]`.
    ///
    /// The cosine ratio is clamped to `[-1, 1]` before `acos` so rounding on
    /// (anti)parallel inputs cannot produce NaN.
    pub fn angle(self, rhs: Self) -> MathResult<f64> {
        if self.norm() == 0.0 || rhs.norm() == 0.0 {
            return Err(MathError::DivideByZero {
                context: "angle with zero-length vector",
            });
        }
        let cos = self.normalize()?.dot(rhs.normalize()?);
        Ok(cos.clamp(-1.0, 1.0).acos())
    }

    /// Signed length of this vector's projection onto `onto`.
    pub fn project_onto(self, onto: Self) -> MathResult<f64> {
        let n = onto.norm();
        if n == 0.0 {
            return Err(MathError::DivideByZero {
                context: "projection onto zero-length vector",
            });
        }
        Ok(self.dot(onto) / n)
    }

    /// True when every component differs from `other` by at most `max_abs_diff`.
    pub fn abs_diff_eq(self, other: Self, max_abs_diff: f64) -> bool {
        (self.x - other.x).abs() <= max_abs_diff
            && (self.y - other.y).abs() <= max_abs_diff
            && (self.z - other.z).abs() <= max_abs_diff
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add<f64> for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl Add<Vec3> for f64 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        rhs + self
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub<f64> for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: f64) -> Vec3 {
        self + -rhs
    }
}

impl Sub<Vec3> for f64 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        -rhs + self
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f64) -> Vec3 {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        self.scale(-1.0)
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}, {:.6}]'", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_scalar_broadcast() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v + 1.0, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(1.0 + v, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(v - 1.0, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(10.0 - v, Vec3::new(9.0, 8.0, 7.0));
    }

    #[test]
    fn test_scale_commutes() {
        let v = Vec3::new(1.0, -2.0, 0.5);
        assert_eq!(v * 3.0, 3.0 * v);
        assert_eq!(v.scale(3.0), Vec3::new(3.0, -6.0, 1.5));
    }

    #[test]
    fn test_cross_basis() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_cross_anticommutes_and_is_perpendicular() {
        let samples = [
            (Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.5, 2.0)),
            (Vec3::new(0.3, -7.0, 1.1), Vec3::new(2.0, 2.0, -9.0)),
            (Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 5.0)),
        ];
        for (a, b) in samples {
            let c = a.cross(b);
            assert_eq!(c, -b.cross(a));
            assert!(a.dot(c).abs() < 1e-9);
            assert!(b.dot(c).abs() < 1e-9);
        }
    }

    #[test]
    fn test_norm_and_normalize() {
        let v = Vec3::new(3.0, 4.0, 12.0);
        assert!(approx_eq(v.norm(), 13.0));
        let n = v.normalize().unwrap();
        assert!(approx_eq(n.norm(), 1.0));
    }

    #[test]
    fn test_normalize_zero_fails() {
        let err = Vec3::ZERO.normalize().unwrap_err();
        assert!(matches!(err, MathError::DivideByZero { .. }));
    }

    #[test]
    fn test_normalize_large_and_tiny_vectors() {
        let big = Vec3::new(1e200, 0.0, 0.0);
        assert_eq!(big.norm(), 1e200);
        assert!(big.normalize().unwrap().abs_diff_eq(Vec3::X, EPSILON));
        let right = big.angle(Vec3::new(0.0, 1e200, 0.0)).unwrap();
        assert!(approx_eq(right, std::f64::consts::FRAC_PI_2));

        let tiny = Vec3::new(0.0, 3e-320, 4e-320);
        let unit = tiny.normalize().unwrap();
        assert!(unit.norm().is_finite());

        let inf = Vec3::new(f64::INFINITY, 0.0, 0.0);
        assert!(matches!(inf.normalize(), Err(MathError::UnsupportedOperation(_))));
    }

    #[test]
    fn test_div_scalar() {
        let v = Vec3::new(2.0, 4.0, 6.0);
        assert_eq!(v.div_scalar(2.0).unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert!(v.div_scalar(0.0).is_err());
    }

    #[test]
    fn test_angle() {
        assert!(approx_eq(Vec3::X.angle(Vec3::Y).unwrap(), std::f64::consts::FRAC_PI_2));
        // Parallel vectors whose ratio may round above 1.
        let a = Vec3::new(0.1, 0.2, 0.3);
        let angle = a.angle(a * 7.0).unwrap();
        assert!(!angle.is_nan());
        assert!(angle.abs() < 1e-6);
        assert!(approx_eq(a.angle(-a).unwrap(), std::f64::consts::PI));
        assert!(Vec3::ZERO.angle(Vec3::X).is_err());
    }

    #[test]
    fn test_project_onto() {
        let a = Vec3::new(3.0, 4.0, 0.0);
        assert!(approx_eq(a.project_onto(Vec3::new(10.0, 0.0, 0.0)).unwrap(), 3.0));
        assert!(a.project_onto(Vec3::ZERO).is_err());
    }

    #[test]
    fn test_index_access() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 9.0;
        assert_eq!(v.y, 9.0);
    }

    #[test]
    fn test_display_preserves_order() {
        let s = Vec3::new(1.0, 2.0, 3.0).to_string();
        assert_eq!(s, "[1.000000, 2.000000, 3.000000]'");
    }
}
