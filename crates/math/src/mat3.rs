//! 3x3 real matrix.
//!
//! Storage is a fixed row-major array of nine scalars. Rows and columns are
//! exchanged as [`Vec3`] values; `get_col(j)` reads component `j` of each row.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::advisory::{Advisory, StabilityWarning};
use crate::error::{MathError, MathResult};
use crate::rotation::Quaternion;
use crate::vec3::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    m: [f64; 9],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    pub const ZERO: Self = Self { m: [0.0; 9] };

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a matrix from three row vectors.
    pub const fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self {
            m: [r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z],
        }
    }

    /// Builds a matrix from three column vectors.
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self {
            m: [c0.x, c1.x, c2.x, c0.y, c1.y, c2.y, c0.z, c1.z, c2.z],
        }
    }

    /// Builds a matrix from nine scalars in row-major order.
    #[allow(clippy::too_many_arguments)]
    pub const fn from_scalars(
        m00: f64,
        m01: f64,
        m02: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m20: f64,
        m21: f64,
        m22: f64,
    ) -> Self {
        Self {
            m: [m00, m01, m02, m10, m11, m12, m20, m21, m22],
        }
    }

    pub const fn from_row_major(m: [f64; 9]) -> Self {
        Self { m }
    }

    pub const fn to_row_major(&self) -> [f64; 9] {
        self.m
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> f64 {
        self.m[row * 3 + col]
    }

    pub fn get_row(&self, row: usize) -> Vec3 {
        Vec3::new(self.at(row, 0), self.at(row, 1), self.at(row, 2))
    }

    pub fn set_row(&mut self, row: usize, v: Vec3) {
        self.m[row * 3] = v.x;
        self.m[row * 3 + 1] = v.y;
        self.m[row * 3 + 2] = v.z;
    }

    pub fn get_col(&self, col: usize) -> Vec3 {
        Vec3::new(self.at(0, col), self.at(1, col), self.at(2, col))
    }

    pub fn set_col(&mut self, col: usize, v: Vec3) {
        self.m[col] = v.x;
        self.m[3 + col] = v.y;
        self.m[6 + col] = v.z;
    }

    /// Component-wise scalar multiplication.
    pub fn scale(&self, s: f64) -> Self {
        let mut out = *self;
        out.m.iter_mut().for_each(|c| *c *= s);
        out
    }

    /// Matrix product `self * rhs`: `C[i][j] = row_i(self) . col_j(rhs)`.
    pub fn mat_mul(&self, rhs: &Mat3) -> Mat3 {
        let mut out = Mat3::ZERO;
        for i in 0..3 {
            let row = self.get_row(i);
            for j in 0..3 {
                out.m[i * 3 + j] = row.dot(rhs.get_col(j));
            }
        }
        out
    }

    /// Matrix-vector product: `result[i] = row_i(self) . v`.
    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.get_row(0).dot(v),
            self.get_row(1).dot(v),
            self.get_row(2).dot(v),
        )
    }

    /// Integer matrix power by repeated squaring. Negative exponents raise
    /// the inverse.
    pub fn pow(&self, n: i32) -> MathResult<Mat3> {
        let mut base = if n < 0 { self.inverse()? } else { *self };
        let mut exp = n.unsigned_abs();
        let mut out = Mat3::IDENTITY;
        while exp > 0 {
            if exp & 1 == 1 {
                out = out.mat_mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mat_mul(&base);
            }
        }
        Ok(out)
    }

    /// Matrix power for a real exponent; only integral values are defined.
    pub fn powf(&self, exponent: f64) -> MathResult<Mat3> {
        if exponent.fract() != 0.0 || !exponent.is_finite() {
            return Err(MathError::UnsupportedOperation(format!(
                "matrix power with non-integer exponent {exponent}"
            )));
        }
        if exponent < f64::from(i32::MIN) || exponent > f64::from(i32::MAX) {
            return Err(MathError::UnsupportedOperation(format!(
                "matrix power exponent {exponent} out of range"
            )));
        }
        self.pow(exponent as i32)
    }

    /// `self * inverse(rhs)`.
    pub fn div_mat(&self, rhs: &Mat3) -> MathResult<Mat3> {
        Ok(self.mat_mul(&rhs.inverse()?))
    }

    /// Solves `self * x = v` through the explicit inverse.
    ///
    /// The result carries [`StabilityWarning::ExplicitInverseSolve`]; callers
    /// that need accuracy on ill-conditioned systems should factorize instead.
    pub fn solve(&self, v: Vec3) -> MathResult<Advisory<Vec3>> {
        let x = self.inverse()?.mul_vec(v);
        Ok(Advisory::new(x, StabilityWarning::ExplicitInverseSolve))
    }

    pub fn div_scalar(&self, s: f64) -> MathResult<Mat3> {
        if s == 0.0 {
            return Err(MathError::DivideByZero {
                context: "matrix divided by zero scalar",
            });
        }
        Ok(self.scale(1.0 / s))
    }

    pub fn transpose(&self) -> Mat3 {
        Mat3::from_cols(self.get_row(0), self.get_row(1), self.get_row(2))
    }

    /// Inverse by the adjugate method.
    ///
    /// Fails with [`MathError::SingularMatrix`] when the determinant is zero,
    /// subnormal or non-finite, or when any entry of the result would not be
    /// finite.
    pub fn inverse(&self) -> MathResult<Mat3> {
        let det = self.det();
        if !det.is_normal() {
            return Err(MathError::SingularMatrix { det });
        }
        let a = |r, c| self.at(r, c);
        let cofactors = Mat3::from_scalars(
            a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1),
            a(1, 2) * a(2, 0) - a(1, 0) * a(2, 2),
            a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0),
            a(0, 2) * a(2, 1) - a(0, 1) * a(2, 2),
            a(0, 0) * a(2, 2) - a(0, 2) * a(2, 0),
            a(0, 1) * a(2, 0) - a(0, 0) * a(2, 1),
            a(0, 1) * a(1, 2) - a(0, 2) * a(1, 1),
            a(0, 2) * a(1, 0) - a(0, 0) * a(1, 2),
            a(0, 0) * a(1, 1) - a(0, 1) * a(1, 0),
        );
        let mut out = cofactors.transpose();
        for c in out.m.iter_mut() {
            *c /= det;
        }
        if out.m.iter().any(|c| !c.is_finite()) {
            return Err(MathError::SingularMatrix { det });
        }
        Ok(out)
    }

    pub fn trace(&self) -> f64 {
        self.at(0, 0) + self.at(1, 1) + self.at(2, 2)
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn det(&self) -> f64 {
        let a = |r, c| self.at(r, c);
        a(0, 0) * (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1))
            - a(0, 1) * (a(1, 0) * a(2, 2) - a(1, 2) * a(2, 0))
            + a(0, 2) * (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0))
    }

    /// Rotation matrix for a quaternion `(w, x, y, z)`.
    pub fn from_quaternion(q: Quaternion) -> Mat3 {
        let Quaternion { w, x, y, z } = q;
        Mat3::from_scalars(
            1.0 - 2.0 * y * y - 2.0 * z * z,
            2.0 * (x * y - z * w),
            2.0 * (x * z + y * w),
            2.0 * (x * y + z * w),
            1.0 - 2.0 * x * x - 2.0 * z * z,
            2.0 * (y * z - x * w),
            2.0 * (x * z - y * w),
            2.0 * (y * z + x * w),
            1.0 - 2.0 * x * x - 2.0 * y * y,
        )
    }

    /// True when every element differs from `other` by at most `max_abs_diff`.
    pub fn abs_diff_eq(&self, other: &Mat3, max_abs_diff: f64) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= max_abs_diff)
    }
}

impl Index<(usize, usize)> for Mat3 {
    type Output = f64;
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < 3 && col < 3, "Mat3 index out of range: ({row}, {col})");
        &self.m[row * 3 + col]
    }
}

impl IndexMut<(usize, usize)> for Mat3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < 3 && col < 3, "Mat3 index out of range: ({row}, {col})");
        &mut self.m[row * 3 + col]
    }
}

impl Add for Mat3 {
    type Output = Mat3;
    fn add(self, rhs: Mat3) -> Mat3 {
        Mat3::from_rows(
            self.get_row(0) + rhs.get_row(0),
            self.get_row(1) + rhs.get_row(1),
            self.get_row(2) + rhs.get_row(2),
        )
    }
}

impl Sub for Mat3 {
    type Output = Mat3;
    fn sub(self, rhs: Mat3) -> Mat3 {
        Mat3::from_rows(
            self.get_row(0) - rhs.get_row(0),
            self.get_row(1) - rhs.get_row(1),
            self.get_row(2) - rhs.get_row(2),
        )
    }
}

impl Neg for Mat3 {
    type Output = Mat3;
    fn neg(self) -> Mat3 {
        self.scale(-1.0)
    }
}

impl Mul for Mat3 {
    type Output = Mat3;
    fn mul(self, rhs: Mat3) -> Mat3 {
        self.mat_mul(&rhs)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.mul_vec(rhs)
    }
}

impl Mul<f64> for Mat3 {
    type Output = Mat3;
    fn mul(self, rhs: f64) -> Mat3 {
        self.scale(rhs)
    }
}

impl Mul<Mat3> for f64 {
    type Output = Mat3;
    fn mul(self, rhs: Mat3) -> Mat3 {
        rhs.scale(self)
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = |i: usize| self.get_row(i);
        writeln!(f, "[{:.6}, {:.6}, {:.6}", r(0).x, r(0).y, r(0).z)?;
        writeln!(f, " {:.6}, {:.6}, {:.6}", r(1).x, r(1).y, r(1).z)?;
        write!(f, " {:.6}, {:.6}, {:.6}]", r(2).x, r(2).y, r(2).z)
    }
}
