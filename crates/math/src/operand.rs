//! Tagged operands for call sites that multiply or divide values whose kind
//! is only known at runtime (scripted expressions, generic tooling).
//!
//! Typed code should call [`Mat3::mat_mul`], [`Mat3::mul_vec`] and
//! [`Mat3::scale`] directly; this module dispatches once on the operand pair
//! and reports shape mismatches as errors.

use crate::advisory::Advisory;
use crate::error::{MathError, MathResult};
use crate::mat3::Mat3;
use crate::vec3::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Vector(Vec3),
    Matrix(Mat3),
}

impl Operand {
    fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Vector(_) => "3x1 vector",
            Self::Matrix(_) => "3x3 matrix",
        }
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Self::Scalar(s)
    }
}

impl From<Vec3> for Operand {
    fn from(v: Vec3) -> Self {
        Self::Vector(v)
    }
}

impl From<Mat3> for Operand {
    fn from(m: Mat3) -> Self {
        Self::Matrix(m)
    }
}

/// `lhs * rhs`. Vector times vector is the dot product.
pub fn multiply(lhs: Operand, rhs: Operand) -> MathResult<Operand> {
    use Operand::*;
    match (lhs, rhs) {
        (Scalar(a), Scalar(b)) => Ok(Scalar(a * b)),
        (Scalar(s), Vector(v)) | (Vector(v), Scalar(s)) => Ok(Vector(v.scale(s))),
        (Scalar(s), Matrix(m)) | (Matrix(m), Scalar(s)) => Ok(Matrix(m.scale(s))),
        (Vector(a), Vector(b)) => Ok(Scalar(a.dot(b))),
        (Matrix(m), Vector(v)) => Ok(Vector(m.mul_vec(v))),
        (Matrix(a), Matrix(b)) => Ok(Matrix(a.mat_mul(&b))),
        (Vector(_), Matrix(_)) => Err(MathError::IncompatibleShape(
            "[3x1] cannot be multiplied by [3x3]; inner dimensions must match".into(),
        )),
    }
}

/// `lhs / rhs`.
///
/// Matrix over vector solves `lhs * x = rhs` and returns the stability
/// advisory alongside the solution.
pub fn divide(lhs: Operand, rhs: Operand) -> MathResult<Division> {
    use Operand::*;
    let exact = |o: Operand| -> MathResult<Division> { Ok(Division::Exact(o)) };
    match (lhs, rhs) {
        (Scalar(a), Scalar(b)) => {
            if b == 0.0 {
                return Err(MathError::DivideByZero {
                    context: "scalar divided by zero",
                });
            }
            exact(Scalar(a / b))
        }
        (Vector(v), Scalar(s)) => exact(Vector(v.div_scalar(s)?)),
        (Matrix(m), Scalar(s)) => exact(Matrix(m.div_scalar(s)?)),
        (Matrix(a), Matrix(b)) => exact(Matrix(a.div_mat(&b)?)),
        (Matrix(a), Vector(v)) => Ok(Division::Solved(a.solve(v)?)),
        (l, r) => Err(MathError::UnsupportedOperation(format!(
            "cannot divide {} by {}",
            l.kind(),
            r.kind()
        ))),
    }
}

/// Outcome of [`divide`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Division {
    Exact(Operand),
    Solved(Advisory<Vec3>),
}

impl Division {
    pub fn operand(&self) -> Operand {
        match self {
            Self::Exact(o) => *o,
            Self::Solved(a) => Operand::Vector(a.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::StabilityWarning;

    #[test]
    fn test_vector_times_matrix_is_rejected() {
        let err = multiply(Vec3::X.into(), Mat3::IDENTITY.into()).unwrap_err();
        assert!(matches!(err, MathError::IncompatibleShape(_)));
    }

    #[test]
    fn test_multiply_dispatch() {
        let m = Mat3::from_scalars(1.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 3.0);
        let v = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(
            multiply(m.into(), v.into()).unwrap(),
            Operand::Vector(Vec3::new(3.0, 1.0, 3.0))
        );
        assert_eq!(
            multiply(Operand::Scalar(2.0), m.into()).unwrap(),
            multiply(m.into(), Operand::Scalar(2.0)).unwrap()
        );
        assert_eq!(multiply(v.into(), v.into()).unwrap(), Operand::Scalar(3.0));
    }

    #[test]
    fn test_divide_matrix_by_vector_warns() {
        let m = Mat3::from_scalars(2.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 8.0);
        let out = divide(m.into(), Vec3::new(2.0, 4.0, 8.0).into()).unwrap();
        match out {
            Division::Solved(advisory) => {
                assert_eq!(advisory.warning, StabilityWarning::ExplicitInverseSolve);
                assert!(advisory.value.abs_diff_eq(Vec3::ones(), 1e-12));
            }
            other => panic!("expected solved division, got {other:?}"),
        }
    }

    #[test]
    fn test_divide_errors() {
        assert!(matches!(
            divide(Vec3::X.into(), Operand::Scalar(0.0)),
            Err(MathError::DivideByZero { .. })
        ));
        assert!(matches!(
            divide(Vec3::X.into(), Mat3::IDENTITY.into()),
            Err(MathError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            divide(Mat3::IDENTITY.into(), Mat3::ZERO.into()),
            Err(MathError::SingularMatrix { .. })
        ));
    }
}
