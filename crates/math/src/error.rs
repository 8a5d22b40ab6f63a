//! Error types for the linear algebra layer.

use thiserror::Error;

/// Fatal numeric failures raised by vector and matrix operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Division by a zero scalar or normalization of a zero-length vector.
    #[error("Division by zero: {context}")]
    DivideByZero {
        /// Operation that attempted the division.
        context: &'static str,
    },

    /// Inversion of a matrix whose determinant is zero.
    #[error("Matrix is singular (det = {det})")]
    SingularMatrix {
        /// Determinant that was computed.
        det: f64,
    },

    /// Operands whose shapes cannot be combined.
    #[error("Incompatible shape: {0}")]
    IncompatibleShape(String),

    /// Operation with no definition for the given operands.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// Result type alias for math operations.
pub type MathResult<T> = std::result::Result<T, MathError>;
