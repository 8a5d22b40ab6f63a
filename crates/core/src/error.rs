//! Error types for the demo.

use hypyr_math::MathError;
use thiserror::Error;

/// Main error type for the demo.
#[derive(Error, Debug)]
pub enum Error {
    /// Numeric failures from the algebra layer
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using the demo's Error type.
pub type Result<T> = std::result::Result<T, Error>;
