//! Error types for scene operations.

use hypyr_math::MathError;
use thiserror::Error;

/// Error type for scene graph and camera operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Every light slot in the registry has been handed out.
    #[error("No light slots left (maximum {max})")]
    LightsExhausted {
        /// Capacity of the registry.
        max: u32,
    },

    /// Spectral class letter outside the Harvard scheme.
    #[error("Unknown spectral class: {0}")]
    UnknownSpectralClass(String),

    /// Numeric failure from the algebra layer.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

/// Result type alias for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
