//! Linear algebra for scene dynamics.
//!
//! This crate provides the fixed-size algebra used by the scene graph:
//! - [`Vec3`] vectors with metric operations
//! - [`Mat3`] matrices with inversion and integer powers
//! - [`Rot`] rotation builders and axis-angle quaternions
//! - Explicit errors and stability advisories instead of NaN/inf results

mod advisory;
mod error;
mod mat3;
pub mod operand;
mod rotation;
pub mod util;
mod vec3;

pub use advisory::{Advisory, StabilityWarning};
pub use error::{MathError, MathResult};
pub use mat3::Mat3;
pub use operand::Operand;
pub use rotation::{Quaternion, Rot};
pub use vec3::Vec3;
