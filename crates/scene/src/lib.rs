//! Scene graph and camera.
//!
//! This crate provides scene management on top of `hypyr-math`:
//! - Node hierarchy with kinematic integration
//! - Transform composition for world placement
//! - Orbiting camera navigation
//! - Light slots and GPU-layout uniforms
//! - Far-sphere star field

pub mod camera;
pub mod capability;
mod error;
pub mod light;
pub mod material;
pub mod node;
pub mod star;
pub mod transform;
pub mod uniform;

pub use camera::{OrbitCamera, ViewParams};
pub use capability::Capability;
pub use error::{SceneError, SceneResult};
pub use light::{LightId, LightRegistry, PointLightUniform};
pub use material::{Material, ParamValue};
pub use node::{SceneNode, SceneVisitor};
pub use star::{SpectralClass, Star, StarVertex};
pub use transform::Transform;
pub use uniform::ObjectUniform;
