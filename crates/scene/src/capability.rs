//! What a node contributes to a frame beyond its placement.

use crate::light::LightId;

/// Behaviour the rendering backend attaches to a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Capability {
    /// Unit RGB axis segments at the local origin.
    Frame,
    /// Point light emitting from the local origin.
    Light { id: LightId },
    /// Camera-facing quad of half-extent `size`.
    Sprite { size: f64 },
    /// Lit sphere tessellated into `slices` segments per angle.
    Sphere { radius: f64, slices: u32 },
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Frame => "frame",
            Self::Light { .. } => "light",
            Self::Sprite { .. } => "sprite",
            Self::Sphere { .. } => "sphere",
        }
    }
}
