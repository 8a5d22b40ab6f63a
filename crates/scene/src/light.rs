//! Light identifiers and GPU-facing light data.

use bytemuck::{Pod, Zeroable};
use glam::Vec3 as GpuVec3;
use hypyr_math::Vec3;
use tracing::debug;

use crate::error::{SceneError, SceneResult};
use crate::material::Material;
use crate::transform::Transform;

/// Slot index of a light in the rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightId(pub u32);

/// Hands out light slots in order. One registry is owned by whoever builds
/// the scene and passed to every light constructor.
#[derive(Debug)]
pub struct LightRegistry {
    next: u32,
    max: u32,
}

impl Default for LightRegistry {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_LIGHTS)
    }
}

impl LightRegistry {
    /// Fixed-function pipelines expose eight light slots.
    pub const DEFAULT_MAX_LIGHTS: u32 = 8;

    pub fn new(max: u32) -> Self {
        Self { next: 0, max }
    }

    pub fn allocate(&mut self) -> SceneResult<LightId> {
        if self.next >= self.max {
            return Err(SceneError::LightsExhausted { max: self.max });
        }
        let id = LightId(self.next);
        self.next += 1;
        debug!(light = id.0, "allocated light slot");
        Ok(id)
    }

    /// Number of slots handed out so far.
    pub fn allocated(&self) -> u32 {
        self.next
    }

    pub fn capacity(&self) -> u32 {
        self.max
    }
}

/// A point light packed for upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PointLightUniform {
    /// Light position in world space
    pub position: GpuVec3,
    /// Backend light slot
    pub slot: u32,
    pub ambient: GpuVec3,
    pub _pad0: f32,
    pub diffuse: GpuVec3,
    pub _pad1: f32,
    pub specular: GpuVec3,
    pub _pad2: f32,
}

fn to_gpu(v: Vec3) -> GpuVec3 {
    GpuVec3::new(v.x as f32, v.y as f32, v.z as f32)
}

impl PointLightUniform {
    /// Size of the struct in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Packs a light whose composed world transform is `world`.
    pub fn new(id: LightId, world: &Transform, material: &Material) -> Self {
        Self {
            position: to_gpu(world.translation),
            slot: id.0,
            ambient: to_gpu(material.ambient_rgb),
            _pad0: 0.0,
            diffuse: to_gpu(material.diffuse_rgb),
            _pad1: 0.0,
            specular: to_gpu(material.specular_rgb),
            _pad2: 0.0,
        }
    }
}
