//! Demo scene construction and the per-frame driver.

use std::f64::consts::{FRAC_PI_2, TAU};

use hypyr_core::config::{CameraConfig, SceneConfig};
use hypyr_math::{MathResult, Vec3};
use hypyr_scene::{
    LightRegistry, ObjectUniform, OrbitCamera, PointLightUniform, SceneNode, SceneResult,
    SceneVisitor, SpectralClass, Star, StarVertex, Transform,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Camera moves bound to the demo's navigation keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavCommand {
    /// A
    OrbitLeft,
    /// D
    OrbitRight,
    /// W
    OrbitUp,
    /// S
    OrbitDown,
    /// =
    ZoomIn,
    /// -
    ZoomOut,
}

impl NavCommand {
    const STEP_RAD: f64 = 0.1;

    pub fn apply(self, camera: &mut OrbitCamera) -> MathResult<()> {
        match self {
            Self::OrbitLeft => camera.spherical_rotation(-Self::STEP_RAD, 0.0),
            Self::OrbitRight => camera.spherical_rotation(Self::STEP_RAD, 0.0),
            Self::OrbitUp => camera.spherical_rotation(0.0, Self::STEP_RAD),
            Self::OrbitDown => camera.spherical_rotation(0.0, -Self::STEP_RAD),
            Self::ZoomIn => camera.zoom(0.9)?,
            Self::ZoomOut => camera.zoom(1.1)?,
        }
        Ok(())
    }
}

/// Scripted input: one command every `period` frames, cycling.
pub fn scripted_command(frame: u32, period: u32) -> Option<NavCommand> {
    const SCRIPT: [NavCommand; 6] = [
        NavCommand::OrbitRight,
        NavCommand::OrbitUp,
        NavCommand::ZoomIn,
        NavCommand::OrbitLeft,
        NavCommand::OrbitDown,
        NavCommand::ZoomOut,
    ];
    if period == 0 || frame % period != 0 {
        return None;
    }
    Some(SCRIPT[(frame / period) as usize % SCRIPT.len()])
}

pub fn build_camera(config: &CameraConfig) -> OrbitCamera {
    let mut camera = OrbitCamera::new(config.eye(), config.target(), config.up());
    camera.y_fov_rad = config.y_fov_deg.to_radians();
    camera.x_fov_rad = config.x_fov_deg.to_radians();
    camera.z_near = config.z_near;
    camera.z_far = config.z_far;
    camera
}

/// Root frame holding a row of sprites, one light and a spinning sphere.
pub fn build_scene(config: &SceneConfig, lights: &mut LightRegistry) -> SceneResult<SceneNode> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut root = SceneNode::named("scene");

    for i in 0..config.sprite_count {
        let position = Vec3::new(
            f64::from(i) / 8.0 - 1.0,
            rng.r#gen::<f64>() - 0.5,
            rng.r#gen::<f64>() - 0.5,
        );
        let mut sprite =
            SceneNode::sprite(config.max_sprite_size * rng.r#gen::<f64>()).with_position(position);
        sprite.material.ambient_rgb = Vec3::new(rng.r#gen(), rng.r#gen(), rng.r#gen());
        root.add_child(sprite);
    }

    root.add_child(SceneNode::light(lights)?.with_position(Vec3::new(0.0, 0.0, 2.0)));
    root.add_child(
        SceneNode::sphere(0.25, 32)
            .with_position(Vec3::new(0.0, 0.0, -1.0))
            .with_angular_velocity(Vec3::new(0.0, 0.0, 0.5)),
    );

    debug!(nodes = root.node_count(), "demo scene built");
    Ok(root)
}

/// Random background stars on a sphere of radius `far`.
pub fn build_stars(config: &SceneConfig, far: f64) -> Vec<StarVertex> {
    const CLASSES: [SpectralClass; 7] = [
        SpectralClass::O,
        SpectralClass::B,
        SpectralClass::A,
        SpectralClass::F,
        SpectralClass::G,
        SpectralClass::K,
        SpectralClass::M,
    ];
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    (0..config.star_count)
        .map(|sao| {
            let star = Star {
                sao,
                ra_rad: rng.gen_range(0.0..TAU),
                dec_rad: rng.gen_range(-FRAC_PI_2..FRAC_PI_2),
                apparent_vm: rng.gen_range(-1.6..7.0),
                class: CLASSES[rng.gen_range(0..CLASSES.len())],
            };
            StarVertex::new(&star, far)
        })
        .collect()
}

/// Gathers the uniforms a backend would upload for one frame.
#[derive(Default)]
pub struct FrameUniforms {
    pub objects: Vec<ObjectUniform>,
    pub lights: Vec<PointLightUniform>,
}

impl FrameUniforms {
    pub fn clear(&mut self) {
        self.objects.clear();
        self.lights.clear();
    }
}

impl SceneVisitor for FrameUniforms {
    fn enter(&mut self, node: &SceneNode, world: &Transform, _depth: usize) {
        self.objects.push(ObjectUniform::new(world));
        if let Some(id) = node.light_id() {
            self.lights.push(PointLightUniform::new(id, world, &node.material));
        }
    }
}
