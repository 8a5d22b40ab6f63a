//! Hypyr - Headless Demo Driver
//!
//! Builds the demo scene, then runs the frame loop the windowed front end
//! would run: integrate the scene graph, compose world transforms into
//! per-node uniforms, and apply camera navigation.

mod cli;
mod demo;

use anyhow::Result;
use tracing::{debug, info};

use hypyr_core::{DemoConfig, FrameClock};
use hypyr_scene::LightRegistry;

use demo::FrameUniforms;

/// Frames between scripted navigation commands.
const COMMAND_PERIOD: u32 = 10;

fn main() -> Result<()> {
    let args = cli::parse();

    // Initialize logging
    match args.log_level.as_deref() {
        Some(level) => hypyr_core::init_logging_with(level),
        None => hypyr_core::init_logging(),
    }
    info!("Starting hypyr");

    let mut config = match &args.config {
        Some(path) => DemoConfig::load_from_path(path)?,
        None => DemoConfig::default(),
    };
    if let Some(frames) = args.frames {
        config.run.frames = frames;
    }
    if args.fixed_dt.is_some() {
        config.run.fixed_dt = args.fixed_dt;
    }
    config.validate()?;

    let mut lights = LightRegistry::default();
    let mut scene = demo::build_scene(&config.scene, &mut lights)?;
    let mut camera = demo::build_camera(&config.camera);
    camera.fit_viewport(800, 600);
    let stars = demo::build_stars(&config.scene, 0.95 * camera.z_far);
    debug!(stars = stars.len(), "star field built");

    let mut clock = FrameClock::with_max_dt(config.run.max_dt);
    let mut uniforms = FrameUniforms::default();

    for frame in 0..config.run.frames {
        let dt = config.run.fixed_dt.unwrap_or_else(|| clock.tick());

        // Integration must finish for the whole tree before composition.
        scene.update(dt);

        uniforms.clear();
        scene.compose_transform(&mut uniforms);

        if let Some(command) = demo::scripted_command(frame, COMMAND_PERIOD) {
            command.apply(&mut camera)?;
            let view = camera.view_params();
            debug!(
                frame,
                ?command,
                eye = %view.eye,
                radius = camera.radius(),
                "camera moved"
            );
        }
    }

    let view = camera.view_params();
    info!(
        frames = config.run.frames,
        nodes = scene.node_count(),
        objects = uniforms.objects.len(),
        lights = uniforms.lights.len(),
        stars = stars.len(),
        elapsed_s = clock.elapsed_secs(),
        "run complete"
    );
    info!(eye = %view.eye, target = %view.target, aspect = view.aspect(), "final view");

    Ok(())
}
