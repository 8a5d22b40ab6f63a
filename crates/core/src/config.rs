//! TOML configuration for the demo driver.
//!
//! Every section has defaults, so a partial file (or none at all) works.

use std::path::Path;

use hypyr_math::Vec3;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub camera: CameraConfig,
    pub scene: SceneConfig,
    pub run: RunConfig,
}

/// Initial camera placement and projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f64; 3],
    pub target: [f64; 3],
    pub up: [f64; 3],
    pub y_fov_deg: f64,
    pub x_fov_deg: f64,
    pub z_near: f64,
    pub z_far: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [3.0, -1.0, 1.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 0.0, 1.0],
            y_fov_deg: 45.0,
            x_fov_deg: 45.0,
            z_near: 1.0,
            z_far: 10.0,
        }
    }
}

impl CameraConfig {
    pub fn eye(&self) -> Vec3 {
        Vec3::from(self.eye)
    }

    pub fn target(&self) -> Vec3 {
        Vec3::from(self.target)
    }

    pub fn up(&self) -> Vec3 {
        Vec3::from(self.up)
    }
}

/// Contents of the generated demo scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub sprite_count: u32,
    /// Seed for sprite placement and colours
    pub seed: u64,
    pub max_sprite_size: f64,
    /// Background stars placed just inside the far plane
    pub star_count: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sprite_count: 16,
            seed: 0,
            max_sprite_size: 0.1,
            star_count: 64,
        }
    }
}

/// Frame loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub frames: u32,
    /// Fixed step in seconds; wall-clock deltas are used when absent.
    pub fixed_dt: Option<f64>,
    /// Upper bound on a wall-clock step, in seconds.
    pub max_dt: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            fixed_dt: None,
            max_dt: 0.25,
        }
    }
}

impl DemoConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a specific TOML file path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Run all validations, collecting every failure into one error.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();
        let cam = &self.camera;

        if cam.z_near <= 0.0 {
            errors.push(format!("camera.z_near must be positive, got {}", cam.z_near));
        }
        if cam.z_far <= cam.z_near {
            errors.push(format!(
                "camera.z_far ({}) must exceed camera.z_near ({})",
                cam.z_far, cam.z_near
            ));
        }
        if cam.y_fov_deg <= 0.0 || cam.x_fov_deg <= 0.0 {
            errors.push("camera fields of view must be positive".to_string());
        }
        if (cam.target() - cam.eye()).norm() == 0.0 {
            errors.push("camera.eye and camera.target must differ".to_string());
        }
        if self.scene.max_sprite_size < 0.0 {
            errors.push("scene.max_sprite_size must not be negative".to_string());
        }
        if let Some(dt) = self.run.fixed_dt
            && dt <= 0.0
        {
            errors.push(format!("run.fixed_dt must be positive, got {dt}"));
        }
        if self.run.max_dt <= 0.0 {
            errors.push(format!("run.max_dt must be positive, got {}", self.run.max_dt));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Config(errors.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.camera.eye(), Vec3::new(3.0, -1.0, 1.0));
        assert_eq!(config.scene.sprite_count, 16);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = DemoConfig::from_toml_str(
            r#"
            [run]
            frames = 10
            fixed_dt = 0.02

            [camera]
            eye = [5.0, 0.0, 0.0]
            "#,
        )
        .unwrap();
        assert_eq!(config.run.frames, 10);
        assert_eq!(config.run.fixed_dt, Some(0.02));
        assert_eq!(config.run.max_dt, 0.25);
        assert_eq!(config.camera.eye, [5.0, 0.0, 0.0]);
        assert_eq!(config.camera.z_far, 10.0);
        assert_eq!(config.scene, SceneConfig::default());
    }

    #[test]
    fn test_validation_collects_errors() {
        let err = DemoConfig::from_toml_str(
            r#"
            [camera]
            eye = [0.0, 0.0, 0.0]
            z_near = 0.0
            "#,
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("z_near"), "{msg}");
        assert!(msg.contains("must differ"), "{msg}");

        let err = DemoConfig::from_toml_str("[run]\nmax_dt = 0.0").unwrap_err();
        assert!(err.to_string().contains("max_dt"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = DemoConfig::from_toml_str("[camera\neye = 1").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hypyr.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[scene]\nsprite_count = 4\nseed = 7").unwrap();

        let config = DemoConfig::load_from_path(&path).unwrap();
        assert_eq!(config.scene.sprite_count, 4);
        assert_eq!(config.scene.seed, 7);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DemoConfig::load_from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
