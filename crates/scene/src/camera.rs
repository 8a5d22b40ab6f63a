//! Orbiting camera navigation.
//!
//! The camera keeps an eye/target/up triple and moves the eye over a sphere
//! centred on the target. Projection and view matrices are built by the
//! rendering backend from [`ViewParams`].

use std::f64::consts::{FRAC_PI_2, TAU};

use hypyr_math::{MathResult, Vec3};
use tracing::debug;

/// Everything the backend needs to build view and projection matrices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewParams {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub y_fov_rad: f64,
    pub x_fov_rad: f64,
    pub z_near: f64,
    pub z_far: f64,
}

impl ViewParams {
    /// Width over height, as the ratio of the two fields of view.
    pub fn aspect(&self) -> f64 {
        self.x_fov_rad / self.y_fov_rad
    }
}

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    /// Camera position in world space
    pub eye: Vec3,
    /// Look-at point and orbit centre
    pub target: Vec3,
    /// Reference up direction
    pub up: Vec3,
    pub y_fov_rad: f64,
    pub x_fov_rad: f64,
    pub z_near: f64,
    pub z_far: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(1.0, 0.0, 0.0),
            target: Vec3::ZERO,
            up: Vec3::Z,
            y_fov_rad: 45.0_f64.to_radians(),
            x_fov_rad: 45.0_f64.to_radians(),
            z_near: 1.0,
            z_far: 10.0,
        }
    }
}

impl OrbitCamera {
    /// Keeps the elevation this far from the poles.
    pub const POLAR_MARGIN_RAD: f64 = 0.01;
    /// Closest the eye may zoom to the target.
    pub const MIN_RADIUS: f64 = 0.1;

    /// Create a camera with default projection settings.
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            target,
            up,
            ..Self::default()
        }
    }

    /// Distance from eye to target.
    pub fn radius(&self) -> f64 {
        (self.target - self.eye).norm()
    }

    /// Azimuth and elevation of the eye-to-target vector, in radians.
    pub fn spherical_angles(&self) -> (f64, f64) {
        let d = self.target - self.eye;
        let theta = d.y.atan2(d.x);
        let phi = d.z.atan2(d.x.hypot(d.y));
        (theta, phi)
    }

    /// Orbits the eye around the target at constant radius.
    ///
    /// Azimuth wraps into `[0, 2pi)`; elevation is clamped to
    /// `POLAR_MARGIN_RAD` short of either pole.
    pub fn spherical_rotation(&mut self, d_theta_rad: f64, d_phi_rad: f64) {
        let radius = self.radius();
        let (theta, phi) = self.spherical_angles();

        let theta = (theta + d_theta_rad).rem_euclid(TAU);
        let limit = FRAC_PI_2 - Self::POLAR_MARGIN_RAD;
        let phi = (phi + d_phi_rad).clamp(-limit, limit);

        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_p, cos_p) = phi.sin_cos();
        let d = radius * Vec3::new(cos_t * cos_p, sin_t * cos_p, sin_p);
        self.eye = self.target - d;

        debug!(theta, phi, radius, "camera orbit");
    }

    /// Scales the eye-to-target distance by `pct`, never below `MIN_RADIUS`.
    ///
    /// Fails when the eye sits on the target and no direction is defined.
    pub fn zoom(&mut self, pct: f64) -> MathResult<()> {
        let d = self.target - self.eye;
        let radius = (pct * d.norm()).max(Self::MIN_RADIUS);
        self.eye = self.target - radius * d.normalize()?;

        debug!(pct, radius, "camera zoom");
        Ok(())
    }

    /// Recomputes the vertical field of view to match a viewport.
    ///
    /// A zero height is treated as one pixel.
    pub fn fit_viewport(&mut self, width: u32, height: u32) {
        let height = height.max(1);
        if width == 0 {
            return;
        }
        self.y_fov_rad = self.x_fov_rad * f64::from(height) / f64::from(width);
    }

    pub fn view_params(&self) -> ViewParams {
        ViewParams {
            eye: self.eye,
            target: self.target,
            up: self.up,
            y_fov_rad: self.y_fov_rad,
            x_fov_rad: self.x_fov_rad,
            z_near: self.z_near,
            z_far: self.z_far,
        }
    }
}
