//! Background star field: catalog entries placed on a far sphere.
//!
//! Only the geometry and colour model lives here; reading a catalog file is
//! left to the caller.

use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use glam::Vec3 as GpuVec3;
use hypyr_math::Vec3;

use crate::error::SceneError;

/// Apparent visual magnitude mapped to the dimmest end of the scale.
const DIM_MAGNITUDE: f64 = 7.0;
/// Apparent visual magnitude mapped to the brightest end of the scale.
const BRIGHT_MAGNITUDE: f64 = -1.6;

/// Harvard spectral classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpectralClass {
    #[default]
    Unknown,
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralClass {
    /// Hue and saturation, both in `[0, 1]`.
    pub fn hue_saturation(self) -> (f64, f64) {
        match self {
            Self::Unknown => (0.0, 0.0),
            Self::O => (266.0 / 360.0, 0.38),
            Self::B => (226.0 / 360.0, 0.35),
            Self::A => (224.0 / 360.0, 0.24),
            Self::F => (240.0 / 360.0, 0.06),
            Self::G => (33.0 / 360.0, 0.09),
            Self::K => (31.0 / 360.0, 0.28),
            Self::M => (29.0 / 360.0, 0.51),
        }
    }
}

impl FromStr for SpectralClass {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "unknown" => Self::Unknown,
            "O" => Self::O,
            "B" => Self::B,
            "A" => Self::A,
            "F" => Self::F,
            "G" => Self::G,
            "K" => Self::K,
            "M" => Self::M,
            other => return Err(SceneError::UnknownSpectralClass(other.to_string())),
        })
    }
}

/// One catalog star.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Star {
    /// Catalog number
    pub sao: u32,
    pub ra_rad: f64,
    pub dec_rad: f64,
    pub apparent_vm: f64,
    pub class: SpectralClass,
}

impl Star {
    /// Linear position of the magnitude between dim (0) and bright (1).
    fn brightness(&self) -> f64 {
        (self.apparent_vm - DIM_MAGNITUDE) / (BRIGHT_MAGNITUDE - DIM_MAGNITUDE)
    }

    /// Colour from the spectral hue/saturation, value scaled by magnitude
    /// between 0.5 and 1.0.
    pub fn rgb(&self) -> Vec3 {
        let (h, s) = self.class.hue_saturation();
        let v = 0.5 + 0.5 * self.brightness();
        hsv_to_rgb(h, s, v)
    }

    /// Point size in pixels, between 1 and 4.
    pub fn size(&self) -> f64 {
        1.0 + 3.0 * self.brightness()
    }

    /// Direction on a sphere of radius `far` around the origin.
    pub fn position(&self, far: f64) -> Vec3 {
        let (ra, dec) = (self.ra_rad, self.dec_rad);
        far * Vec3::new(ra.cos() * dec.cos(), ra.sin() * dec.cos(), dec.sin())
    }
}

/// HSV with every channel in `[0, 1]`; hue wraps.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Vec3 {
    if s == 0.0 {
        return Vec3::splat(v);
    }
    let h6 = h.rem_euclid(1.0) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u8 % 6 {
        0 => Vec3::new(v, t, p),
        1 => Vec3::new(q, v, p),
        2 => Vec3::new(p, v, t),
        3 => Vec3::new(p, q, v),
        4 => Vec3::new(t, p, v),
        _ => Vec3::new(v, p, q),
    }
}

/// A star packed as a sized, coloured point.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct StarVertex {
    pub position: GpuVec3,
    pub size: f32,
    pub color: GpuVec3,
}

impl StarVertex {
    pub fn new(star: &Star, far: f64) -> Self {
        let p = star.position(far);
        let c = star.rgb();
        Self {
            position: GpuVec3::new(p.x as f32, p.y as f32, p.z as f32),
            size: star.size() as f32,
            color: GpuVec3::new(c.x as f32, c.y as f32, c.z as f32),
        }
    }
}
