//! Elementary rotation builders.
//!
//! Two conventions are kept apart:
//! - `about_*` rotates a column vector by `+angle` about the named axis.
//! - `frame_*` is the transpose of the same rotation: it re-expresses
//!   coordinates of a frame whose basis vectors are the matrix columns.

use crate::mat3::Mat3;
use crate::vec3::Vec3;

/// Quaternion `(w, x, y, z)` used only as a conversion intermediate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    pub fn vector_part(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> Self {
        [q.w, q.x, q.y, q.z]
    }
}

/// Rotation matrix constructors.
pub struct Rot;

impl Rot {
    pub fn about_x(angle_rad: f64) -> Mat3 {
        let (s, c) = angle_rad.sin_cos();
        Mat3::from_cols(Vec3::X, Vec3::new(0.0, c, s), Vec3::new(0.0, -s, c))
    }

    pub fn about_y(angle_rad: f64) -> Mat3 {
        let (s, c) = angle_rad.sin_cos();
        Mat3::from_cols(Vec3::new(c, 0.0, -s), Vec3::Y, Vec3::new(s, 0.0, c))
    }

    pub fn about_z(angle_rad: f64) -> Mat3 {
        let (s, c) = angle_rad.sin_cos();
        Mat3::from_cols(Vec3::new(c, s, 0.0), Vec3::new(-s, c, 0.0), Vec3::Z)
    }

    pub fn frame_x(angle_rad: f64) -> Mat3 {
        Self::about_x(angle_rad).transpose()
    }

    pub fn frame_y(angle_rad: f64) -> Mat3 {
        Self::about_y(angle_rad).transpose()
    }

    pub fn frame_z(angle_rad: f64) -> Mat3 {
        Self::about_z(angle_rad).transpose()
    }

    /// Quaternion for a rotation of `angle_rad` about `axis`.
    ///
    /// `axis` must already be unit length; it is not normalized here.
    pub fn axis_angle_quaternion(angle_rad: f64, axis: Vec3) -> Quaternion {
        let (s, c) = (0.5 * angle_rad).sin_cos();
        Quaternion::new(c, s * axis.x, s * axis.y, s * axis.z)
    }

    /// Rotation matrix for `angle_rad` about the unit vector `axis`.
    pub fn axis_angle(angle_rad: f64, axis: Vec3) -> Mat3 {
        Mat3::from_quaternion(Self::axis_angle_quaternion(angle_rad, axis))
    }
}
