//! Rigid transforms composed through the scene hierarchy.
//!
//! A [`Transform`] is a rotation block plus a translation column. The
//! rotation's columns are the local basis vectors expressed in the parent
//! frame, so composing `parent.compose(&local)` yields the child's placement
//! in the parent's parent frame.
//!
//! # Example
//!
//! ```
//! use hypyr_math::Vec3;
//! use hypyr_scene::Transform;
//!
//! let parent = Transform::new().with_translation(Vec3::new(10.0, 0.0, 0.0));
//! let child = Transform::new().with_translation(Vec3::new(0.0, 5.0, 0.0));
//!
//! let world = parent.compose(&child);
//! let origin = world.transform_point(Vec3::ZERO);
//! assert!(origin.abs_diff_eq(Vec3::new(10.0, 5.0, 0.0), 1e-12));
//! ```

use glam::Mat4;
use hypyr_math::{Mat3, MathResult, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Orientation relative to the parent frame
    pub rotation: Mat3,
    /// Origin of the local frame in parent coordinates
    pub translation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        rotation: Mat3::IDENTITY,
        translation: Vec3::ZERO,
    };

    /// Create a new transform at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform with the given translation.
    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// Create a transform with the given rotation.
    pub fn with_rotation(mut self, rotation: Mat3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Placement of `local` (expressed in this frame) in this frame's parent.
    pub fn compose(&self, local: &Transform) -> Transform {
        Transform {
            rotation: self.rotation.mat_mul(&local.rotation),
            translation: self.rotation.mul_vec(local.translation) + self.translation,
        }
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.rotation.mul_vec(p) + self.translation
    }

    /// Rotates a direction; translation does not apply.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.rotation.mul_vec(v)
    }

    /// General inverse. Fails when the rotation block is singular.
    pub fn inverse(&self) -> MathResult<Transform> {
        let inv = self.rotation.inverse()?;
        Ok(Transform {
            rotation: inv,
            translation: -inv.mul_vec(self.translation),
        })
    }

    /// Local x axis in parent coordinates.
    pub fn axis_x(&self) -> Vec3 {
        self.rotation.get_col(0)
    }

    /// Local y axis in parent coordinates.
    pub fn axis_y(&self) -> Vec3 {
        self.rotation.get_col(1)
    }

    /// Local z axis in parent coordinates.
    pub fn axis_z(&self) -> Vec3 {
        self.rotation.get_col(2)
    }

    /// Column-major 4x4 layout: rotation in the upper-left block,
    /// translation in the fourth column.
    pub fn to_cols_array(&self) -> [f32; 16] {
        let r = &self.rotation;
        let p = self.translation;
        [
            r[(0, 0)] as f32,
            r[(1, 0)] as f32,
            r[(2, 0)] as f32,
            0.0,
            r[(0, 1)] as f32,
            r[(1, 1)] as f32,
            r[(2, 1)] as f32,
            0.0,
            r[(0, 2)] as f32,
            r[(1, 2)] as f32,
            r[(2, 2)] as f32,
            0.0,
            p.x as f32,
            p.y as f32,
            p.z as f32,
            1.0,
        ]
    }

    /// Single-precision matrix for the rendering backend.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols_array(&self.to_cols_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypyr_math::Rot;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-12;

    fn approx_eq_vec3(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, EPSILON)
    }

    #[test]
    fn test_transform_default() {
        let t = Transform::default();
        assert_eq!(t.translation, Vec3::ZERO);
        assert_eq!(t.rotation, Mat3::IDENTITY);
        assert_eq!(t.to_mat4(), Mat4::IDENTITY);
    }

    #[test]
    fn test_transform_builder() {
        let t = Transform::new()
            .with_translation(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(Rot::about_z(FRAC_PI_2));

        assert_eq!(t.translation, Vec3::new(1.0, 2.0, 3.0));
        assert!(approx_eq_vec3(t.axis_x(), Vec3::Y));
        assert!(approx_eq_vec3(t.axis_y(), -Vec3::X));
        assert!(approx_eq_vec3(t.axis_z(), Vec3::Z));
    }

    #[test]
    fn test_compose_translation() {
        let parent = Transform::new().with_translation(Vec3::new(10.0, 0.0, 0.0));
        let child = Transform::new().with_translation(Vec3::new(0.0, 5.0, 0.0));

        let world_pos = parent.compose(&child).transform_point(Vec3::ZERO);

        assert!(
            approx_eq_vec3(world_pos, Vec3::new(10.0, 5.0, 0.0)),
            "Expected (10, 5, 0), got {:?}",
            world_pos
        );
    }

    #[test]
    fn test_compose_with_parent_rotation() {
        // Parent rotated 90 degrees about Z
        let parent = Transform::new().with_rotation(Rot::about_z(FRAC_PI_2));
        let child = Transform::new().with_translation(Vec3::new(1.0, 0.0, 0.0));

        let world_pos = parent.compose(&child).transform_point(Vec3::ZERO);

        assert!(
            approx_eq_vec3(world_pos, Vec3::new(0.0, 1.0, 0.0)),
            "Expected (0, 1, 0), got {:?}",
            world_pos
        );
    }

    #[test]
    fn test_compose_nested_hierarchy() {
        let grandparent = Transform::new().with_translation(Vec3::new(100.0, 0.0, 0.0));
        let parent = Transform::new().with_translation(Vec3::new(10.0, 0.0, 0.0));
        let child = Transform::new().with_translation(Vec3::new(1.0, 0.0, 0.0));

        let world = grandparent.compose(&parent).compose(&child);
        let world_pos = world.transform_point(Vec3::ZERO);

        assert!(
            approx_eq_vec3(world_pos, Vec3::new(111.0, 0.0, 0.0)),
            "Expected (111, 0, 0), got {:?}",
            world_pos
        );
    }

    #[test]
    fn test_compose_is_associative() {
        let a = Transform::new()
            .with_rotation(Rot::about_x(0.4))
            .with_translation(Vec3::new(1.0, 2.0, 3.0));
        let b = Transform::new()
            .with_rotation(Rot::about_y(-1.1))
            .with_translation(Vec3::new(0.0, -1.0, 0.5));
        let c = Transform::new()
            .with_rotation(Rot::about_z(2.0))
            .with_translation(Vec3::new(4.0, 0.0, 0.0));

        let left = a.compose(&b).compose(&c);
        let right = a.compose(&b.compose(&c));
        assert!(left.rotation.abs_diff_eq(&right.rotation, EPSILON));
        assert!(approx_eq_vec3(left.translation, right.translation));
    }

    #[test]
    fn test_transform_vector_ignores_translation() {
        let t = Transform::new().with_translation(Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(t.transform_vector(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_inverse() {
        let t = Transform::new()
            .with_rotation(Rot::about_y(0.9))
            .with_translation(Vec3::new(-2.0, 0.5, 7.0));
        let inv = t.inverse().unwrap();
        let id = t.compose(&inv);
        assert!(id.rotation.abs_diff_eq(&Mat3::IDENTITY, 1e-12));
        assert!(approx_eq_vec3(id.translation, Vec3::ZERO));
    }

    #[test]
    fn test_inverse_singular() {
        let t = Transform::new().with_rotation(Mat3::ZERO);
        assert!(t.inverse().is_err());
    }

    #[test]
    fn test_to_mat4_layout() {
        let t = Transform::new()
            .with_rotation(Rot::about_z(FRAC_PI_2))
            .with_translation(Vec3::new(1.0, 2.0, 3.0));
        let m = t.to_mat4();

        // Translation lives in the fourth column.
        assert_eq!(m.w_axis, glam::Vec4::new(1.0, 2.0, 3.0, 1.0));
        // First column is the local x axis.
        assert!((m.x_axis - glam::Vec4::new(0.0, 1.0, 0.0, 0.0)).length() < 1e-6);

        let p = m.transform_point3(glam::Vec3::new(1.0, 0.0, 0.0));
        let expected = t.transform_point(Vec3::X);
        let expected = glam::Vec3::new(expected.x as f32, expected.y as f32, expected.z as f32);
        assert!((p - expected).length() < 1e-6);
    }
}
