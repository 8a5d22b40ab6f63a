//! Per-node uniform data handed to the rendering backend.
//!
//! All structures use `#[repr(C)]` for predictable memory layout and
//! implement `Pod` and `Zeroable` for safe byte casting.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::transform::Transform;

/// Object uniform buffer data.
///
/// # Memory Layout
///
/// - Offset 0: model matrix (64 bytes)
/// - Offset 64: normal matrix (64 bytes)
/// - Total size: 128 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct ObjectUniform {
    /// Model matrix (object to world space).
    pub model: Mat4,
    /// Inverse transpose of the model matrix, for normals.
    pub normal_matrix: Mat4,
}

impl ObjectUniform {
    /// Size of the struct in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Creates an object uniform from a composed world transform.
    ///
    /// A non-invertible transform gets an identity normal matrix rather
    /// than NaN values.
    pub fn new(world: &Transform) -> Self {
        const EPSILON: f32 = 1e-6;
        let model = world.to_mat4();
        let normal_matrix = if model.determinant().abs() < EPSILON {
            Mat4::IDENTITY
        } else {
            model.inverse().transpose()
        };
        Self {
            model,
            normal_matrix,
        }
    }

    /// Creates an identity object uniform.
    pub fn identity() -> Self {
        Self {
            model: Mat4::IDENTITY,
            normal_matrix: Mat4::IDENTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypyr_math::{Mat3, Rot, Vec3};

    #[test]
    fn test_object_uniform_size() {
        // 2 Mat4 (2 * 64) = 128 bytes
        assert_eq!(ObjectUniform::SIZE, 128);
    }

    #[test]
    fn test_object_uniform_identity() {
        let u = ObjectUniform::new(&Transform::IDENTITY);
        assert_eq!(u.model, Mat4::IDENTITY);
        assert_eq!(u.normal_matrix, Mat4::IDENTITY);
        assert_eq!(ObjectUniform::identity().model, u.model);
    }

    #[test]
    fn test_normal_matrix_of_rigid_transform_is_rotation() {
        let world = Transform::new()
            .with_rotation(Rot::about_y(0.6))
            .with_translation(Vec3::new(1.0, -2.0, 3.0));
        let u = ObjectUniform::new(&world);

        // For a pure rotation the upper 3x3 of the normal matrix equals the model's.
        let n = glam::Mat3::from_mat4(u.normal_matrix);
        let m = glam::Mat3::from_mat4(u.model);
        assert!(n.abs_diff_eq(m, 1e-5));
    }

    #[test]
    fn test_normal_matrix_non_invertible() {
        let world = Transform::new().with_rotation(Mat3::ZERO);
        let u = ObjectUniform::new(&world);
        assert_eq!(u.normal_matrix, Mat4::IDENTITY);
        assert!(!u.normal_matrix.is_nan());
    }

    #[test]
    fn test_uniform_pod() {
        let u = ObjectUniform::identity();
        let bytes: &[u8] = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), ObjectUniform::SIZE);
    }
}
