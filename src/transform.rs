//! Mesh transform parameters.
//!
//! Provides a [`Transform`] struct with a fluent API for managing translation,
//! rotation (Euler angles), and scale, and for building the world matrix.

use crate::math::{Mat4, Vec3};

/// A 3D transform with translation, rotation (Euler angles), and scale.
///
/// Provides a fluent API where mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_translation_xyz(0.0, 0.0, 5.0)
///     .rotate_x(0.005)
///     .set_scale_uniform(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Vec3, // Euler angles in radians
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with default values (translation=0, rotation=0, scale=1).
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Translation ============

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn set_translation(&mut self, translation: Vec3) -> &mut Self {
        self.translation = translation;
        self
    }

    pub fn set_translation_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.translation = Vec3::new(x, y, z);
        self
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.translation = self.translation + delta;
        self
    }

    // ============ Rotation ============

    /// Get the rotation (Euler angles in radians).
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Set the rotation (Euler angles in radians).
    pub fn set_rotation(&mut self, rotation: Vec3) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Set the rotation from x, y, z components (radians).
    pub fn set_rotation_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    /// Add a delta rotation (Euler angles in radians).
    pub fn rotate(&mut self, delta: Vec3) -> &mut Self {
        self.rotation = self.rotation + delta;
        self
    }

    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.rotation.x += angle;
        self
    }

    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.rotation.y += angle;
        self
    }

    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        self.rotation.z += angle;
        self
    }

    // ============ Scale ============

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Set uniform scale (same value for x, y, z).
    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::new(s, s, s);
        self
    }

    // ============ Matrix Generation ============

    /// Generate the world matrix.
    ///
    /// Order: Translation * RotationX * RotationY * RotationZ * Scale
    /// (Scale applied first, then rotations, then translation)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::translation(self.translation.x, self.translation.y, self.translation.z)
            * Mat4::rotation_x(self.rotation.x)
            * Mat4::rotation_y(self.rotation.y)
            * Mat4::rotation_z(self.rotation.z)
            * Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec4;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, TAU};

    #[test]
    fn test_default() {
        let t = Transform::default();
        assert_eq!(t.translation(), Vec3::ZERO);
        assert_eq!(t.rotation(), Vec3::ZERO);
        assert_eq!(t.scale(), Vec3::ONE);
    }

    #[test]
    fn test_fluent_api() {
        let mut t = Transform::new();
        t.set_translation_xyz(1.0, 2.0, 3.0)
            .rotate_y(0.5)
            .set_scale_uniform(2.0);

        assert_eq!(t.translation(), Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(t.rotation().y, 0.5);
        assert_eq!(t.scale(), Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_rotate_accumulates() {
        let mut t = Transform::new();
        t.rotate_x(0.25).rotate_x(0.25).rotate(Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(t.rotation().x, 0.5);
        assert_relative_eq!(t.rotation().y, 1.0);
    }

    #[test]
    fn test_to_matrix_identity() {
        let t = Transform::default();
        assert_eq!(t.to_matrix(), Mat4::identity());
    }

    #[test]
    fn test_scale_before_rotation_before_translation() {
        let mut t = Transform::new();
        t.set_scale(Vec3::new(2.0, 1.0, 1.0))
            .set_rotation_xyz(0.0, 0.0, FRAC_PI_2)
            .set_translation_xyz(0.0, 0.0, 5.0);

        // (1,0,0) -> scale (2,0,0) -> rotate z 90° (0,2,0) -> translate (0,2,5)
        let p = t.to_matrix() * Vec4::point(1.0, 0.0, 0.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_full_turn_on_every_axis() {
        let mut t = Transform::new();
        t.set_rotation_xyz(TAU, TAU, TAU).translate(Vec3::new(1.0, 1.0, 1.0));

        let p = t.to_matrix() * Vec4::point(0.5, -0.5, 2.0);
        assert_relative_eq!(p.x, 1.5, epsilon = 1e-4);
        assert_relative_eq!(p.y, 0.5, epsilon = 1e-4);
        assert_relative_eq!(p.z, 3.0, epsilon = 1e-4);
    }
}
