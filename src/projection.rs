//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for all perspective
//! projection parameters (FOV, aspect ratio, near/far planes) and generates the
//! projection matrix used by the frame pipeline.

use crate::math::Mat4;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Aspect ratio (height / width).
    aspect_ratio: f32,
    /// Near clipping plane distance.
    z_near: f32,
    /// Far clipping plane distance.
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect_ratio` - Height divided by width
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn new(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_y,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(fov_y_degrees: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self::new(fov_y_degrees.to_radians(), aspect_ratio, z_near, z_far)
    }

    /// Aspect ratio (height / width) for a viewport of the given size.
    pub fn aspect_for(width: u32, height: u32) -> f32 {
        height as f32 / width.max(1) as f32
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Updates the aspect ratio (typically called on window resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Generates the perspective projection matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_3;

    #[test]
    fn from_degrees_converts_correctly() {
        let proj = Projection::from_degrees(60.0, 1.0, 0.1, 100.0);
        assert_relative_eq!(proj.fov_y(), FRAC_PI_3, epsilon = 1e-6);
    }

    #[test]
    fn aspect_is_height_over_width() {
        assert_relative_eq!(Projection::aspect_for(800, 600), 0.75);
        assert_relative_eq!(Projection::aspect_for(0, 10), 10.0);
    }

    #[test]
    fn aspect_scales_horizontal_axis() {
        let mut proj = Projection::new(FRAC_PI_3, 1.0, 0.1, 100.0);
        let square = proj.matrix();
        proj.set_aspect_ratio(0.5);
        let wide = proj.matrix();
        assert_relative_eq!(wide.get(0, 0), square.get(0, 0) * 0.5);
        assert_relative_eq!(wide.get(1, 1), square.get(1, 1));
    }
}
