//! Flat-shading light model.

use crate::colors::{pack_argb, unpack_argb};
use crate::math::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Directional lights are ideal for simulating distant light sources like the sun,
/// where all rays are effectively parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// The normalized direction the light is pointing (not where it comes from).
    pub direction: Vec3,
}

impl Default for Light {
    /// Light travelling away from the viewer into the scene.
    fn default() -> Self {
        Self::new(Vec3::FORWARD)
    }
}

impl Light {
    /// Create a new directional light pointing in the given direction.
    /// The direction will be normalized automatically.
    pub fn new(direction: Vec3) -> Self {
        Light {
            direction: direction.normalize(),
        }
    }

    /// Shading factor for a face with the given unit normal.
    ///
    /// This is `-dot(normal, direction)`: 1.0 when the face looks straight into
    /// the light, negative when it faces away. The value is not clamped here;
    /// [`apply_intensity`] clamps it when the color is resolved.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        -normal.dot(self.direction)
    }
}

/// Scales the red, green and blue channels of an ARGB color by `factor`.
///
/// `factor` is clamped to `[0.0, 1.0]` so channels never wrap. Alpha is kept.
/// Channel values are truncated, matching integer color math.
pub fn apply_intensity(color: u32, factor: f32) -> u32 {
    let factor = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
    let [a, r, g, b] = unpack_argb(color);
    let scale = |channel: u8| (channel as f32 * factor) as u8;
    pack_argb([a, scale(r), scale(g), scale(b)])
}
