use crate::math::Vec2;

/// A triangle ready for rasterization in screen space.
///
/// Produced fresh every frame by the pipeline and dropped after rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedTriangle {
    /// Pixel coordinates, y growing downward.
    pub points: [Vec2; 3],
    /// Resolved ARGB color (flat-shaded or the face's base color).
    pub color: u32,
    /// Mean camera-space z of the three vertices. Larger is farther.
    pub avg_depth: f32,
}

impl ProjectedTriangle {
    pub fn new(points: [Vec2; 3], color: u32, avg_depth: f32) -> Self {
        Self {
            points,
            color,
            avg_depth,
        }
    }
}
