//! Painter's algorithm ordering.

use crate::triangle::ProjectedTriangle;

/// Sorts triangles by `avg_depth` in descending order (furthest first).
///
/// Later triangles overdraw earlier ones, so the nearest geometry ends up on
/// top without a depth buffer. The sort is stable: triangles at equal depth
/// keep the order the pipeline emitted them in.
pub fn sort_by_depth(triangles: &mut [ProjectedTriangle]) {
    triangles.sort_by(|a, b| b.avg_depth.total_cmp(&a.avg_depth));
}
