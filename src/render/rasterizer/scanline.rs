//! Scanline-based triangle rasterization.
//!
//! This module implements triangle filling using the classic scanline algorithm
//! with flat-top/flat-bottom triangle decomposition.
//!
//! # Triangle Decomposition
//!
//! Any triangle can be decomposed into at most two simpler triangles:
//!
//! ```text
//!        v0                   v0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\<- split at v1.y
//!     /      \             v1    M
//!    /________\             \    /
//!   v1        v2             \  /
//!                             \/
//!                             v2
//!
//!   General triangle      Flat-bottom (top) + Flat-top (bottom)
//! ```
//!
//! Special cases (already flat-top or flat-bottom) require no splitting.
//!
//! # Inverse Slope Method
//!
//! For each scanline we need the X position on the two legs of the triangle.
//! Rather than intersecting lines, we use "inverse slopes":
//!
//! ```text
//! inv_slope = dx / dy = (x_end - x_start) / (y_end - y_start)
//! ```
//!
//! For each scanline: `x = x_apex + inv_slope * (y - y_apex)`
//!
//! # Coverage
//!
//! Vertices are snapped to whole pixels before decomposition. Each scanline
//! covers `ceil(x_left)..=floor(x_right)`, so two triangles sharing an edge
//! neither leave a gap nor paint the same pixel twice. When a triangle is
//! split, the row through v1 belongs to the flat-bottom half only.

use crate::math::Vec2;
use crate::render::framebuffer::FrameBuffer;
use crate::triangle::ProjectedTriangle;

/// Scanline-based triangle rasterizer.
///
/// Fills a triangle with a single solid color. The rasterizer handles vertex
/// sorting internally, so input triangles can have vertices in any order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices by Y coordinate (ascending: top to bottom in screen space).
    ///
    /// Swaps only on strict inequality, so vertices on the same row keep
    /// their relative order. After sorting: `v0.y <= v1.y <= v2.y`
    fn sort_vertices(v0: &mut Vec2, v1: &mut Vec2, v2: &mut Vec2) {
        if v0.y > v1.y {
            std::mem::swap(v0, v1);
        }
        if v1.y > v2.y {
            std::mem::swap(v1, v2);
        }
        if v0.y > v1.y {
            std::mem::swap(v0, v1);
        }
    }

    /// Snaps a point to the pixel grid, rejecting NaN and infinity.
    fn snap(point: Vec2) -> Option<Vec2> {
        point
            .is_finite()
            .then(|| Vec2::new(point.x.round(), point.y.round()))
    }

    /// Visible row range `first..=last`, clamped to the buffer.
    fn row_range(first: f32, last: f32, buffer: &FrameBuffer) -> std::ops::RangeInclusive<i32> {
        let first = (first as i32).max(0);
        let last = (last as i32).min(buffer.height() as i32 - 1);
        first..=last
    }

    /// Draws one span between two edge intersections, in either order.
    #[inline]
    fn fill_span(buffer: &mut FrameBuffer, y: i32, xa: f32, xb: f32, color: u32) {
        let x_left = xa.min(xb).ceil() as i32;
        let x_right = xa.max(xb).floor() as i32;
        buffer.fill_scanline(y, x_left, x_right, color);
    }

    /// Fills a flat-bottom triangle.
    ///
    /// ```text
    ///        apex
    ///        /\
    ///       /  \
    ///      /    \
    ///     /______\
    ///   b1        b2  (same Y)
    /// ```
    ///
    /// Rows run from `apex.y` down to the base row, inclusive.
    fn fill_flat_bottom(apex: Vec2, b1: Vec2, b2: Vec2, buffer: &mut FrameBuffer, color: u32) {
        let height = b1.y - apex.y;
        if height <= 0.0 {
            return;
        }

        // Change in X per scanline along each leg
        let inv_slope_1 = (b1.x - apex.x) / height;
        let inv_slope_2 = (b2.x - apex.x) / height;

        for y in Self::row_range(apex.y, b1.y, buffer) {
            let dy = y as f32 - apex.y;
            let x1 = apex.x + inv_slope_1 * dy;
            let x2 = apex.x + inv_slope_2 * dy;
            Self::fill_span(buffer, y, x1, x2, color);
        }
    }

    /// Fills a flat-top triangle.
    ///
    /// ```text
    ///   t1________t2  (same Y)
    ///     \      /
    ///      \    /
    ///       \  /
    ///        \/
    ///        apex
    /// ```
    ///
    /// Rows run from `first_row` down to `apex.y`, inclusive. `first_row` is
    /// the base row for a stand-alone flat-top triangle, or the row below it
    /// when the base row was already drawn by the flat-bottom half of a split.
    fn fill_flat_top(
        t1: Vec2,
        t2: Vec2,
        apex: Vec2,
        first_row: f32,
        buffer: &mut FrameBuffer,
        color: u32,
    ) {
        let height = apex.y - t1.y;
        if height <= 0.0 {
            return;
        }

        // Walking up from the apex, each leg moves back toward its base vertex.
        let inv_slope_1 = (apex.x - t1.x) / height;
        let inv_slope_2 = (apex.x - t2.x) / height;

        for y in Self::row_range(first_row, apex.y, buffer) {
            let dy = apex.y - y as f32;
            let x1 = apex.x - inv_slope_1 * dy;
            let x2 = apex.x - inv_slope_2 * dy;
            Self::fill_span(buffer, y, x1, x2, color);
        }
    }

    /// Fills a triangle using the scanline algorithm.
    ///
    /// # Algorithm Steps
    ///
    /// 1. **Sort vertices** by Y coordinate (top to bottom)
    /// 2. **Classify triangle shape**:
    ///    - If `v0.y == v2.y`: zero height, nothing to draw
    ///    - If `v1.y == v2.y`: already flat-bottom, no split needed
    ///    - If `v0.y == v1.y`: already flat-top, no split needed
    ///    - Otherwise: general triangle, needs splitting
    /// 3. **Split general triangles** at the middle vertex's Y level:
    ///    ```text
    ///    M.x = v0.x + (v2.x - v0.x) * (v1.y - v0.y) / (v2.y - v0.y)
    ///    M.y = v1.y
    ///    ```
    /// 4. **Rasterize sub-triangles**: flat-bottom (v0, v1, M), then
    ///    flat-top (v1, M, v2)
    ///
    /// Triangles with a non-finite vertex are skipped.
    pub fn fill_triangle(&self, triangle: &ProjectedTriangle, buffer: &mut FrameBuffer) {
        let color = triangle.color;
        let [Some(mut v0), Some(mut v1), Some(mut v2)] = triangle.points.map(Self::snap) else {
            return;
        };

        Self::sort_vertices(&mut v0, &mut v1, &mut v2);

        if v0.y == v2.y {
            return;
        }

        if v1.y == v2.y {
            Self::fill_flat_bottom(v0, v1, v2, buffer, color);
            return;
        }

        if v0.y == v1.y {
            Self::fill_flat_top(v0, v1, v2, v0.y, buffer, color);
            return;
        }

        let t = (v1.y - v0.y) / (v2.y - v0.y);
        let split_point = Vec2::new(v0.x + (v2.x - v0.x) * t, v1.y);

        Self::fill_flat_bottom(v0, v1, split_point, buffer, color);
        Self::fill_flat_top(v1, split_point, v2, v1.y + 1.0, buffer, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 16;
    const H: u32 = 16;
    const FILL: u32 = 0xFFFF0000;

    fn rasterize(points: [(f32, f32); 3]) -> Vec<u32> {
        let mut pixels = vec![0u32; (W * H) as usize];
        let triangle =
            ProjectedTriangle::new(points.map(|(x, y)| Vec2::new(x, y)), FILL, 0.0);
        let mut fb = FrameBuffer::new(&mut pixels, W, H);
        ScanlineRasterizer::new().fill_triangle(&triangle, &mut fb);
        pixels
    }

    /// Filled x range of each row, `None` for empty rows.
    fn spans(pixels: &[u32]) -> Vec<Option<(usize, usize)>> {
        pixels
            .chunks(W as usize)
            .map(|row| {
                let first = row.iter().position(|&p| p == FILL)?;
                let last = row.iter().rposition(|&p| p == FILL)?;
                Some((first, last))
            })
            .collect()
    }

    #[test]
    fn flat_top_triangle_narrows_to_a_point() {
        let pixels = rasterize([(0.0, 0.0), (4.0, 0.0), (2.0, 4.0)]);
        let spans = spans(&pixels);

        assert_eq!(spans[0], Some((0, 4)));
        assert_eq!(spans[1], Some((1, 3)));
        assert_eq!(spans[2], Some((1, 3)));
        assert_eq!(spans[3], Some((2, 2)));
        assert_eq!(spans[4], Some((2, 2)));
        assert!(spans[5..].iter().all(Option::is_none));

        // Spans are solid and symmetric around x = 2.
        for (first, last) in spans.iter().flatten() {
            assert_eq!(2 - first, last - 2);
        }
        assert_eq!(pixels.iter().filter(|&&p| p == FILL).count(), 5 + 3 + 3 + 1 + 1);
    }

    #[test]
    fn flat_bottom_triangle_widens_from_apex() {
        let spans = spans(&rasterize([(2.0, 0.0), (4.0, 4.0), (0.0, 4.0)]));
        assert_eq!(spans[0], Some((2, 2)));
        assert_eq!(spans[2], Some((1, 3)));
        assert_eq!(spans[4], Some((0, 4)));
        assert_eq!(spans[5], None);
    }

    #[test]
    fn vertex_order_does_not_matter() {
        let a = rasterize([(1.0, 1.0), (9.0, 4.0), (3.0, 12.0)]);
        let b = rasterize([(3.0, 12.0), (1.0, 1.0), (9.0, 4.0)]);
        let c = rasterize([(9.0, 4.0), (3.0, 12.0), (1.0, 1.0)]);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn general_triangle_covers_every_row_once() {
        let pixels = rasterize([(1.0, 1.0), (9.0, 4.0), (3.0, 12.0)]);
        let spans = spans(&pixels);

        assert!(spans[0].is_none());
        for row in 1..=12 {
            assert!(spans[row].is_some(), "row {row} should be filled");
        }
        assert!(spans[13].is_none());
        // The split row holds v1 at its right end.
        assert_eq!(spans[4].map(|(_, last)| last), Some(9));
    }

    #[test]
    fn split_triangle_matches_its_halves() {
        // The split at y = 4 lands on x = 2 on the long edge.
        let whole = rasterize([(0.0, 0.0), (8.0, 4.0), (4.0, 8.0)]);
        let top = rasterize([(0.0, 0.0), (8.0, 4.0), (2.0, 4.0)]);
        let bottom = rasterize([(2.0, 4.0), (8.0, 4.0), (4.0, 8.0)]);

        let union: Vec<u32> = top.iter().zip(&bottom).map(|(&a, &b)| a | b).collect();
        assert_eq!(whole, union);
    }

    #[test]
    fn zero_height_triangle_draws_nothing() {
        let pixels = rasterize([(0.0, 3.0), (5.0, 3.0), (9.0, 3.0)]);
        assert!(pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn zero_width_triangle_draws_a_column() {
        let spans = spans(&rasterize([(2.0, 0.0), (2.0, 2.0), (2.0, 4.0)]));
        for row in 0..=4 {
            assert_eq!(spans[row], Some((2, 2)));
        }
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let pixels = rasterize([(0.0, 0.0), (f32::NAN, 4.0), (4.0, 4.0)]);
        assert!(pixels.iter().all(|&p| p == 0));
        let pixels = rasterize([(0.0, 0.0), (f32::INFINITY, 4.0), (4.0, 4.0)]);
        assert!(pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn off_screen_parts_are_clipped() {
        let pixels = rasterize([(-100.0, -100.0), (100.0, -100.0), (8.0, 100.0)]);
        assert_eq!(pixels.len(), (W * H) as usize);
        // The middle column is inside the triangle all the way down.
        for y in 0..H as usize {
            assert_eq!(pixels[y * W as usize + 8], FILL);
        }
    }
}
