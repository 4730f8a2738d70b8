//! Line drawing for wireframe render modes.

use crate::math::Vec2;
use crate::render::framebuffer::FrameBuffer;
use crate::triangle::ProjectedTriangle;

/// Draws a line between two points using Bresenham's line algorithm.
///
/// Bresenham's algorithm determines which pixels to illuminate using only
/// integer arithmetic. It tracks an "error" term that represents the distance
/// between the ideal line and the current pixel; for each step along the major
/// axis it decides whether to also step along the minor axis.
///
/// The segment is clipped to the buffer first, so only visible pixels are
/// walked no matter how far off-screen the endpoints lie. Both endpoints of the
/// clipped segment are drawn. Segments with a non-finite endpoint are skipped.
pub fn draw_line(buffer: &mut FrameBuffer, p0: Vec2, p1: Vec2, color: u32) {
    let max_x = f64::from(buffer.width()) - 1.0;
    let max_y = f64::from(buffer.height()) - 1.0;
    let Some((start, end)) = clip_segment(p0, p1, max_x, max_y) else {
        return;
    };

    // Clipped points lie inside the buffer up to rounding; clamp absorbs it.
    let to_pixel = |(x, y): (f64, f64)| {
        (
            x.round().clamp(0.0, max_x) as i32,
            y.round().clamp(0.0, max_y) as i32,
        )
    };
    let (x0, y0) = to_pixel(start);
    let (x1, y1) = to_pixel(end);

    // Distances in each axis, and which way to step along them.
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let x_incr_direction = if x0 < x1 { 1 } else { -1 };
    let y_incr_direction = if y0 < y1 { 1 } else { -1 };

    // Positive error favors x movement, negative favors y.
    let mut err = dx - dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        buffer.set_pixel(x, y, color);

        if x == x1 && y == y1 {
            break;
        }

        // Doubled to stay in integers. Both branches may fire: a diagonal step.
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += x_incr_direction;
        }
        if e2 < dx {
            err += dx;
            y += y_incr_direction;
        }
    }
}

/// Liang-Barsky clipping of the segment `p0..p1` to `[0, max_x] x [0, max_y]`.
///
/// Works in `f64`: screen points far outside the viewport are too coarse in
/// `f32` to locate where they cross the buffer edge. Returns `None` when the
/// segment misses the rectangle or has a non-finite endpoint.
fn clip_segment(p0: Vec2, p1: Vec2, max_x: f64, max_y: f64) -> Option<((f64, f64), (f64, f64))> {
    if max_x < 0.0 || max_y < 0.0 || !p0.is_finite() || !p1.is_finite() {
        return None;
    }
    let (x0, y0) = (f64::from(p0.x), f64::from(p0.y));
    let (dx, dy) = (f64::from(p1.x) - x0, f64::from(p1.y) - y0);

    let mut t_enter = 0.0f64;
    let mut t_exit = 1.0f64;

    // One (p, q) pair per rectangle edge: left, right, top, bottom.
    for (p, q) in [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)] {
        if p == 0.0 {
            // Parallel to this edge: either fully outside or unconstrained.
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }
        if t_enter > t_exit {
            return None;
        }
    }

    Some((
        (x0 + dx * t_enter, y0 + dy * t_enter),
        (x0 + dx * t_exit, y0 + dy * t_exit),
    ))
}

fn to_pixel(point: Vec2) -> Option<(i32, i32)> {
    point
        .is_finite()
        .then(|| (point.x.round() as i32, point.y.round() as i32))
}

/// Draws the three edges of a triangle.
pub fn draw_triangle_wireframe(buffer: &mut FrameBuffer, triangle: &ProjectedTriangle, color: u32) {
    let [p0, p1, p2] = triangle.points;
    for (start, end) in [(p0, p1), (p1, p2), (p2, p0)] {
        draw_line(buffer, start, end, color);
    }
}

/// Draws a small square marker at each vertex of a triangle.
pub fn draw_vertex_markers(buffer: &mut FrameBuffer, triangle: &ProjectedTriangle, size: i32, color: u32) {
    for (x, y) in triangle.points.into_iter().filter_map(to_pixel) {
        buffer.draw_rect(x, y, size, size, color);
    }
}
