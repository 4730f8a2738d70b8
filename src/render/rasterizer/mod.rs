//! Triangle rasterization and debug line primitives.
//!
//! - [`ScanlineRasterizer`]: flat-top/flat-bottom triangle decomposition
//! - Bresenham lines, triangle outlines and vertex markers for the wireframe
//!   render modes

mod line;
mod scanline;

pub use line::{draw_triangle_wireframe, draw_vertex_markers};
pub use scanline::ScanlineRasterizer;
