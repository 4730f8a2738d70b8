mod framebuffer;
mod rasterizer;
mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{draw_triangle_wireframe, draw_vertex_markers, ScanlineRasterizer};
pub use renderer::Renderer;
