//! Pixel buffer ownership and frame-level drawing.
//!
//! The [`Renderer`] owns the color buffer for the lifetime of the program,
//! hands out [`FrameBuffer`] views to the rasterizer during the render phase
//! and exposes the finished frame as bytes for presentation.

use super::framebuffer::FrameBuffer;
use crate::colors;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = width as usize * height as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Draws one-pixel grid lines every `spacing` pixels.
    pub fn draw_grid(&mut self, spacing: u32, color: u32) {
        if spacing == 0 {
            return;
        }
        let width = self.width as usize;
        for (y, row) in self.color_buffer.chunks_exact_mut(width.max(1)).enumerate() {
            if y as u32 % spacing == 0 {
                row.fill(color);
            } else {
                row.iter_mut().step_by(spacing as usize).for_each(|p| *p = color);
            }
        }
    }

    /// The color buffer, one ARGB8888 value per pixel, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// The color buffer viewed as bytes, ready for a streaming ARGB8888 texture.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color_buffer)
    }

    /// Get a mutable FrameBuffer view into the color buffer.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }
}
