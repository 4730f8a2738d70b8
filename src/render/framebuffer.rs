//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into a color buffer with bounds-checked access. Every
//! write outside `[0, width) x [0, height)` is dropped here, so the drawing
//! code above never has to clip geometry itself.

/// A view into a color buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass buffer + dimensions together.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if the buffer length doesn't match width * height
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            width as usize * height as usize,
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    /// Buffer offset of an in-bounds pixel.
    #[inline]
    fn offset(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Set a pixel, silently ignoring out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if self.contains(x, y) {
            let offset = self.offset(x, y);
            self.color_buffer[offset] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.contains(x, y)
            .then(|| self.color_buffer[self.offset(x, y)])
    }

    /// Fill the horizontal run `x_start..=x_end` on row `y`.
    ///
    /// The run is clamped to the buffer; an empty or fully off-screen run
    /// writes nothing.
    #[inline]
    pub fn fill_scanline(&mut self, y: i32, x_start: i32, x_end: i32, color: u32) {
        if y < 0 || y as u32 >= self.height || self.width == 0 {
            return;
        }
        let x_start = x_start.max(0);
        let x_end = i64::from(x_end).min(i64::from(self.width) - 1) as i32;
        if x_start > x_end {
            return;
        }

        let row_start = self.offset(x_start, y);
        let row_end = self.offset(x_end, y);
        self.color_buffer[row_start..=row_end].fill(color);
    }

    /// Fill an axis-aligned rectangle with its top-left corner at (x, y).
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            self.fill_scanline(
                y.saturating_add(dy),
                x,
                x.saturating_add(width - 1),
                color,
            );
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }
}
