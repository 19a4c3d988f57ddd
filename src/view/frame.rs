//! Frame abstraction for drawing primitives
//!
//! Provides a small, safe API for pixel buffer operations instead of direct
//! buffer indexing scattered throughout rendering code.

use super::geometry::Rect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are physical pixels. Out-of-bounds operations are clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// fit so drawing never indexes past the end.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 && buffer.len() < width * height {
            buffer.len() / width
        } else {
            height
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Pixel bounds of a rectangle after clipping to the frame
    fn clip(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = (rect.right().max(0.0) as usize).min(self.width);
        let y1 = (rect.bottom().max(0.0) as usize).min(self.height);
        (x0, y0, x1, y1)
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// Fill a rectangle with alpha blending (ARGB format)
    pub fn blend_rect(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color);
        }

        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            for px in &mut self.buffer[row_start + x0..row_start + x1] {
                *px = blend_colors(*px, color, alpha);
            }
        }
    }

    /// Draw a vertical line of the given thickness starting at `x`
    pub fn vline(&mut self, x: f32, y: f32, height: f32, thickness: f32, color: u32) {
        self.fill_rect(Rect::new(x, y, thickness, height), color);
    }

    /// Draw a 1px outline just inside a rectangle
    pub fn stroke_rect(&mut self, rect: Rect, color: u32) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1.0), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - 1.0, rect.width, 1.0), color);
        self.fill_rect(Rect::new(rect.x, rect.y, 1.0, rect.height), color);
        self.fill_rect(Rect::new(rect.right() - 1.0, rect.y, 1.0, rect.height), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_colors_extremes() {
        assert_eq!(blend_colors(0xFF000000, 0xFFFFFFFF, 0.0), 0xFF000000);
        assert_eq!(blend_colors(0xFF000000, 0xFFFFFFFF, 1.0), 0xFFFFFFFF);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buffer = vec![0u32; 4 * 4];
        let mut frame = Frame::new(&mut buffer, 4, 4);
        frame.fill_rect(Rect::new(2.0, 2.0, 10.0, 10.0), 7);

        assert_eq!(buffer[2 * 4 + 2], 7);
        assert_eq!(buffer[3 * 4 + 3], 7);
        assert_eq!(buffer[1 * 4 + 2], 0);
        assert_eq!(buffer[2 * 4 + 1], 0);
    }

    #[test]
    fn test_short_buffer_reduces_height() {
        let mut buffer = vec![0u32; 4 * 2];
        let mut frame = Frame::new(&mut buffer, 4, 4);
        assert_eq!(frame.height(), 2);
        frame.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), 1);
        assert!(buffer.iter().all(|&p| p == 1));
    }

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut buffer = vec![0u32; 5 * 5];
        let mut frame = Frame::new(&mut buffer, 5, 5);
        frame.stroke_rect(Rect::new(0.0, 0.0, 5.0, 5.0), 9);

        assert_eq!(buffer[0], 9);
        assert_eq!(buffer[4 * 5 + 4], 9);
        assert_eq!(buffer[2 * 5 + 2], 0);
    }
}
