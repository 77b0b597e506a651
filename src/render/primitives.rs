//! Primitive rendering functions.
//!
//! Scanline fills for the two shapes the chart is made of: axis-aligned
//! rectangles and ring wedges. Pixels are sampled at their centers.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{AnnularSector, Point, Rect};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a framebuffer.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba);
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

/// Draw a filled rectangle.
pub fn draw_rect(fb: &mut Framebuffer, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
    // Clip the part left of / above the canvas instead of shifting the rect
    let (x, width) = if x < 0 {
        (0, width.saturating_sub(x.unsigned_abs()))
    } else {
        (x as u32, width)
    };
    let (y, height) = if y < 0 {
        (0, height.saturating_sub(y.unsigned_abs()))
    } else {
        (y as u32, height)
    };
    fb.fill_rect(x, y, width, height, color);
}

impl Drawable for Rect {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_rect(
            fb,
            self.x.round() as i32,
            self.y.round() as i32,
            self.width.round() as u32,
            self.height.round() as u32,
            color,
        );
    }
}

// ============================================================================
// Ring Wedge Drawing
// ============================================================================

/// Fill a ring wedge.
///
/// Walks the wedge's bounding box row by row and sets every pixel whose
/// center falls inside the wedge.
pub fn fill_sector(fb: &mut Framebuffer, sector: &AnnularSector, color: Rgba) {
    let bounds = sector.bounds();
    let x0 = bounds.x.floor().max(0.0) as u32;
    let y0 = bounds.y.floor().max(0.0) as u32;
    let x1 = (bounds.x + bounds.width).ceil().clamp(0.0, fb.width() as f32) as u32;
    let y1 = (bounds.y + bounds.height).ceil().clamp(0.0, fb.height() as f32) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            let sample = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            if sector.contains(sample) {
                fb.set_pixel(x, y, color);
            }
        }
    }
}

impl Drawable for AnnularSector {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        fill_sector(fb, self, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
