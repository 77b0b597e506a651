//! RGBA pixel buffer for raster output.
//!
//! Rows are padded to a 64-byte stride. Whole-layer compositing goes through
//! trueno vectors so the month ring's translucency costs one pass per layer
//! rather than one blend per arc pixel.

use crate::color::Rgba;
use crate::error::{Error, Result};
use trueno::Vector;

/// Row alignment in bytes.
const SIMD_ALIGNMENT: usize = 64;

/// SIMD-aligned framebuffer for efficient pixel operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, `stride` bytes per row.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero, or if the pixel buffer
    /// size overflows `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use bloom_sunburst::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(500, 500).unwrap();
    /// assert_eq!(fb.width(), 500);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let too_large = || Error::InvalidDimensions { width, height };
        let stride = (width as usize)
            .checked_mul(4)
            .and_then(|row_bytes| row_bytes.checked_add(SIMD_ALIGNMENT - 1))
            .ok_or_else(too_large)?
            & !(SIMD_ALIGNMENT - 1);
        let len = stride.checked_mul(height as usize).ok_or_else(too_large)?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| too_large())?;
        pixels.resize(len, 0);

        Ok(Self {
            width,
            height,
            pixels,
            stride,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        self.fill_rect(0, 0, self.width, self.height, color);
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rgba = color.to_array();
        let rect_width = (x2 - x1) as usize;

        for row_y in y1..y2 {
            let row_start = (row_y as usize) * self.stride + (x1 as usize) * 4;
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];
            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Composite `layer` over this buffer with a uniform `alpha`.
    ///
    /// `out = layer * alpha + self * (1 - alpha)`, rounded per channel.
    /// Pixels the layer shares with this buffer come out unchanged, so a
    /// layer cloned from the base only affects what was drawn on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffers have different dimensions.
    pub fn blend_over(&mut self, layer: &Framebuffer, alpha: f32) -> Result<()> {
        if self.width != layer.width || self.height != layer.height {
            return Err(Error::InvalidDimensions {
                width: layer.width,
                height: layer.height,
            });
        }

        let alpha = alpha.clamp(0.0, 1.0);
        let row_bytes = (self.width as usize) * 4;
        let alpha_vec = Vector::from_vec(vec![alpha; row_bytes]);
        let inv_alpha_vec = Vector::from_vec(vec![1.0 - alpha; row_bytes]);

        for y in 0..self.height as usize {
            let start = y * self.stride;
            let dst = &mut self.pixels[start..start + row_bytes];
            let src = &layer.pixels[start..start + row_bytes];
            if dst == src {
                continue;
            }

            let dst_vec = Vector::from_vec(dst.iter().map(|&b| f32::from(b)).collect());
            let src_vec = Vector::from_vec(src.iter().map(|&b| f32::from(b)).collect());

            let blended = src_vec
                .mul(&alpha_vec)
                .and_then(|s| dst_vec.mul(&inv_alpha_vec).and_then(|d| s.add(&d)))
                .map_err(|e| Error::Rendering(format!("layer blend failed: {e:?}")))?;

            for (out, &v) in dst.iter_mut().zip(blended.as_slice()) {
                *out = v.round().clamp(0.0, 255.0) as u8;
            }
        }

        Ok(())
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// PNG expects tightly-packed rows.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels.clone();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }
}
