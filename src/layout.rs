//! Chart geometry.
//!
//! Every radius, offset and font size is derived from the chart size using
//! the proportions of the 500×500 reference chart, so resizing keeps arcs,
//! labels and the hover highlight in step.

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Side length of the reference chart in pixels.
pub const REFERENCE_SIZE: f32 = 500.0;

/// A ring band between two radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingBand {
    /// Inner radius.
    pub inner: f32,
    /// Outer radius.
    pub outer: f32,
}

impl RingBand {
    /// Create a band.
    #[must_use]
    pub const fn new(inner: f32, outer: f32) -> Self {
        Self { inner, outer }
    }

    /// Radius halfway through the band.
    #[must_use]
    pub fn mid(&self) -> f32 {
        (self.inner + self.outer) / 2.0
    }

    /// Whether `radius` falls within the band.
    #[must_use]
    pub fn contains(&self, radius: f32) -> bool {
        radius >= self.inner && radius <= self.outer
    }
}

/// Resolved chart geometry for one chart size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    /// Side of the square chart area.
    pub size: f32,
    /// Ring center.
    pub center: Point,
    /// Outer (season) ring.
    pub season_ring: RingBand,
    /// Inner (month) ring.
    pub month_ring: RingBand,
    /// Extra outer radius of the hovered month arc.
    pub hover_delta: f32,
    /// Radius season labels are centered on.
    pub season_label_radius: f32,
    /// Radius month labels are centered on.
    pub month_label_radius: f32,
    /// Side of the square center overlay.
    pub overlay_size: f32,
    /// Vertical center of the chart title.
    pub title_y: f32,
    /// Title font size.
    pub title_font: f32,
    /// Season label font size.
    pub season_font: f32,
    /// Month label font size.
    pub month_font: f32,
    /// Font size of the month name in the center overlay.
    pub overlay_font: f32,
    /// Font size of the smaller overlay lines and the panel list.
    pub detail_font: f32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::reference()
    }
}

impl ChartLayout {
    /// The 500×500 reference layout.
    #[must_use]
    pub fn reference() -> Self {
        let season_ring = RingBand::new(150.0, 200.0);
        let month_ring = RingBand::new(80.0, 140.0);
        Self {
            size: REFERENCE_SIZE,
            center: Point::new(250.0, 250.0),
            season_ring,
            month_ring,
            hover_delta: 6.0,
            season_label_radius: season_ring.mid(),
            month_label_radius: month_ring.mid(),
            overlay_size: 140.0,
            title_y: 32.0,
            title_font: 24.0,
            season_font: 18.0,
            month_font: 10.0,
            overlay_font: 16.0,
            detail_font: 12.0,
        }
    }

    /// Layout for a chart area of `width`×`height`; the chart is a square of
    /// the smaller side, centered horizontally.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either side is zero.
    pub fn for_size(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = width.min(height) as f32;
        let mut layout = Self::reference().scaled(size / REFERENCE_SIZE);
        layout.center = Point::new(width as f32 / 2.0, size / 2.0);
        Ok(layout)
    }

    /// Every length multiplied by `factor`, center included.
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        let band = |b: RingBand| RingBand::new(b.inner * factor, b.outer * factor);
        Self {
            size: self.size * factor,
            center: Point::new(self.center.x * factor, self.center.y * factor),
            season_ring: band(self.season_ring),
            month_ring: band(self.month_ring),
            hover_delta: self.hover_delta * factor,
            season_label_radius: self.season_label_radius * factor,
            month_label_radius: self.month_label_radius * factor,
            overlay_size: self.overlay_size * factor,
            title_y: self.title_y * factor,
            title_font: self.title_font * factor,
            season_font: self.season_font * factor,
            month_font: self.month_font * factor,
            overlay_font: self.overlay_font * factor,
            detail_font: self.detail_font * factor,
        }
    }

    /// Ratio of this layout to the reference size.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.size / REFERENCE_SIZE
    }

    /// Outer radius of a month arc, enlarged when it is the hovered one.
    #[must_use]
    pub fn month_outer(&self, active: bool) -> f32 {
        if active {
            self.month_ring.outer + self.hover_delta
        } else {
            self.month_ring.outer
        }
    }
}
