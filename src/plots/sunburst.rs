//! Two-ring sunburst of a blooming calendar.
//!
//! The outer ring has one arc per season, sized by its month count. The inner
//! ring has one equal arc per month in the season's color. Hovering a month
//! arc lifts it to full opacity, pushes its outer edge out, and shows the
//! month's plants in the center and in a panel below the chart.

use crate::calendar::{BloomCalendar, Month};
use crate::color::Rgba;
use crate::detail::{CenterOverlay, DetailPanel};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{AnnularSector, Point};
use crate::interaction::{event_for_move, HoverState, PointerEvent};
use crate::layout::ChartLayout;
use crate::output::PngEncoder;
use crate::render::draw_scene;
use crate::scene::{ArcSegment, Label, PanelBox, Scene};
use std::collections::BTreeMap;
use std::path::Path;

/// Default chart title.
pub const DEFAULT_TITLE: &str = "Plant Blooming Calendar";

/// Opacity of month arcs that are not hovered.
pub const MONTH_OPACITY: f32 = 0.8;

/// Builder and live state for the blooming calendar chart.
#[derive(Debug, Clone)]
pub struct SunburstChart {
    calendar: BloomCalendar,
    layout: ChartLayout,
    custom_layout: bool,
    title: String,
    width: u32,
    height: u32,
    season_label_offsets: BTreeMap<String, Point>,
    state: HoverState,
}

impl Default for SunburstChart {
    fn default() -> Self {
        Self::new()
    }
}

impl SunburstChart {
    /// Create a chart of the reference garden at 500×500.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calendar: BloomCalendar::garden(),
            layout: ChartLayout::reference(),
            custom_layout: false,
            title: DEFAULT_TITLE.to_string(),
            width: 500,
            height: 500,
            season_label_offsets: BTreeMap::new(),
            state: HoverState::Idle,
        }
    }

    /// Set the season and plant tables.
    #[must_use]
    pub fn calendar(mut self, calendar: BloomCalendar) -> Self {
        self.calendar = calendar;
        self.state = HoverState::Idle;
        self
    }

    /// Use an explicit layout instead of deriving one from the dimensions.
    #[must_use]
    pub fn layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self.custom_layout = true;
        self
    }

    /// Set the chart area dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the title drawn above the rings.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Nudge a season's label by `(dx, dy)` reference pixels.
    #[must_use]
    pub fn season_label_offset(mut self, season: impl Into<String>, dx: f32, dy: f32) -> Self {
        self.season_label_offsets
            .insert(season.into(), Point::new(dx, dy));
        self
    }

    /// Build and validate the chart.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if either dimension is zero.
    /// - [`Error::UnknownSeason`] if a label offset names a season the
    ///   calendar does not have.
    pub fn build(mut self) -> Result<Self> {
        if self.custom_layout {
            if self.width == 0 || self.height == 0 {
                return Err(Error::InvalidDimensions {
                    width: self.width,
                    height: self.height,
                });
            }
        } else {
            self.layout = ChartLayout::for_size(self.width, self.height)?;
        }
        for season in self.season_label_offsets.keys() {
            self.calendar.season(season)?;
        }
        Ok(self)
    }

    // ========================================================================
    // State
    // ========================================================================

    /// Season and plant tables.
    #[must_use]
    pub fn bloom_calendar(&self) -> &BloomCalendar {
        &self.calendar
    }

    /// Resolved geometry.
    #[must_use]
    pub fn chart_layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Current hover state.
    #[must_use]
    pub const fn state(&self) -> HoverState {
        self.state
    }

    /// Index of the hovered month arc.
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.state.active()
    }

    /// Name of the hovered month, derived from the hover index.
    #[must_use]
    pub fn selected_month(&self) -> Option<&str> {
        self.state
            .active()
            .and_then(|i| self.calendar.month(i))
            .map(Month::name)
    }

    /// Apply a pointer event. Returns `true` if the hover state changed.
    pub fn apply(&mut self, event: PointerEvent) -> bool {
        let changed = self.state.apply(event, self.calendar.month_count());
        if changed {
            tracing::debug!(month = ?self.selected_month(), "selected month");
        }
        changed
    }

    /// The pointer entered month arc `index`.
    pub fn pointer_enter(&mut self, index: usize) -> bool {
        self.apply(PointerEvent::Enter(index))
    }

    /// The pointer left the month ring.
    pub fn pointer_leave(&mut self) -> bool {
        self.apply(PointerEvent::Leave)
    }

    /// The pointer moved to `point` in canvas coordinates.
    ///
    /// Hit tests the month ring and enters or leaves arcs accordingly.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        match event_for_move(&self.layout, self.calendar.month_count(), self.state, point) {
            Some(event) => self.apply(event),
            None => false,
        }
    }

    // ========================================================================
    // Scene derivation
    // ========================================================================

    /// Outer ring, one arc per season.
    #[must_use]
    pub fn season_arcs(&self) -> Vec<ArcSegment> {
        let layout = &self.layout;
        let total = self.calendar.total_weight() as f32;
        let mut start = 0.0;

        self.calendar
            .seasons()
            .iter()
            .enumerate()
            .map(|(index, season)| {
                let sweep = 360.0 * season.weight() as f32 / total;
                let arc = ArcSegment {
                    index,
                    label: season.name().to_string(),
                    season: season.name().to_string(),
                    fill: season.color(),
                    opacity: 1.0,
                    active: false,
                    sector: AnnularSector::new(
                        layout.center,
                        layout.season_ring.inner,
                        layout.season_ring.outer,
                        start,
                        sweep,
                    ),
                };
                start += sweep;
                arc
            })
            .collect()
    }

    /// Inner ring, one arc per month.
    #[must_use]
    pub fn month_arcs(&self) -> Vec<ArcSegment> {
        let layout = &self.layout;
        let seasons = self.calendar.seasons();
        let sweep = 360.0 / self.calendar.month_count() as f32;

        self.calendar
            .months()
            .iter()
            .enumerate()
            .map(|(index, month)| {
                let season = &seasons[month.season_index()];
                let active = self.state.active() == Some(index);
                ArcSegment {
                    index,
                    label: month.name().to_string(),
                    season: season.name().to_string(),
                    fill: season.color(),
                    opacity: if active { 1.0 } else { MONTH_OPACITY },
                    active,
                    sector: AnnularSector::new(
                        layout.center,
                        layout.month_ring.inner,
                        layout.month_outer(active),
                        index as f32 * sweep,
                        sweep,
                    ),
                }
            })
            .collect()
    }

    /// Season names at the middle of their arcs.
    #[must_use]
    pub fn season_labels(&self) -> Vec<Label> {
        let layout = &self.layout;
        let scale = layout.scale();

        self.season_arcs()
            .into_iter()
            .map(|arc| {
                let mut position = arc.sector.mid_point(layout.season_label_radius);
                if let Some(offset) = self.season_label_offsets.get(&arc.label) {
                    position.x += offset.x * scale;
                    position.y += offset.y * scale;
                }
                Label {
                    text: arc.label,
                    position,
                    font_size: layout.season_font,
                    bold: true,
                }
            })
            .collect()
    }

    /// Month names at the middle of their arcs.
    #[must_use]
    pub fn month_labels(&self) -> Vec<Label> {
        let layout = &self.layout;
        let n = self.calendar.month_count() as f32;

        self.calendar
            .months()
            .iter()
            .enumerate()
            .map(|(i, month)| {
                let angle = (i as f32 + 0.5) * 360.0 / n;
                Label {
                    text: month.name().to_string(),
                    position: Point::from_polar(layout.center, layout.month_label_radius, angle),
                    font_size: layout.month_font,
                    bold: false,
                }
            })
            .collect()
    }

    /// Everything drawn for the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let panel = DetailPanel::for_state(&self.calendar, self.state)
            .map(|panel| PanelBox::below(panel, &self.layout));
        let height = panel
            .as_ref()
            .map_or(self.height, |p| self.height.max(p.rect.bottom().ceil() as u32));

        Scene {
            width: self.width,
            height,
            title: self.title.clone(),
            layout: self.layout,
            season_arcs: self.season_arcs(),
            month_arcs: self.month_arcs(),
            season_labels: self.season_labels(),
            month_labels: self.month_labels(),
            overlay: CenterOverlay::for_state(&self.calendar, self.state),
            panel,
        }
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Render to an SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        self.scene().to_svg()
    }

    /// Render to a new framebuffer sized to the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        let scene = self.scene();
        let mut fb = Framebuffer::new(scene.width, scene.height)?;
        draw_scene(&mut fb, &scene)?;
        Ok(fb)
    }

    /// Render into an existing framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self, fb: &mut Framebuffer) -> Result<()> {
        draw_scene(fb, &self.scene())
    }

    /// Write the SVG document to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_svg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.scene().to_svg_encoder().write_to_file(path)?;
        tracing::info!(path = %path.display(), month = ?self.selected_month(), "wrote SVG chart");
        Ok(())
    }

    /// Write a PNG image to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or encoding fails.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let fb = self.to_framebuffer()?;
        PngEncoder::write_to_file(&fb, path)?;
        tracing::info!(path = %path.display(), month = ?self.selected_month(), "wrote PNG chart");
        Ok(())
    }

    /// Encode a PNG image in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        PngEncoder::to_bytes(&self.to_framebuffer()?)
    }
}

impl batuta_common::display::WithDimensions for SunburstChart {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        match ChartLayout::for_size(width, height) {
            Ok(layout) => {
                self.width = width;
                self.height = height;
                self.layout = layout;
                self.custom_layout = false;
            }
            Err(e) => tracing::error!(error = %e, "ignoring resize"),
        }
    }
}

/// Fill of a month arc as it lands on a white background.
#[must_use]
pub fn resting_fill(season_color: Rgba) -> Rgba {
    Rgba::WHITE.lerp(season_color, MONTH_OPACITY)
}
