//! Scene graph: everything the chart draws for one hover state.
//!
//! A [`Scene`] is plain data derived from the calendar, the layout and the
//! hover state. Encoders (SVG, raster) only read it, so the same scene always
//! produces the same output.

use crate::color::Rgba;
use crate::detail::{CenterOverlay, DetailPanel};
use crate::geometry::{AnnularSector, Point, Rect};
use crate::layout::ChartLayout;
use crate::output::{SvgElement, SvgEncoder, TextAnchor};
use std::fmt::Write as _;

/// One wedge of a ring.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    /// Position in its ring (season order or flattened month order).
    pub index: usize,
    /// Season or month name.
    pub label: String,
    /// Owning season's name (the season itself for outer-ring arcs).
    pub season: String,
    /// Fill color (opaque).
    pub fill: Rgba,
    /// Fill opacity in `0.0..=1.0`.
    pub opacity: f32,
    /// Whether this is the hovered month arc.
    pub active: bool,
    /// Covered region.
    pub sector: AnnularSector,
}

impl ArcSegment {
    /// Angular extent in degrees.
    #[must_use]
    pub fn sweep(&self) -> f32 {
        self.sector.sweep
    }

    /// SVG path data for the wedge.
    ///
    /// Each edge is drawn as two half arcs, so no arc command ever spans more
    /// than 180° and a single full-circle wedge still renders.
    #[must_use]
    pub fn svg_path(&self) -> String {
        let s = &self.sector;
        let at = |r: f32, a: f32| Point::from_polar(s.center, r, a);
        let (a0, a1, a2) = (s.start, s.start + s.sweep / 2.0, s.start + s.sweep);
        let (o0, o1, o2) = (at(s.outer, a0), at(s.outer, a1), at(s.outer, a2));
        let (i0, i1, i2) = (at(s.inner, a0), at(s.inner, a1), at(s.inner, a2));
        let (ro, ri) = (s.outer, s.inner);

        let mut d = String::with_capacity(160);
        let _ = write!(d, "M {:.2} {:.2}", o0.x, o0.y);
        let _ = write!(d, " A {ro:.2} {ro:.2} 0 0 0 {:.2} {:.2}", o1.x, o1.y);
        let _ = write!(d, " A {ro:.2} {ro:.2} 0 0 0 {:.2} {:.2}", o2.x, o2.y);
        let _ = write!(d, " L {:.2} {:.2}", i2.x, i2.y);
        let _ = write!(d, " A {ri:.2} {ri:.2} 0 0 1 {:.2} {:.2}", i1.x, i1.y);
        let _ = write!(d, " A {ri:.2} {ri:.2} 0 0 1 {:.2} {:.2}", i0.x, i0.y);
        d.push_str(" Z");
        d
    }
}

/// Text centered on a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Text content.
    pub text: String,
    /// Center of the text box.
    pub position: Point,
    /// Font size in pixels.
    pub font_size: f32,
    /// Bold weight.
    pub bold: bool,
}

/// A centered label word-wrapped over several lines.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLabel {
    /// Wrapped lines, top to bottom.
    pub lines: Vec<String>,
    /// Center of the first line.
    pub position: Point,
    /// Font size in pixels.
    pub font_size: f32,
    /// Bold weight.
    pub bold: bool,
}

impl WrappedLabel {
    /// Vertical advance between lines.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.font_size * 1.4
    }

    /// The original text, lines joined by single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join(" ")
    }
}

/// The detail panel with its placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelBox {
    /// Content.
    pub panel: DetailPanel,
    /// Background box.
    pub rect: Rect,
    /// Inner padding.
    pub padding: f32,
    /// Heading font size.
    pub title_font: f32,
    /// List item font size.
    pub item_font: f32,
}

impl PanelBox {
    /// Line advance for a font size.
    fn line_height(font: f32) -> f32 {
        font * 1.5
    }

    /// Place `panel` below a chart laid out as `layout`.
    #[must_use]
    pub fn below(panel: DetailPanel, layout: &ChartLayout) -> Self {
        let s = layout.scale();
        let padding = 16.0 * s;
        let title_font = 16.0 * s;
        let item_font = 14.0 * s;
        let width = (400.0 * s).min(layout.center.x * 2.0);
        let height = padding * 2.0
            + Self::line_height(title_font)
            + Self::line_height(item_font) * panel.plants().len() as f32;

        Self {
            rect: Rect::new(layout.center.x - width / 2.0, layout.size, width, height),
            panel,
            padding,
            title_font,
            item_font,
        }
    }
}

/// Render-ready description of the whole chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Canvas width.
    pub width: u32,
    /// Canvas height, including the panel when present.
    pub height: u32,
    /// Chart title.
    pub title: String,
    /// Geometry the scene was laid out with.
    pub layout: ChartLayout,
    /// Outer ring.
    pub season_arcs: Vec<ArcSegment>,
    /// Inner ring.
    pub month_arcs: Vec<ArcSegment>,
    /// Season names on the outer ring.
    pub season_labels: Vec<Label>,
    /// Month names on the inner ring.
    pub month_labels: Vec<Label>,
    /// Center of the rings.
    pub overlay: CenterOverlay,
    /// Panel below the chart, only while a month is hovered.
    pub panel: Option<PanelBox>,
}

/// Greedy word wrap on an estimated glyph width.
fn wrap_text(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let max_chars = ((max_width / (font_size * 0.55)) as usize).max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

impl Scene {
    /// The hovered month arc, if any.
    #[must_use]
    pub fn active_arc(&self) -> Option<&ArcSegment> {
        self.month_arcs.iter().find(|a| a.active)
    }

    /// Overlay text, one wrapped label per overlay line.
    ///
    /// The first line is the heading (month or prompt) at the overlay font,
    /// the rest use the detail font. The whole stack is centered on the rings.
    #[must_use]
    pub fn overlay_labels(&self) -> Vec<WrappedLabel> {
        let layout = &self.layout;
        let width = layout.overlay_size;

        let mut blocks: Vec<WrappedLabel> = self
            .overlay
            .lines()
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let (font_size, bold) = if i == 0 {
                    (layout.overlay_font, true)
                } else {
                    (layout.detail_font, false)
                };
                WrappedLabel {
                    lines: wrap_text(text, width, font_size),
                    position: layout.center,
                    font_size,
                    bold,
                }
            })
            .filter(|b| !b.lines.is_empty())
            .collect();

        let total: f32 = blocks
            .iter()
            .map(|b| b.line_height() * b.lines.len() as f32)
            .sum();
        let mut y = layout.center.y - total / 2.0;
        for block in &mut blocks {
            let advance = block.line_height();
            block.position.y = y + advance / 2.0;
            y += advance * block.lines.len() as f32;
        }
        blocks
    }

    /// Build the SVG element list.
    #[must_use]
    pub fn to_svg_encoder(&self) -> SvgEncoder {
        let mut svg = SvgEncoder::new(self.width, self.height);
        let centered = |label: &Label| SvgElement::Text {
            x: label.position.x,
            y: label.position.y,
            text: label.text.clone(),
            font_size: label.font_size,
            fill: Rgba::BLACK,
            anchor: TextAnchor::Middle,
            bold: label.bold,
        };

        svg.add_element(SvgElement::Text {
            x: self.layout.center.x,
            y: self.layout.title_y,
            text: self.title.clone(),
            font_size: self.layout.title_font,
            fill: Rgba::BLACK,
            anchor: TextAnchor::Middle,
            bold: true,
        });

        for arc in &self.season_arcs {
            let id = format!("season-{}", arc.index);
            svg = svg.path(&id, &arc.svg_path(), arc.fill, arc.opacity);
        }
        // The active arc goes last so its enlarged edge sits on top
        let (active, resting): (Vec<_>, Vec<_>) = self.month_arcs.iter().partition(|a| a.active);
        for arc in resting.into_iter().chain(active) {
            let id = format!("month-{}", arc.index);
            svg = svg.path(&id, &arc.svg_path(), arc.fill, arc.opacity);
        }

        for label in self.season_labels.iter().chain(&self.month_labels) {
            svg.add_element(centered(label));
        }
        for block in self.overlay_labels() {
            svg.add_element(SvgElement::TextBlock {
                x: block.position.x,
                y: block.position.y,
                line_height: block.line_height(),
                lines: block.lines,
                font_size: block.font_size,
                fill: Rgba::BLACK,
                bold: block.bold,
            });
        }

        if let Some(panel) = &self.panel {
            let r = panel.rect;
            let x = r.x + panel.padding;
            let mut y = r.y + panel.padding + panel.title_font;

            svg = svg.rounded_rect(r.x, r.y, r.width, r.height, 8.0 * self.layout.scale(), Rgba::PANEL_GREY);
            svg.add_element(SvgElement::Text {
                x,
                y,
                text: panel.panel.title(),
                font_size: panel.title_font,
                fill: Rgba::BLACK,
                anchor: TextAnchor::Start,
                bold: true,
            });

            y += PanelBox::line_height(panel.title_font) - panel.title_font
                + PanelBox::line_height(panel.item_font);
            for plant in panel.panel.plants() {
                let bullet = format!("\u{2022} {plant}");
                svg = svg.text(x + panel.padding, y, &bullet, panel.item_font, Rgba::BLACK);
                y += PanelBox::line_height(panel.item_font);
            }
        }

        svg
    }

    /// Render to an SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        self.to_svg_encoder().render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(start: f32, sweep: f32) -> ArcSegment {
        ArcSegment {
            index: 0,
            label: "July".to_string(),
            season: "Summer".to_string(),
            fill: Rgba::rgb(0xff, 0x4e, 0x50),
            opacity: 0.8,
            active: false,
            sector: AnnularSector::new(Point::new(250.0, 250.0), 80.0, 140.0, start, sweep),
        }
    }

    #[test]
    fn test_arc_path_shape() {
        let d = arc(0.0, 90.0).svg_path();
        assert!(d.starts_with("M 390.00 250.00"));
        assert_eq!(d.matches(" A ").count(), 4);
        assert!(d.ends_with(" Z"));
    }

    #[test]
    fn test_full_circle_arc_path() {
        let d = arc(0.0, 360.0).svg_path();
        // Halfway point of a full circle is on the opposite side
        assert!(d.contains("0 0 0 110.00 250.00"));
    }

    #[test]
    fn test_arc_path_in_svg() {
        let mut active = arc(0.0, 90.0);
        active.active = true;
        active.index = 6;
        let mut scene = overlay_scene(CenterOverlay::Prompt);
        scene.month_arcs.push(active.clone());

        let svg = scene.to_svg();
        assert!(svg.contains(&format!(r#"<path id="month-6" d="{}""#, active.svg_path())));
        assert!(svg.contains(r#"fill-opacity="0.8""#));
    }

    fn overlay_scene(overlay: CenterOverlay) -> Scene {
        Scene {
            width: 500,
            height: 500,
            title: "Garden".to_string(),
            layout: ChartLayout::reference(),
            season_arcs: Vec::new(),
            month_arcs: Vec::new(),
            season_labels: Vec::new(),
            month_labels: Vec::new(),
            overlay,
            panel: None,
        }
    }

    fn text_content(svg: &str) -> String {
        let mut out = String::new();
        let mut in_tag = false;
        for c in svg.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => out.push(c),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn test_overlay_lines_stay_whole_in_svg() {
        let scene = overlay_scene(CenterOverlay::Month {
            month: "July".to_string(),
            preview: "Lily, Sunflower, Hydrangea...".to_string(),
        });

        let blocks = scene.overlay_labels();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].bold);
        assert!(blocks[2].lines.len() > 1);
        assert_eq!(blocks[2].text(), "Lily, Sunflower, Hydrangea...");

        let svg = scene.to_svg();
        assert_eq!(svg.matches("<text").count(), 4);
        assert!(text_content(&svg).contains("Lily, Sunflower, Hydrangea..."));
    }

    #[test]
    fn test_prompt_overlay_is_centered() {
        let scene = overlay_scene(CenterOverlay::Prompt);
        let blocks = scene.overlay_labels();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines, ["Hover over a", "month to see", "plants"]);

        // Three lines of 16px at 1.4 spacing around y = 250
        let first = blocks[0].position.y;
        assert!((first - (250.0 - 33.6 + 11.2)).abs() < 0.01);
        assert!(text_content(&scene.to_svg()).contains("Hover over a month to see plants"));
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("Hover over a month to see plants", 140.0, 16.0),
            ["Hover over a", "month to see", "plants"]
        );
        assert_eq!(wrap_text("Snowdrop", 10.0, 16.0), ["Snowdrop"]);
        assert!(wrap_text("", 140.0, 16.0).is_empty());
    }
}
