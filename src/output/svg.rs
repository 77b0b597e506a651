//! SVG output encoder.
//!
//! Vector output keeps the chart crisp at any zoom and carries the text
//! (labels, overlay, panel) that the raster path does not draw.

use crate::color::Rgba;
use crate::error::Result;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// SVG encoder for vector output.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// SVG width
    width: u32,
    /// SVG height
    height: u32,
    /// Background fill
    background: Rgba,
    /// SVG elements
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names are self-documenting and match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle, optionally with rounded corners
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: f32,
        fill: Rgba,
    },
    /// Path (SVG path data)
    Path {
        d: String,
        fill: Rgba,
        opacity: f32,
        id: Option<String>,
    },
    /// Text
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
        bold: bool,
    },
    /// Centered text wrapped over several lines, one `<tspan>` per line.
    /// Lines are separated by a space so the text content reads as one string.
    TextBlock {
        x: f32,
        y: f32,
        lines: Vec<String>,
        line_height: f32,
        font_size: f32,
        fill: Rgba,
        bold: bool,
    },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR)
    #[default]
    Start,
    /// Center text on the position, both horizontally and vertically
    Middle,
    /// Align text end at position (right-aligned for LTR)
    End,
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Rgba::WHITE,
            elements: Vec::new(),
        }
    }

    /// Add a rectangle with rounded corners.
    #[must_use]
    pub fn rounded_rect(
        mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: f32,
        fill: Rgba,
    ) -> Self {
        self.elements.push(SvgElement::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
        });
        self
    }

    /// Add a filled path with an element id.
    #[must_use]
    pub fn path(mut self, id: &str, d: &str, fill: Rgba, opacity: f32) -> Self {
        self.elements.push(SvgElement::Path {
            d: d.to_string(),
            fill,
            opacity,
            id: Some(id.to_string()),
        });
        self
    }

    /// Add text.
    #[must_use]
    pub fn text(mut self, x: f32, y: f32, text: &str, font_size: f32, fill: Rgba) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor: TextAnchor::Start,
            bold: false,
        });
        self
    }

    /// Add a raw element.
    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="Arial, sans-serif">"#,
            self.width, self.height, self.width, self.height
        );

        let _ = writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            rgba_to_css(&self.background)
        );

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

/// Convert RGBA to CSS color string.
fn rgba_to_css(color: &Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            color.r,
            color.g,
            color.b,
            f32::from(color.a) / 255.0
        )
    }
}

/// Escape XML special characters.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Convert an SVG element to its string representation.
fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
        } => {
            let rx_attr = if *rx > 0.0 {
                format!(r#" rx="{rx}""#)
            } else {
                String::new()
            };
            format!(
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}"{rx_attr} fill="{}"/>"#,
                rgba_to_css(fill)
            )
        }
        SvgElement::Path {
            d,
            fill,
            opacity,
            id,
        } => {
            let id_attr = id
                .as_deref()
                .map(|id| format!(r#" id="{}""#, escape_xml(id)))
                .unwrap_or_default();
            let opacity_attr = if *opacity < 1.0 {
                format!(r#" fill-opacity="{opacity}""#)
            } else {
                String::new()
            };
            format!(
                r#"<path{id_attr} d="{d}" fill="{}"{opacity_attr}/>"#,
                rgba_to_css(fill)
            )
        }
        SvgElement::Text {
            x,
            y,
            text,
            font_size,
            fill,
            anchor,
            bold,
        } => {
            let anchor_str = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let baseline = if *anchor == TextAnchor::Middle {
                r#" dominant-baseline="central""#
            } else {
                ""
            };
            let weight = if *bold { r#" font-weight="bold""# } else { "" };
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" text-anchor="{anchor_str}"{baseline}{weight}>{}</text>"#,
                rgba_to_css(fill),
                escape_xml(text)
            )
        }
        SvgElement::TextBlock {
            x,
            y,
            lines,
            line_height,
            font_size,
            fill,
            bold,
        } => {
            let weight = if *bold { r#" font-weight="bold""# } else { "" };
            let mut out = format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" text-anchor="middle" dominant-baseline="central"{weight}>"#,
                rgba_to_css(fill)
            );
            for (i, line) in lines.iter().enumerate() {
                let dy = if i == 0 { 0.0 } else { *line_height };
                let sep = if i + 1 < lines.len() { " " } else { "" };
                let _ = write!(
                    out,
                    r#"<tspan x="{x}" dy="{dy}">{}{sep}</tspan>"#,
                    escape_xml(line)
                );
            }
            out.push_str("</text>");
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_encoder_new() {
        let svg = SvgEncoder::new(800, 600).render();

        assert!(svg.contains("width=\"800\""));
        assert!(svg.contains("height=\"600\""));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_svg_rounded_rect() {
        let svg = SvgEncoder::new(100, 100)
            .rounded_rect(10.0, 20.0, 30.0, 40.0, 0.0, Rgba::BLACK)
            .rounded_rect(0.0, 0.0, 50.0, 50.0, 8.0, Rgba::PANEL_GREY)
            .render();

        assert!(svg.contains(r#"<rect x="10" y="20" width="30" height="40" fill="rgb(0,0,0)"/>"#));
        assert!(svg.contains(r#"rx="8""#));
        assert!(svg.contains("rgb(241,241,241)"));
    }

    #[test]
    fn test_svg_path_opacity_and_id() {
        let svg = SvgEncoder::new(100, 100)
            .path("month-7", "M 0 0 L 10 10 Z", Rgba::BLACK, 0.8)
            .path("season-1", "M 0 0 L 20 20 Z", Rgba::BLACK, 1.0)
            .render();

        assert!(svg.contains(
            r#"<path id="month-7" d="M 0 0 L 10 10 Z" fill="rgb(0,0,0)" fill-opacity="0.8"/>"#
        ));
        assert!(svg.contains(r#"<path id="season-1""#));
        assert_eq!(svg.matches("fill-opacity").count(), 1);
    }

    #[test]
    fn test_svg_text_block_keeps_text_content() {
        let mut encoder = SvgEncoder::new(100, 100);
        encoder.add_element(SvgElement::TextBlock {
            x: 50.0,
            y: 40.0,
            lines: vec!["Lily, Sunflower,".to_string(), "Hydrangea...".to_string()],
            line_height: 16.8,
            font_size: 12.0,
            fill: Rgba::BLACK,
            bold: false,
        });
        let svg = encoder.render();

        assert_eq!(svg.matches("<text").count(), 1);
        assert!(svg.contains(r#"<tspan x="50" dy="0">Lily, Sunflower, </tspan>"#));
        assert!(svg.contains(r#"<tspan x="50" dy="16.8">Hydrangea...</tspan>"#));
    }

    #[test]
    fn test_svg_text_centered_bold() {
        let mut encoder = SvgEncoder::new(100, 100);
        encoder.add_element(SvgElement::Text {
            x: 50.0,
            y: 50.0,
            text: "Spring".to_string(),
            font_size: 18.0,
            fill: Rgba::BLACK,
            anchor: TextAnchor::Middle,
            bold: true,
        });
        let svg = encoder.render();

        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("dominant-baseline=\"central\""));
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.contains(">Spring</text>"));
    }

    #[test]
    fn test_svg_text_escaping() {
        let svg = SvgEncoder::new(100, 100)
            .text(10.0, 50.0, "<script>alert('xss')</script>", 12.0, Rgba::BLACK)
            .render();

        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_svg_text_xml_entities() {
        let svg = SvgEncoder::new(100, 100)
            .text(10.0, 50.0, "A & B \"quoted\"", 12.0, Rgba::BLACK)
            .render();

        assert!(svg.contains("&amp;"));
        assert!(svg.contains("&quot;"));
    }

    #[test]
    fn test_svg_white_background() {
        let svg = SvgEncoder::new(100, 100).render();
        assert!(svg.contains(r#"<rect width="100%" height="100%" fill="rgb(255,255,255)"/>"#));
    }

    #[test]
    fn test_svg_rgba_alpha() {
        let css = rgba_to_css(&Rgba::new(255, 0, 0, 128));
        assert!(css.contains("rgba"));
        assert!(css.contains("0.502"));
    }

    #[test]
    fn test_svg_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        SvgEncoder::new(100, 100)
            .rounded_rect(10.0, 10.0, 80.0, 80.0, 4.0, Rgba::BLACK)
            .write_to_file(&path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("</svg>"));
    }

    #[test]
    fn test_text_anchor_default() {
        assert_eq!(TextAnchor::default(), TextAnchor::Start);
    }
}
