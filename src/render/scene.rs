//! Scene rasterization.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::scene::{ArcSegment, Scene};

use super::primitives::Drawable;

/// Draw arcs sharing one opacity.
///
/// Translucent arcs are filled opaque on a copy of `fb` and composited back
/// in a single pass, so overlapping edges never double-blend.
fn draw_arcs(fb: &mut Framebuffer, arcs: &[&ArcSegment]) -> Result<()> {
    let mut groups: Vec<(f32, Vec<&ArcSegment>)> = Vec::new();
    for &arc in arcs {
        match groups.iter_mut().find(|(o, _)| (*o - arc.opacity).abs() < f32::EPSILON) {
            Some((_, members)) => members.push(arc),
            None => groups.push((arc.opacity, vec![arc])),
        }
    }

    for (opacity, members) in groups {
        if opacity >= 1.0 {
            for arc in members {
                arc.sector.draw(fb, arc.fill);
            }
            continue;
        }
        let mut layer = fb.clone();
        for arc in members {
            arc.sector.draw(&mut layer, arc.fill);
        }
        fb.blend_over(&layer, opacity)?;
    }
    Ok(())
}

/// Rasterize `scene` onto `fb`.
///
/// Draw order: white background, season ring, resting month arcs, the
/// hovered month arc, then the panel box.
///
/// # Errors
///
/// Returns an error if compositing a translucent layer fails.
pub fn draw_scene(fb: &mut Framebuffer, scene: &Scene) -> Result<()> {
    fb.clear(Rgba::WHITE);

    let seasons: Vec<&ArcSegment> = scene.season_arcs.iter().collect();
    draw_arcs(fb, &seasons)?;

    let (active, resting): (Vec<&ArcSegment>, Vec<&ArcSegment>) =
        scene.month_arcs.iter().partition(|a| a.active);
    draw_arcs(fb, &resting)?;
    draw_arcs(fb, &active)?;

    if let Some(panel) = &scene.panel {
        panel.rect.draw(fb, Rgba::PANEL_GREY);
    }

    tracing::trace!(
        width = fb.width(),
        height = fb.height(),
        arcs = scene.season_arcs.len() + scene.month_arcs.len(),
        "scene rasterized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::CenterOverlay;
    use crate::geometry::{AnnularSector, Point};
    use crate::layout::ChartLayout;

    fn arc(index: usize, start: f32, opacity: f32, active: bool) -> ArcSegment {
        let layout = ChartLayout::reference();
        ArcSegment {
            index,
            label: format!("m{index}"),
            season: "s".to_string(),
            fill: Rgba::BLACK,
            opacity,
            active,
            sector: AnnularSector::new(
                layout.center,
                layout.month_ring.inner,
                layout.month_outer(active),
                start,
                90.0,
            ),
        }
    }

    fn scene(month_arcs: Vec<ArcSegment>) -> Scene {
        Scene {
            width: 500,
            height: 500,
            title: String::new(),
            layout: ChartLayout::reference(),
            season_arcs: Vec::new(),
            month_arcs,
            season_labels: Vec::new(),
            month_labels: Vec::new(),
            overlay: CenterOverlay::Prompt,
            panel: None,
        }
    }

    fn pixel_at(fb: &Framebuffer, p: Point) -> Rgba {
        fb.get_pixel(p.x as u32, p.y as u32).unwrap()
    }

    #[test]
    fn test_translucent_arcs_blend_over_white() {
        let s = scene(vec![arc(0, 0.0, 0.8, false), arc(1, 90.0, 0.8, false)]);
        let mut fb = Framebuffer::new(500, 500).unwrap();
        draw_scene(&mut fb, &s).unwrap();

        let c = s.layout.center;
        assert_eq!(pixel_at(&fb, Point::from_polar(c, 110.0, 45.0)), Rgba::rgb(51, 51, 51));
        assert_eq!(pixel_at(&fb, Point::from_polar(c, 110.0, 135.0)), Rgba::rgb(51, 51, 51));
        assert_eq!(pixel_at(&fb, Point::from_polar(c, 110.0, 225.0)), Rgba::WHITE);
        assert_eq!(pixel_at(&fb, c), Rgba::WHITE);
    }

    #[test]
    fn test_active_arc_is_opaque_and_enlarged() {
        let s = scene(vec![arc(0, 0.0, 1.0, true), arc(1, 90.0, 0.8, false)]);
        let mut fb = Framebuffer::new(500, 500).unwrap();
        draw_scene(&mut fb, &s).unwrap();

        let c = s.layout.center;
        assert_eq!(pixel_at(&fb, Point::from_polar(c, 110.0, 45.0)), Rgba::BLACK);
        assert_eq!(pixel_at(&fb, Point::from_polar(c, 143.0, 45.0)), Rgba::BLACK);
        assert_eq!(pixel_at(&fb, Point::from_polar(c, 143.0, 135.0)), Rgba::WHITE);
    }
}
