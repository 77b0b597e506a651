//! Chart Scenario Tests
//!
//! End-to-end hover scenarios on the reference garden: pointer events in,
//! scene and SVG out.
//!
//! Run: cargo test --test chart_scenarios_test

#![allow(clippy::unwrap_used, missing_docs)]

use bloom_sunburst::detail::IDLE_PROMPT;
use bloom_sunburst::prelude::*;
use proptest::prelude::*;

fn chart() -> SunburstChart {
    SunburstChart::new().build().unwrap()
}

fn month_index(chart: &SunburstChart, name: &str) -> usize {
    chart.bloom_calendar().index_of(name).unwrap()
}

// ============================================================================
// Initial render
// ============================================================================

#[test]
fn initial_render_shows_prompt_and_no_panel() {
    let chart = chart();
    let scene = chart.scene();

    assert_eq!(scene.overlay.lines(), [IDLE_PROMPT]);
    assert!(scene.panel.is_none());
    assert!(scene.active_arc().is_none());

    let svg = chart.to_svg();
    assert!(svg.contains("Plant Blooming Calendar"));
    assert!(!svg.contains("Blooming Plants:"));
    assert!(!svg.contains("rgb(241,241,241)"));
}

#[test]
fn rings_have_expected_arc_counts() {
    let scene = chart().scene();
    assert_eq!(scene.season_arcs.len(), 4);
    assert_eq!(scene.month_arcs.len(), 12);
    assert!(scene.season_arcs.iter().all(|a| (a.sweep() - 90.0).abs() < 1e-4));
    assert!(scene.month_arcs.iter().all(|a| (a.sweep() - 30.0).abs() < 1e-4));
    assert_eq!(scene.season_labels.len(), 4);
    assert_eq!(scene.month_labels.len(), 12);
}

#[test]
fn every_month_arc_carries_its_season_color() {
    let chart = chart();
    let calendar = chart.bloom_calendar();
    for arc in chart.month_arcs() {
        let season = calendar.season_of(&arc.label).unwrap();
        assert!(season.contains(&arc.label));
        assert_eq!(arc.fill, season.color());
        assert_eq!(arc.season, season.name());
    }
}

// ============================================================================
// Hover scenarios
// ============================================================================

#[test]
fn hover_july_shows_preview_and_full_panel() {
    let mut chart = chart();
    let july = month_index(&chart, "July");
    chart.pointer_enter(july);

    let scene = chart.scene();
    assert_eq!(
        scene.overlay.lines(),
        ["July", "Blooming:", "Lily, Sunflower, Hydrangea..."]
    );

    let panel = &scene.panel.as_ref().unwrap().panel;
    assert_eq!(panel.title(), "July Blooming Plants:");
    assert_eq!(panel.plants(), ["Lily", "Sunflower", "Hydrangea", "Daylily"]);

    let svg = chart.to_svg();
    assert!(svg.contains("July Blooming Plants:"));
    assert!(svg.contains("\u{2022} Daylily"));
    assert!(svg.contains("rgb(241,241,241)"));
}

#[test]
fn hover_february_has_short_preview() {
    let mut chart = chart();
    let february = month_index(&chart, "February");
    chart.pointer_enter(february);

    let scene = chart.scene();
    assert_eq!(
        scene.overlay.lines(),
        ["February", "Blooming:", "Snowdrop, Winter Aconite"]
    );
    let panel = &scene.panel.as_ref().unwrap().panel;
    assert_eq!(panel.plants(), ["Snowdrop", "Winter Aconite"]);
}

#[test]
fn leave_restores_initial_scene() {
    let mut chart = chart();
    let initial = chart.scene();

    chart.pointer_enter(4);
    assert_ne!(chart.scene(), initial);
    chart.pointer_leave();

    assert_eq!(chart.state(), HoverState::Idle);
    assert_eq!(chart.scene(), initial);
}

#[test]
fn enter_supersedes_stale_hover() {
    let mut chart = chart();
    chart.pointer_enter(2);
    chart.pointer_enter(9);

    assert_eq!(chart.state(), HoverState::Hovering(9));
    let active: Vec<_> = chart.month_arcs().into_iter().filter(|a| a.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].index, 9);
}

#[test]
fn hovered_arc_is_drawn_last_and_enlarged() {
    let mut chart = chart();
    chart.pointer_enter(0);

    let svg = chart.to_svg();
    let last_month = svg.rfind("id=\"month-").unwrap();
    assert_eq!(&svg[last_month..last_month + 11], "id=\"month-0");

    let layout = *chart.chart_layout();
    let active = chart.scene().active_arc().cloned().unwrap();
    assert!((active.sector.outer - (layout.month_ring.outer + layout.hover_delta)).abs() < 1e-4);
}

#[test]
fn pointer_move_over_label_hovers_that_month() {
    let mut chart = chart();
    for (i, label) in chart.month_labels().iter().enumerate() {
        chart.pointer_move(label.position);
        assert_eq!(chart.active_index(), Some(i), "label {}", label.text);
    }

    chart.pointer_move(Point::new(0.0, 0.0));
    assert_eq!(chart.state(), HoverState::Idle);
}

#[test]
fn resized_chart_keeps_proportions() {
    let mut chart = SunburstChart::new().dimensions(1000, 1000).build().unwrap();
    chart.pointer_enter(3);

    let layout = *chart.chart_layout();
    assert!((layout.hover_delta - 12.0).abs() < 1e-4);

    let label = &chart.month_labels()[3];
    let (r, _) = label.position.to_polar(layout.center);
    assert!((r - 220.0).abs() < 1e-2);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_last_enter_wins(indices in prop::collection::vec(0usize..12, 1..20)) {
        let mut chart = chart();
        for &i in &indices {
            chart.pointer_enter(i);
        }
        let last = *indices.last().unwrap();
        prop_assert_eq!(chart.active_index(), Some(last));
        prop_assert_eq!(chart.month_arcs().iter().filter(|a| a.active).count(), 1);
        prop_assert_eq!(
            chart.selected_month(),
            chart.bloom_calendar().month(last).map(|m| m.name())
        );
    }

    #[test]
    fn prop_enter_leave_round_trip(i in 0usize..12) {
        let mut chart = chart();
        chart.pointer_enter(i);
        chart.pointer_leave();
        prop_assert_eq!(chart.state(), HoverState::Idle);
        prop_assert!(chart.scene().panel.is_none());
    }

    #[test]
    fn prop_any_size_labels_sit_in_their_ring(size in 50u32..2000) {
        let chart = SunburstChart::new().dimensions(size, size).build().unwrap();
        let layout = *chart.chart_layout();
        for label in chart.month_labels() {
            let (r, _) = label.position.to_polar(layout.center);
            prop_assert!(layout.month_ring.contains(r));
        }
        for label in chart.season_labels() {
            let (r, _) = label.position.to_polar(layout.center);
            prop_assert!(layout.season_ring.contains(r));
        }
    }
}
