#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Blooming Calendar Example
//!
//! Renders the chart idle and with each season's middle month hovered, as
//! SVG and PNG. Pass a YAML config path to chart your own garden.
//!
//! Run with: `RUST_LOG=debug cargo run --example render_calendar [garden.yaml]`

use bloom_sunburst::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Blooming Calendar Example");
    println!("=========================\n");

    let config = match std::env::args().nth(1) {
        Some(path) => ChartConfig::load_or_default(path),
        None => ChartConfig::default(),
    };
    let mut chart = config.into_chart().expect("Failed to build chart");

    chart.write_svg("bloom_idle.svg").expect("Failed to write SVG");
    chart.write_png("bloom_idle.png").expect("Failed to write PNG");
    println!("Saved: bloom_idle.svg, bloom_idle.png\n");

    let picks: Vec<(String, usize)> = chart
        .bloom_calendar()
        .seasons()
        .iter()
        .filter_map(|season| {
            let month = &season.months()[season.months().len() / 2];
            chart.bloom_calendar().index_of(month).map(|i| (month.clone(), i))
        })
        .collect();

    for (month, index) in picks {
        chart.pointer_enter(index);
        let scene = chart.scene();
        println!("{}", scene.overlay.lines().join(" | "));

        let name = month.to_lowercase().replace(' ', "_");
        chart
            .write_svg(format!("bloom_{name}.svg"))
            .expect("Failed to write SVG");
        chart
            .write_png(format!("bloom_{name}.png"))
            .expect("Failed to write PNG");
        println!("   Saved: bloom_{name}.svg ({}x{})\n", scene.width, scene.height);
    }

    chart.pointer_leave();
    assert_eq!(chart.selected_month(), None);
}
