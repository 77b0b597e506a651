#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for scene derivation and output encoding.

use bloom_sunburst::geometry::Point;
use bloom_sunburst::plots::SunburstChart;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn hovered_chart(size: u32) -> SunburstChart {
    let mut chart = SunburstChart::new()
        .dimensions(size, size)
        .build()
        .expect("chart should build");
    chart.pointer_enter(7);
    chart
}

fn scene_benchmark(c: &mut Criterion) {
    let chart = hovered_chart(500);
    c.bench_function("scene_derivation", |b| b.iter(|| black_box(&chart).scene()));
    c.bench_function("svg_encoding", |b| b.iter(|| black_box(&chart).to_svg()));
}

fn raster_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");

    for size in [250, 500, 1000] {
        let chart = hovered_chart(size);
        group.bench_with_input(BenchmarkId::from_parameter(format!("{size}x{size}")), &size, |b, _| {
            b.iter(|| {
                black_box(&chart)
                    .to_framebuffer()
                    .expect("rendering should succeed")
            });
        });
    }

    group.finish();
}

fn pointer_benchmark(c: &mut Criterion) {
    let mut chart = hovered_chart(500);
    let center = chart.chart_layout().center;
    let path: Vec<Point> = (0..360)
        .map(|deg| Point::from_polar(center, 110.0, deg as f32))
        .collect();

    c.bench_function("pointer_sweep", |b| {
        b.iter(|| {
            for &p in &path {
                chart.pointer_move(black_box(p));
            }
        });
    });
}

criterion_group!(benches, scene_benchmark, raster_benchmark, pointer_benchmark);
criterion_main!(benches);
