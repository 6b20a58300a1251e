use criterion::{Criterion, criterion_group, criterion_main};
use progress_charts::api::{LineChartRenderer, presets};
use progress_charts::core::{ChartInput, Viewport};
use progress_charts::render::NullRenderer;
use std::hint::black_box;

fn bench_dashboard_frame(c: &mut Criterion) {
    let chart = LineChartRenderer::default();
    let input = presets::jump_chart().to_input().expect("valid preset");
    let viewport = Viewport::new(1280, 480);

    c.bench_function("dashboard_frame_11_samples", |b| {
        b.iter(|| {
            let _ = chart
                .build_frame(black_box(viewport), black_box(&input))
                .expect("frame");
        })
    });
}

fn bench_render_10k(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000)
        .map(|i| 100.0 + (i as f64 * 0.01).sin() * 25.0)
        .collect();
    let labels: Vec<String> = (0..values.len()).map(|i| i.to_string()).collect();
    let input = ChartInput::new(values, labels, 50.0, 150.0).expect("valid input");
    let chart = LineChartRenderer::default();
    let mut surface = NullRenderer::new(Viewport::new(1920, 1080));

    c.bench_function("render_10k_samples", |b| {
        b.iter(|| chart.render(&mut surface, black_box(&input)).expect("render"))
    });
}

criterion_group!(benches, bench_dashboard_frame, bench_render_10k);
criterion_main!(benches);
