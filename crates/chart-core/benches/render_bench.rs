use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linechart_core::{Accessors, ChartConfig, LineChart, Scene};

fn gen_xy(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| (i as f64, (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)))
        .collect()
}

fn bench_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("redraw");
    for &n in &[100usize, 1_000usize, 10_000usize] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("xy_{n}")), &n, |b, &n| {
            let mut chart = LineChart::new(ChartConfig::default().with_size(800, 500, 45), Accessors::tuple());
            chart.set_data(Some(gen_xy(n)));
            let mut scene = Scene::new(800, 500);
            b.iter(|| black_box(chart.redraw(&mut scene)));
        });
    }
    group.finish();
}

fn bench_svg(c: &mut Criterion) {
    let mut chart = LineChart::new(ChartConfig::default(), Accessors::tuple());
    chart.set_data(Some(gen_xy(1_000)));
    let mut scene = Scene::new(700, 400);
    chart.redraw(&mut scene);
    c.bench_function("to_svg_1000", |b| b.iter(|| black_box(scene.to_svg())));
}

criterion_group!(benches, bench_redraw, bench_svg);
criterion_main!(benches);
