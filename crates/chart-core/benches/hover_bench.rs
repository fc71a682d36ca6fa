use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use linechart_core::{nearest_index, Accessors, ChartConfig, LineChart, PointerEvent, Scene};

fn gen_xy(n: usize) -> Vec<(f64, f64)> {
    (0..n).map(|i| (i as f64, (i as f64 * 0.01).sin() * 10.0)).collect()
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_index");
    for &n in &[1_000usize, 50_000usize, 100_000usize] {
        let data = gen_xy(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, d| {
            b.iter(|| black_box(nearest_index(d.iter().copied(), black_box(n as f64 * 0.37), 1.5)));
        });
    }
    group.finish();
}

fn bench_pointer_sweep(c: &mut Criterion) {
    let mut chart = LineChart::new(ChartConfig::default(), Accessors::tuple());
    chart.set_data(Some(gen_xy(5_000)));
    let mut scene = Scene::new(700, 400);
    chart.redraw(&mut scene);
    c.bench_function("pointer_sweep_5000", |b| {
        b.iter_batched(
            || (45..655).step_by(5).map(|x| x as f32).collect::<Vec<_>>(),
            |xs| {
                for x in xs {
                    chart.handle_event(PointerEvent::Move { x, y: 200.0 }, &mut scene);
                }
                chart.handle_event(PointerEvent::Leave, &mut scene);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_nearest, bench_pointer_sweep);
criterion_main!(benches);
