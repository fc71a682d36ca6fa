// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end redraw: grid, axes and the data line land on the chart layer,
// and redrawing never accumulates primitives.

use linechart_core::{Accessors, ChartConfig, Layer, LineChart, PointerEvent, Primitive, Scene};

fn sine(n: usize, phase: f64) -> Vec<(f64, f64)> {
    (0..n).map(|i| (i as f64, (i as f64 * 0.3 + phase).sin())).collect()
}

fn chart() -> LineChart<(f64, f64)> {
    LineChart::new(ChartConfig::default().with_labels("Time", "Value"), Accessors::tuple())
}

#[test]
fn redraw_draws_one_polyline_through_every_point() {
    let mut c = chart();
    let mut scene = Scene::new(700, 400);
    let data = sine(12, 0.0);
    c.set_data(Some(data.clone()));
    let drawn = c.redraw(&mut scene);

    assert_eq!(drawn, scene.count(Layer::Chart));
    let lines: Vec<_> = scene
        .layer(Layer::Chart)
        .filter_map(|n| match &n.primitive {
            Primitive::Polyline { points, .. } => Some(points.len()),
            _ => None,
        })
        .collect();
    assert_eq!(lines, vec![data.len()]);

    let titles: Vec<_> = scene
        .layer(Layer::Chart)
        .filter_map(|n| match &n.primitive {
            Primitive::Text { text, rotation, .. } if text == "Time" || text == "Value" => {
                Some((text.clone(), *rotation))
            }
            _ => None,
        })
        .collect();
    assert_eq!(titles, vec![("Time".to_string(), 0.0), ("Value".to_string(), -90.0)]);
}

#[test]
fn redraw_with_new_data_matches_fresh_render() {
    let mut reused = chart();
    let mut scene = Scene::new(700, 400);
    reused.set_data(Some(sine(40, 0.0)));
    reused.redraw(&mut scene);
    reused.set_data(Some(sine(9, 1.0)));
    reused.redraw(&mut scene);

    let mut fresh = chart();
    let mut fresh_scene = Scene::new(700, 400);
    fresh.set_data(Some(sine(9, 1.0)));
    fresh.redraw(&mut fresh_scene);

    assert_eq!(scene.count(Layer::Chart), fresh_scene.count(Layer::Chart));
    assert_eq!(scene.to_svg(), fresh_scene.to_svg());
}

#[test]
fn repeated_redraw_is_stable() {
    let mut c = chart();
    let mut scene = Scene::new(700, 400);
    c.set_data(Some(sine(20, 0.5)));
    c.redraw(&mut scene);
    c.handle_event(PointerEvent::Move { x: 200.0, y: 200.0 }, &mut scene);
    let before = scene.len();
    for _ in 0..5 {
        c.redraw(&mut scene);
    }
    assert_eq!(scene.len(), before);
    assert_eq!(scene.count(Layer::Overlay), 3);
}

#[test]
fn gridlines_are_dashed_and_span_the_plot() {
    let mut c = chart();
    let mut scene = Scene::new(700, 400);
    c.set_data(Some(vec![(0.0, 0.0), (10.0, 10.0)]));
    c.redraw(&mut scene);

    let dashed: Vec<_> = scene
        .layer(Layer::Chart)
        .filter_map(|n| match &n.primitive {
            Primitive::Line { from, to, stroke } if stroke.dash.is_some() => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert!(!dashed.is_empty());
    for (from, to) in dashed {
        if from.x == to.x {
            assert_eq!((from.y, to.y), (355.0, 45.0));
        } else {
            assert_eq!((from.x, to.x), (45.0, 655.0));
        }
    }
}

#[test]
fn frame_without_plot_area_draws_nothing() {
    let mut c = LineChart::new(ChartConfig::default().with_size(80, 80, 45), Accessors::tuple());
    let mut scene = Scene::new(80, 80);
    c.set_data(Some(sine(5, 0.0)));
    assert_eq!(c.redraw(&mut scene), 0);
    assert!(scene.is_empty());
}

#[test]
fn svg_export_contains_data_line() {
    let mut c = chart();
    let mut scene = Scene::new(700, 400);
    c.set_data(Some(vec![(0.0, 0.0), (1.0, 1.0)]));
    c.redraw(&mut scene);
    let svg = scene.to_svg();
    assert!(svg.contains(r#"<polyline points="45,355 655,45" fill="none""#));
}

fn gridlines(scene: &Scene) -> (usize, usize) {
    scene.layer(Layer::Chart).fold((0, 0), |(v, h), n| match &n.primitive {
        Primitive::Line { from, to, stroke } if stroke.dash.is_some() => {
            if from.x == to.x { (v + 1, h) } else { (v, h + 1) }
        }
        _ => (v, h),
    })
}

#[test]
fn near_constant_axis_with_many_points_keeps_its_bounds() {
    let mut c = chart();
    let mut scene = Scene::new(700, 400);
    let data: Vec<(f64, f64)> =
        (0..5000).map(|i| (i as f64, if i % 2 == 0 { 1.0 } else { 1.0 + f64::EPSILON })).collect();
    c.set_data(Some(data));
    c.redraw(&mut scene);

    let (_, horizontal) = gridlines(&scene);
    assert_eq!(horizontal, 2);
}

#[test]
fn large_dataset_gets_a_readable_tick_count() {
    let mut c = chart();
    let mut scene = Scene::new(700, 400);
    c.set_data(Some(sine(50_000, 0.0)));
    c.redraw(&mut scene);

    let (vertical, horizontal) = gridlines(&scene);
    // 610x310 plot allows 15 and 7 ticks; 1/2/5 steps may land a few over
    assert!((2..=20).contains(&vertical), "{vertical} vertical gridlines");
    assert!((2..=12).contains(&horizontal), "{horizontal} horizontal gridlines");
}

#[test]
fn records_with_nan_coordinates_are_left_out_of_the_line() {
    let mut c = chart();
    let mut scene = Scene::new(700, 400);
    c.set_data(Some(vec![(0.0, 0.0), (0.5, f64::NAN), (1.0, 1.0)]));
    c.redraw(&mut scene);

    let lines: Vec<_> = scene
        .layer(Layer::Chart)
        .filter_map(|n| match &n.primitive {
            Primitive::Polyline { points, .. } => Some(points.len()),
            _ => None,
        })
        .collect();
    assert_eq!(lines, vec![2]);
    let svg = scene.to_svg();
    assert!(!svg.contains("NaN"));
    assert!(svg.contains(r#"<polyline points="45,355 655,45" fill="none""#));
}
