// File: crates/chart-core/tests/hover.rs
// Purpose: Pointer -> nearest record -> crosshair, driven through LineChart.

use linechart_core::{Accessors, ChartConfig, Layer, LineChart, PointerEvent, Scene};

fn chart_with(points: &[(f64, f64)]) -> (LineChart<(f64, f64)>, Scene) {
    let mut chart = LineChart::new(ChartConfig::default(), Accessors::tuple());
    let mut scene = Scene::new(700, 400);
    chart.set_data(Some(points.to_vec()));
    chart.redraw(&mut scene);
    (chart, scene)
}

fn move_to(chart: &mut LineChart<(f64, f64)>, scene: &mut Scene, domain: (f64, f64)) {
    let at = chart.scales().expect("scales").to_px(domain);
    chart.handle_event(PointerEvent::Move { x: at.x, y: at.y }, scene);
}

#[test]
fn nearest_point_becomes_target() {
    let (mut chart, mut scene) = chart_with(&[(0.0, 0.0), (10.0, 10.0), (5.0, 5.0)]);
    move_to(&mut chart, &mut scene, (5.1, 5.1));

    let expected = chart.scales().unwrap().to_px((5.0, 5.0));
    assert_eq!(chart.hover_target(), Some(expected));
    assert_eq!(chart.hovered().map(|(i, _)| i), Some(2));
    assert_eq!(chart.crosshair().position(), Some(expected));
    assert_eq!(scene.count(Layer::Overlay), 3);
}

#[test]
fn leave_clears_target_and_overlay() {
    let (mut chart, mut scene) = chart_with(&[(0.0, 0.0), (10.0, 10.0)]);
    move_to(&mut chart, &mut scene, (9.0, 9.0));
    assert!(chart.hover_target().is_some());

    chart.handle_event(PointerEvent::Leave, &mut scene);
    assert_eq!(chart.hover_target(), None);
    assert!(!chart.crosshair().is_visible());
    assert_eq!(scene.count(Layer::Overlay), 0);
}

#[test]
fn moving_off_surface_counts_as_leave() {
    let (mut chart, mut scene) = chart_with(&[(0.0, 0.0), (10.0, 10.0)]);
    move_to(&mut chart, &mut scene, (0.0, 0.0));
    chart.handle_event(PointerEvent::Move { x: -5.0, y: 100.0 }, &mut scene);
    assert_eq!(chart.hover_target(), None);
    assert_eq!(scene.count(Layer::Overlay), 0);
}

#[test]
fn crosshair_is_replaced_not_stacked() {
    let (mut chart, mut scene) = chart_with(&[(0.0, 0.0), (5.0, 2.0), (10.0, 10.0)]);
    for p in [(0.0, 0.0), (5.0, 2.0), (10.0, 10.0), (5.0, 2.0)] {
        move_to(&mut chart, &mut scene, p);
        assert_eq!(scene.count(Layer::Overlay), 3);
    }
    let target = chart.hover_target().unwrap();
    let guides: Vec<_> = scene.layer(Layer::Overlay).collect();
    match &guides[0].primitive {
        linechart_core::Primitive::Line { from, to, .. } => {
            assert_eq!((from.x, from.y), (0.0, target.y));
            assert_eq!((to.x, to.y), (700.0, target.y));
        }
        other => panic!("expected horizontal guide, got {other:?}"),
    }
}

#[test]
fn pointer_before_data_is_ignored() {
    let mut chart = LineChart::new(ChartConfig::default(), Accessors::<(f64, f64)>::tuple());
    let mut scene = Scene::new(700, 400);
    chart.handle_event(PointerEvent::Move { x: 300.0, y: 200.0 }, &mut scene);
    assert_eq!(chart.hover_target(), None);
    assert!(scene.is_empty());

    chart.redraw(&mut scene);
    assert_eq!(chart.hover_target(), None);
    assert_eq!(scene.count(Layer::Overlay), 0);
}

#[test]
fn pointer_resting_over_chart_follows_new_data() {
    let (mut chart, mut scene) = chart_with(&[(0.0, 0.0), (10.0, 10.0)]);
    chart.handle_event(PointerEvent::Move { x: 650.0, y: 50.0 }, &mut scene);
    let before = chart.hover_target().unwrap();

    chart.set_data(Some(vec![(0.0, 0.0), (10.0, 20.0), (20.0, 0.0)]));
    chart.redraw(&mut scene);
    let after = chart.hover_target().unwrap();
    // (10, 20) is now the top of the y domain, right under the resting pointer
    assert_ne!(before, after);
    assert_eq!(chart.hovered().map(|(i, _)| i), Some(1));
    assert_eq!(scene.count(Layer::Overlay), 3);

    chart.set_data(Some(Vec::new()));
    chart.redraw(&mut scene);
    assert_eq!(chart.hover_target(), None);
    assert_eq!(scene.count(Layer::Overlay), 0);
}

#[test]
fn single_point_hover_does_not_panic() {
    let (mut chart, mut scene) = chart_with(&[(3.0, 7.0)]);
    chart.handle_event(PointerEvent::Move { x: 10.0, y: 390.0 }, &mut scene);
    let target = chart.hover_target().unwrap();
    assert_eq!((target.x, target.y), (350.0, 200.0));
}
