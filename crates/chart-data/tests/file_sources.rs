// File: crates/chart-data/tests/file_sources.rs
// Purpose: CSV and JSON file sources feeding a LineChart end to end.

use linechart_core::{ChartConfig, Layer, LineChart, Scene};
use linechart_data::{CsvDataSource, DataPoint, DataSource, FetchError, JsonFileSource};

fn tmp(name: &str) -> std::path::PathBuf {
    let dir = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("file_sources");
    std::fs::create_dir_all(&dir).expect("tmp dir");
    dir.join(name)
}

#[tokio::test]
async fn csv_file_drives_chart() {
    let path = tmp("points.csv");
    std::fs::write(
        &path,
        "id,x,y,target,prediction,diagnosisGroupId\n1,0,0,0,0,1\n2,5,10,1,1,1\n3,10,4,0,1,1\n",
    )
    .expect("write csv");
    let points = CsvDataSource::new(&path).fetch().await.expect("csv fetch");
    assert_eq!(points.len(), 3);

    let mut chart = LineChart::new(ChartConfig::default(), DataPoint::accessors());
    chart.set_data(Some(points));
    let mut scene = Scene::new(700, 400);
    assert!(chart.redraw(&mut scene) > 0);
    assert_eq!(chart.scales().unwrap().y.domain, (0.0, 10.0));
    assert!(scene.count(Layer::Chart) > 0);
}

#[tokio::test]
async fn json_file_round_trips_endpoint_shape() {
    let path = tmp("points.json");
    std::fs::write(&path, r#"[{"id":9,"x":1,"y":2,"target":3,"prediction":4,"diagnosisGroupId":5}]"#)
        .expect("write json");
    let points = JsonFileSource::new(&path).fetch().await.expect("json fetch");
    assert_eq!(points[0].id, 9);
    assert_eq!(points[0].prediction, 4.0);
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let err = JsonFileSource::new(tmp("nope.json")).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Io(_)));
}
