// File: crates/chart-dioxus/src/bin/desktop_demo.rs
// Purpose: Desktop launcher for the line chart panel. Reads the dataset URL from the first
// argument (JSON endpoint) or a local .csv/.json path.

#[cfg(feature = "desktop")]
fn main() {
    use std::sync::Arc;

    use linechart_core::ChartConfig;
    use linechart_data::{CsvDataSource, DataSource, HttpDataSource, JsonFileSource};

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Some(arg) = std::env::args().nth(1) else {
        eprintln!("usage: desktop_demo <url | file.csv | file.json>");
        return;
    };
    let source: Arc<dyn DataSource> = if arg.starts_with("http://") || arg.starts_with("https://") {
        Arc::new(HttpDataSource::new(arg).with_simulate_slow(true))
    } else if arg.to_ascii_lowercase().ends_with(".csv") {
        Arc::new(CsvDataSource::new(arg))
    } else {
        Arc::new(JsonFileSource::new(arg))
    };
    linechart_dioxus::ui::run_desktop(source, ChartConfig::default());
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("This demo requires --features desktop");
}
