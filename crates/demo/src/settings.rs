// File: crates/demo/src/settings.rs
// Summary: Demo configuration layered from an optional `config/linechart` file and
// `LINECHART__*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use linechart_core::ChartConfig;
use linechart_data::{CsvDataSource, DataSource, HttpDataSource, JsonFileSource};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SourceConfig {
    /// JSON endpoint serving an array of data points.
    pub url: Option<String>,
    /// Local `.csv` or `.json` dataset, used when no URL is set.
    pub path: Option<PathBuf>,
    pub simulate_slow: bool,
    /// Request timeout in milliseconds; 0 waits indefinitely.
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub output_dir: PathBuf,
    pub chart: ChartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            output_dir: PathBuf::from("target/out"),
            chart: ChartConfig::default(),
        }
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/linechart").required(false))
        .add_source(config::Environment::with_prefix("LINECHART").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

impl SourceConfig {
    /// The configured source, preferring `path_override`, then the URL, then the local path.
    pub fn build(&self, path_override: Option<PathBuf>) -> Option<Box<dyn DataSource>> {
        if let Some(path) = path_override {
            return Some(file_source(path));
        }
        if let Some(url) = &self.url {
            let http = HttpDataSource::new(url.clone())
                .with_timeout(Duration::from_millis(self.timeout_ms))
                .with_simulate_slow(self.simulate_slow);
            return Some(Box::new(http));
        }
        self.path.clone().map(file_source)
    }
}

fn file_source(path: PathBuf) -> Box<dyn DataSource> {
    let is_csv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        Box::new(CsvDataSource::new(path))
    } else {
        Box::new(JsonFileSource::new(path))
    }
}
