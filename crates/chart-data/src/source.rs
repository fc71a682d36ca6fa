// File: crates/chart-data/src/source.rs
// Summary: The data-source seam the chart's fetch driver talks to.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::point::DataPoint;

/// Something that can produce the full dataset. One call, one dataset; no retries.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<DataPoint>, FetchError>;

    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
}
