// File: crates/chart-data/src/file.rs
// Summary: Offline data sources reading a dataset from a CSV or JSON file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::FetchError;
use crate::point::DataPoint;
use crate::source::DataSource;

/// CSV with a header row. Columns may be camelCase (`diagnosisGroupId`) or snake_case.
#[derive(Clone, Debug)]
pub struct CsvDataSource {
    path: PathBuf,
}

impl CsvDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse CSV text into records, in file order.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<DataPoint>, FetchError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(bytes);
    let mut out = Vec::new();
    for rec in rdr.deserialize::<DataPoint>() {
        out.push(rec?);
    }
    Ok(out)
}

#[async_trait]
impl DataSource for CsvDataSource {
    async fn fetch(&self) -> Result<Vec<DataPoint>, FetchError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let points = parse_csv(&bytes)?;
        debug!(path = %self.path.display(), points = points.len(), "csv dataset loaded");
        Ok(points)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A JSON array of records, the same shape the HTTP endpoint serves.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<DataPoint>, FetchError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let points: Vec<DataPoint> = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), points = points.len(), "json dataset loaded");
        Ok(points)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_accepts_both_column_styles() {
        let camel = b"id,x,y,target,prediction,diagnosisGroupId\n1,0,2.5,1,0,3\n2,1,3.5,0,1,3\n";
        let snake = b"id, x, y, target, prediction, diagnosis_group_id\n1, 0, 2.5, 1, 0, 3\n";
        let a = parse_csv(camel).unwrap();
        let b = parse_csv(snake).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a[0], b[0]);
        assert_eq!(a[1].y, 3.5);
    }

    #[test]
    fn csv_rejects_non_numeric_cells() {
        let bad = b"id,x,y,target,prediction,diagnosisGroupId\n1,zero,2,1,0,3\n";
        assert!(matches!(parse_csv(bad), Err(FetchError::Csv(_))));
    }
}
