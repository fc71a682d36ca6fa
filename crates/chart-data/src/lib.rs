// File: crates/chart-data/src/lib.rs
// Summary: Library entry for linechart-data; re-exports the record type, sources and query driver.

pub mod error;
pub mod file;
pub mod http;
pub mod point;
pub mod query;
pub mod source;

pub use error::FetchError;
pub use file::{CsvDataSource, JsonFileSource};
pub use http::{HttpDataSource, SLOW_NETWORK_DELAY};
pub use point::DataPoint;
pub use query::{Query, QueryState};
pub use source::DataSource;
