// File: crates/chart-data/src/query.rs
// Summary: One-shot fetch driver holding loading / error / data state for the chart panel.

use std::future::Future;

use linechart_core::LoadState;
use tracing::{error, info};

use crate::error::FetchError;

/// Snapshot of a query. `data` survives a later failed run; the error flag is what the panel shows.
#[derive(Debug)]
pub struct QueryState<T> {
    pub is_loading: bool,
    pub error: Option<FetchError>,
    pub data: Option<T>,
}

impl<T> Default for QueryState<T> {
    /// A query that has not settled yet counts as loading.
    fn default() -> Self {
        Self { is_loading: true, error: None, data: None }
    }
}

#[derive(Debug, Default)]
pub struct Query<T> {
    state: QueryState<T>,
}

impl<T> Query<T> {
    pub fn new() -> Self {
        Self { state: QueryState::default() }
    }

    pub fn state(&self) -> &QueryState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data.as_ref()
    }

    pub fn take_data(&mut self) -> Option<T> {
        self.state.data.take()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.state.error.as_ref()
    }

    pub fn load_state(&self) -> LoadState {
        LoadState { is_loading: self.state.is_loading, has_error: self.state.error.is_some() }
    }

    /// Enter the loading state; the previous error is cleared.
    pub fn begin(&mut self) {
        self.state.is_loading = true;
        self.state.error = None;
    }

    /// Settle with the outcome of a fetch. Failures are logged and kept, never retried.
    pub fn finish(&mut self, result: Result<T, FetchError>) {
        self.state.is_loading = false;
        match result {
            Ok(data) => {
                self.state.data = Some(data);
                self.state.error = None;
            }
            Err(e) => {
                error!(error = %e, "dataset fetch failed");
                self.state.error = Some(e);
            }
        }
    }

    /// `begin`, await `fetch`, then `finish`.
    pub async fn run<F>(&mut self, fetch: F) -> LoadState
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        self.begin();
        let result = fetch.await;
        self.finish(result);
        let load = self.load_state();
        info!(has_error = load.has_error, "query settled");
        load
    }
}
