// File: crates/chart-data/src/http.rs
// Summary: JSON-over-HTTP data source with default headers, optional timeout and a
// "slow network" mode that holds the response back for a fixed delay.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use tracing::{debug, info};

use crate::error::FetchError;
use crate::point::DataPoint;
use crate::source::DataSource;

/// How long `simulate_slow` holds a response before handing it back.
pub const SLOW_NETWORK_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Debug)]
pub struct HttpDataSource {
    client: reqwest::Client,
    url: String,
    headers: Vec<(String, String)>,
    params: Vec<(String, String)>,
    timeout: Duration,
    simulate_slow: bool,
}

impl HttpDataSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            headers: Vec::new(),
            params: Vec::new(),
            timeout: Duration::ZERO,
            simulate_slow: false,
        }
    }

    /// Add or override a request header. An empty value removes the header, defaults included.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Per-request timeout. `Duration::ZERO` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_simulate_slow(mut self, on: bool) -> Self {
        self.simulate_slow = on;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Default headers merged with the configured ones; later entries win and empty values drop out.
    pub fn request_headers(&self) -> Result<HeaderMap, FetchError> {
        let mut map = HeaderMap::new();
        map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| FetchError::InvalidHeader(name.clone()))?;
            if value.is_empty() {
                map.remove(&name);
                continue;
            }
            let value = HeaderValue::from_str(value).map_err(|_| FetchError::InvalidHeader(name.to_string()))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self) -> Result<Vec<DataPoint>, FetchError> {
        let mut request = self.client.get(&self.url).headers(self.request_headers()?);
        if !self.params.is_empty() {
            request = request.query(&self.params);
        }
        if !self.timeout.is_zero() {
            request = request.timeout(self.timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status: status.as_u16(), body });
        }
        let bytes = response.bytes().await?;
        let points: Vec<DataPoint> = serde_json::from_slice(&bytes)?;
        debug!(url = %self.url, bytes = bytes.len(), points = points.len(), "dataset decoded");

        if self.simulate_slow {
            info!(delay_ms = SLOW_NETWORK_DELAY.as_millis() as u64, "simulating slow network");
            tokio::time::sleep(SLOW_NETWORK_DELAY).await;
        }
        Ok(points)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
