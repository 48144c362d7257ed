//! HTTP client for the Clay tools API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. Every tool maps to one `POST` against the
//! tools base URL; the client returns the response body untouched.

mod async_wrapper;
pub use async_wrapper::{AsyncClayClient, AsyncClayClientImpl};

use crate::config::Config;
use crate::error::{ClayApiError, ClayApiResult};
use crate::metrics::Metrics;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the Clay tools API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ClayClient {
    /// Base URL for the tools API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ClayClient {
    /// Create a new ClayClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.clay_api_url.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a ClayClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector instead of the client's own.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// POST a JSON body to `path` and return the raw response text.
    ///
    /// `authorization` is sent verbatim as the `Authorization` header when present.
    /// Error statuses are not interpreted: their body is returned like any other.
    pub fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
        authorization: Option<&str>,
    ) -> ClayApiResult<String> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let mut request = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json");
        if let Some(value) = authorization {
            request = request.set("Authorization", value);
        }

        let result = match request.send_json(body) {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                Self::read_body(response)
            }
            Err(ureq::Error::Status(code, response)) => {
                tracing::warn!("POST {} - Backend returned status {}", url, code);
                Self::read_body(response)
            }
            Err(ureq::Error::Transport(transport)) => Err(Self::map_transport_error(transport)),
        };

        let duration = start.elapsed();
        if let Err(e) = &result {
            tracing::error!("POST {} - Error: {:?}", url, e);
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    fn read_body(response: ureq::Response) -> ClayApiResult<String> {
        response
            .into_string()
            .map_err(|e| ClayApiError::BodyError(e.to_string()))
    }

    /// Map a ureq transport error to a ClayApiError.
    ///
    /// Only an I/O error of kind `TimedOut` or `WouldBlock` (what a socket
    /// deadline produces) counts as a timeout; everything else is a failed call.
    fn map_transport_error(transport: ureq::Transport) -> ClayApiError {
        let timed_out = transport.kind() == ureq::ErrorKind::Io
            && std::error::Error::source(&transport)
                .and_then(|source| source.downcast_ref::<std::io::Error>())
                .is_some_and(|io| {
                    matches!(
                        io.kind(),
                        std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                    )
                });

        if timed_out {
            ClayApiError::Timeout
        } else if transport.kind() == ureq::ErrorKind::ConnectionFailed {
            ClayApiError::HttpError("Connection failed".to_string())
        } else {
            ClayApiError::HttpError(transport.to_string())
        }
    }
}
