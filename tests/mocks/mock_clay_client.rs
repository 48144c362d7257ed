use async_trait::async_trait;
use clay_mcp_server::client::AsyncClayClient;
use clay_mcp_server::error::{ClayApiError, ClayApiResult};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One outbound request as seen by the mock.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub path: String,
    pub body: Value,
    pub authorization: Option<String>,
}

/// Mock Clay client for testing.
///
/// Records every request, answers with a configurable body per path, and can
/// be told to fail or stall specific paths.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockClayClient {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<HashMap<String, String>>>,
    failing_paths: Arc<Mutex<HashSet<String>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
}

#[allow(dead_code)]
impl MockClayClient {
    /// Create a new MockClayClient answering `{}` everywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests to `path` with `body`.
    pub fn respond(&self, path: &str, body: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(path.to_string(), body.to_string());
    }

    /// Fail requests to `path` with a transport error.
    pub fn fail(&self, path: &str) {
        let mut failing = self.failing_paths.lock().unwrap();
        failing.insert(path.to_string());
    }

    /// Hold requests to `path` for `delay` before answering.
    pub fn delay(&self, path: &str, delay: Duration) {
        let mut delays = self.delays.lock().unwrap();
        delays.insert(path.to_string(), delay);
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received for `path`.
    pub fn call_count(&self, path: &str) -> usize {
        let requests = self.requests.lock().unwrap();
        requests.iter().filter(|r| r.path == path).count()
    }
}

#[async_trait]
impl AsyncClayClient for MockClayClient {
    async fn post_json(
        &self,
        path: &str,
        body: Value,
        authorization: Option<String>,
    ) -> ClayApiResult<String> {
        {
            let mut requests = self.requests.lock().unwrap();
            requests.push(RecordedRequest {
                path: path.to_string(),
                body,
                authorization,
            });
        }

        let delay = self.delays.lock().unwrap().get(path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing_paths.lock().unwrap().contains(path) {
            return Err(ClayApiError::HttpError("Connection failed".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        Ok(responses
            .get(path)
            .cloned()
            .unwrap_or_else(|| "{}".to_string()))
    }
}
