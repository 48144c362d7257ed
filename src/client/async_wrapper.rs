//! Async wrapper around synchronous ClayClient.
//!
//! This module provides an async interface to the synchronous ClayClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ClayClient;
use crate::error::{ClayApiError, ClayApiResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async seam for outbound tool calls.
///
/// The dispatcher only talks to this trait, so tests can substitute a
/// recording client without any network.
#[async_trait]
pub trait AsyncClayClient: Send + Sync {
    /// POST `body` to `path`, returning the raw response text.
    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
        authorization: Option<String>,
    ) -> ClayApiResult<String>;
}

/// Async wrapper around synchronous ClayClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool. Dropping the returned future does
/// not abort a request that is already running.
#[derive(Clone)]
pub struct AsyncClayClientImpl {
    client: Arc<ClayClient>,
}

impl AsyncClayClientImpl {
    pub fn new(client: ClayClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncClayClient for AsyncClayClientImpl {
    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
        authorization: Option<String>,
    ) -> ClayApiResult<String> {
        let client = self.client.clone();
        let path = path.to_string();

        tokio::task::spawn_blocking(move || {
            client.post_json(&path, &body, authorization.as_deref())
        })
        .await
        .map_err(|e| ClayApiError::HttpError(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[tokio::test]
    async fn test_async_client_creation() {
        let config = Config {
            clay_api_url: "https://api.test.com".to_string(),
            request_timeout: 10,
            ..Config::default()
        };
        let client = ClayClient::new(&config);
        let async_client = AsyncClayClientImpl::new(client);

        // Should be able to clone
        let _cloned = async_client.clone();
    }

    #[tokio::test]
    async fn test_async_client_connection_failure() {
        // Nothing listens on port 9 of the loopback interface
        let client = ClayClient::with_base_url("http://127.0.0.1:9".to_string());
        let async_client = AsyncClayClientImpl::new(client);

        let result = async_client
            .post_json("/search", serde_json::json!({}), None)
            .await;
        assert!(result.is_err());
    }
}
