//! Tool dispatch: validate one invocation and forward it to the backend.
//!
//! Each call is independent. The dispatcher holds only read-only state (the
//! registry and the client), so any number of calls may be in flight at once.

use crate::auth::Session;
use crate::client::AsyncClayClient;
use crate::error::{DispatchError, DispatchResult};
use crate::metrics::Metrics;
use crate::tools::ToolRegistry;
use rmcp::model::JsonObject;
use std::sync::Arc;

/// One tool invocation.
#[derive(Debug, Clone)]
pub struct ToolCall<'a> {
    /// Registered tool name
    pub name: &'a str,

    /// Raw arguments as sent by the client; absent means `{}`
    pub arguments: Option<JsonObject>,

    /// Session of the calling connection
    pub session: Option<&'a Session>,
}

impl<'a> ToolCall<'a> {
    pub fn new(name: &'a str, arguments: Option<JsonObject>, session: Option<&'a Session>) -> Self {
        Self {
            name,
            arguments,
            session,
        }
    }
}

/// Routes validated tool calls to the Clay tools API.
#[derive(Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
    client: Arc<dyn AsyncClayClient>,
    metrics: Metrics,
}

impl ToolDispatcher {
    pub fn new(registry: Arc<ToolRegistry>, client: Arc<dyn AsyncClayClient>) -> Self {
        Self {
            registry,
            client,
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Validate `call` and perform exactly one outbound request.
    ///
    /// Invalid arguments are rejected before anything is sent. The response body
    /// is returned as-is whatever the backend's status; transport failures are
    /// returned as [`DispatchError::Api`] without retrying.
    pub async fn dispatch(&self, call: ToolCall<'_>) -> DispatchResult<String> {
        self.metrics.record_tool_call();

        let definition = self
            .registry
            .get(call.name)
            .ok_or_else(|| DispatchError::UnknownTool(call.name.to_string()))?;

        let body = definition
            .validate(call.arguments.unwrap_or_default())
            .map_err(|e| {
                self.metrics.record_validation_failure();
                tracing::warn!(tool = definition.name(), fields = ?e.fields, "Rejected tool call: {}", e.reason);
                e
            })?;

        let authorization = if definition.requires_session() {
            if call.session.is_none() {
                tracing::debug!(tool = definition.name(), "No session for tool call, sending without credentials");
            }
            call.session.map(Session::authorization)
        } else {
            None
        };

        tracing::info!(tool = definition.name(), path = definition.path(), "Calling tool");

        let response = self
            .client
            .post_json(definition.path(), body, authorization)
            .await
            .map_err(|e| {
                tracing::error!(tool = definition.name(), "Tool call failed: {}", e);
                e
            })?;

        Ok(response)
    }
}
