//! Clay MCP Server - Main entry point
//!
//! This is the main executable for the Clay MCP Server, which provides a Model Context
//! Protocol (MCP) interface to the Clay contact network.

use anyhow::{Context, Result};
use clay_mcp_server::client::{AsyncClayClient, AsyncClayClientImpl};
use clay_mcp_server::{
    Authenticator, ClayClient, ClayMcpServer, Config, Metrics, ToolDispatcher, ToolRegistry,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Clay MCP Server with API URL: {}", config.clay_api_url);
    if config.clay_api_key.is_empty() {
        info!("CLAY_API_KEY is not set; connections must supply clayApiKey");
    }

    let metrics = Metrics::new();

    // Initialize Clay client
    let sync_client = ClayClient::new(&config).with_metrics(metrics.clone());
    let client = Arc::new(AsyncClayClientImpl::new(sync_client)) as Arc<dyn AsyncClayClient>;

    let registry = Arc::new(ToolRegistry::clay()?);
    info!("Registered {} tools", registry.len());

    let dispatcher = ToolDispatcher::new(registry, client).with_metrics(metrics.clone());
    let authenticator = Authenticator::new(&config);
    let server = ClayMcpServer::new(dispatcher, authenticator);

    // Run the server (this will block until the server exits)
    clay_mcp_server::server::run(server, &config).await?;

    let summary = metrics.summary();
    info!(
        tool_calls = summary.tool_calls_total,
        rejected = summary.validation_failures_total,
        http_requests = summary.http_requests_total,
        http_errors = summary.http_errors_total,
        avg_ms = summary.http_duration_avg_ms,
        "Clay MCP Server shutdown complete"
    );
    Ok(())
}
