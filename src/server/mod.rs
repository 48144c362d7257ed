//! MCP server implementation for Clay.
//!
//! This module provides the MCP protocol server that exposes the Clay tools
//! to AI assistants over stdio or streamable HTTP.

pub mod handlers;

pub use handlers::ClayMcpServer;

use crate::config::{Config, TransportMode};
use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::StreamableHttpService;
use rmcp::ServiceExt;
use tracing::info;

/// Path the MCP endpoint is mounted at for the HTTP transport.
pub const MCP_ENDPOINT: &str = "/mcp";

/// Run the server on the transport selected in `config`.
pub async fn run(server: ClayMcpServer, config: &Config) -> Result<()> {
    match config.transport {
        TransportMode::Stdio => run_server(server).await,
        TransportMode::Http => run_http_server(server, &config.bind_address()).await,
    }
}

/// Run the Clay MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: ClayMcpServer) -> Result<()> {
    info!("Starting MCP server with stdio transport");

    // Serve the server with stdio transport
    let service = server.serve(stdio()).await?;

    // Wait for completion
    service.waiting().await?;

    Ok(())
}

/// Run the Clay MCP server with streamable HTTP transport.
///
/// Each MCP session gets its own handler instance, so a `clayApiKey` supplied
/// on one connection never leaks into another.
pub async fn run_http_server(server: ClayMcpServer, bind_address: &str) -> Result<()> {
    let service = StreamableHttpService::new(
        move || Ok(server.for_new_connection()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = router(service);

    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    info!(
        "Starting MCP server with HTTP transport on http://{}{}",
        bind_address, MCP_ENDPOINT
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

fn router(service: StreamableHttpService<ClayMcpServer, LocalSessionManager>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest_service(MCP_ENDPOINT, service)
}

async fn health() -> &'static str {
    "✓ Ok"
}
