//! Clay MCP Server - A Rust implementation of the Model Context Protocol server for Clay.
//!
//! This library exposes the Clay tools API as MCP tools so AI assistants can
//! search, create, and update contacts, groups, and notes. Every tool call is
//! validated locally and forwarded as a single `POST`; the backend's response
//! is returned untouched.
//!
//! # Architecture
//!
//! - **config**: Configuration management from environment variables
//! - **auth**: Per-connection credential resolution
//! - **tools**: Parameter schemas, tool catalog and registry
//! - **dispatcher**: Validation and forwarding of tool calls
//! - **client**: HTTP client for the Clay tools API
//! - **server**: MCP protocol server (stdio and streamable HTTP)
//! - **metrics**: Counters for calls, rejections and HTTP timing
//! - **error**: Custom error types for precise error handling

pub mod auth;
pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod metrics;
pub mod server;
pub mod tools;

pub use auth::{Authenticator, Session};
pub use client::ClayClient;
pub use config::{Config, TransportMode};
pub use dispatcher::{ToolCall, ToolDispatcher};
pub use error::{ClayApiError, ConfigError, DispatchError, RegistryError, ValidationError};
pub use metrics::{Metrics, MetricsSummary};
pub use server::ClayMcpServer;
pub use tools::{ToolDefinition, ToolRegistry};
