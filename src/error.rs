//! Error types for the Clay MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when calling the Clay tools API.
///
/// Only transport-level failures end up here. A response with an error status
/// is still a response and is handed back to the caller untouched.
#[derive(Error, Debug)]
pub enum ClayApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Response body could not be read
    #[error("Failed to read response body: {0}")]
    BodyError(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Tool arguments that do not match the tool's parameter schema.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("Invalid arguments for {tool}: {reason}")]
pub struct ValidationError {
    /// Tool whose schema rejected the arguments
    pub tool: String,

    /// Fields that are missing or carry the wrong type
    pub fields: Vec<String>,

    /// Deserializer message
    pub reason: String,
}

/// Errors raised while building the tool registry.
#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    /// Two definitions share a name
    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),
}

/// Errors that can occur while dispatching a tool call.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No tool with this name is registered
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments failed schema validation; nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The outbound call failed
    #[error(transparent)]
    Api(#[from] ClayApiError),
}

/// Convenience type alias for Results with ClayApiError
pub type ClayApiResult<T> = Result<T, ClayApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with DispatchError
pub type DispatchResult<T> = Result<T, DispatchError>;
