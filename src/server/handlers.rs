//! MCP request handlers for the Clay server.
//!
//! The tool list is built once from the registry; every `tools/call` is handed
//! to the [`ToolDispatcher`] together with the connection's [`Session`].

use crate::auth::{Authenticator, Session};
use crate::dispatcher::{ToolCall, ToolDispatcher};
use crate::error::DispatchError;
use axum::http::request::Parts;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

/// The Clay MCP server.
///
/// Clones share the session cell; use [`ClayMcpServer::for_new_connection`] to
/// get an instance for another connection.
#[derive(Clone)]
pub struct ClayMcpServer {
    dispatcher: ToolDispatcher,
    authenticator: Authenticator,
    tools: Arc<Vec<Tool>>,
    session: Arc<OnceLock<Session>>,
}

impl ServerHandler for ClayMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "Clay".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for Clay - search, create, and update contacts, groups, and notes in your network.".into()),
        }
    }

    async fn initialize(
        &self,
        request: InitializeRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        if context.peer.peer_info().is_none() {
            context.peer.set_peer_info(request);
        }
        self.resolve_session(&context);
        Ok(self.get_info())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tools.as_ref().clone(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let session = self.resolve_session(&context);

        let call = ToolCall::new(request.name.as_ref(), request.arguments, Some(session));
        let response = self.dispatcher.dispatch(call).await.map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(response)]))
    }
}

impl ClayMcpServer {
    /// Create a new Clay MCP server.
    pub fn new(dispatcher: ToolDispatcher, authenticator: Authenticator) -> Self {
        let tools = Arc::new(dispatcher.registry().tools());

        Self {
            dispatcher,
            authenticator,
            tools,
            session: Arc::new(OnceLock::new()),
        }
    }

    /// A copy sharing tools and dispatcher but with no session resolved yet.
    pub fn for_new_connection(&self) -> Self {
        Self {
            session: Arc::new(OnceLock::new()),
            ..self.clone()
        }
    }

    /// Session of this connection, if one has been resolved.
    pub fn session(&self) -> Option<&Session> {
        self.session.get()
    }

    /// Tool list advertised to clients.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Resolve the connection's session on first use and keep it.
    ///
    /// HTTP transports attach the request parts to the context; stdio has none
    /// and always gets the default key.
    fn resolve_session(&self, context: &RequestContext<RoleServer>) -> &Session {
        self.session.get_or_init(|| {
            let url = context
                .extensions
                .get::<Parts>()
                .map(|parts| parts.uri.to_string());
            self.authenticator.authenticate(url.as_deref())
        })
    }
}

// Helper function to convert dispatch errors to MCP errors
fn to_mcp_error(e: DispatchError) -> McpError {
    match e {
        DispatchError::UnknownTool(_) => McpError::invalid_params(e.to_string(), None),
        DispatchError::Validation(ref validation) => {
            McpError::invalid_params(e.to_string(), serde_json::to_value(validation).ok())
        }
        DispatchError::Api(_) => McpError {
            code: ErrorCode::INTERNAL_ERROR,
            message: Cow::from(e.to_string()),
            data: None,
        },
    }
}
