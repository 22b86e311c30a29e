//! MCP server integration (streamable HTTP + stdio) for the market tools.
//!
//! - Advertises the four tools with their exact JSON-Schema inputs
//! - Routes `tools/call` through `ToolDispatcher`, always answering with text
//! - Built once at boot around an injected `MarketBackend`

use std::sync::Arc;

use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler,
};

use crate::clients::ClobRemote;
use crate::core::backend::MarketBackend;
use crate::core::error::BackendError;
use crate::core::mcp::SERVER_NAME;
use crate::infra::config::AppConfig;
use crate::tools::{catalog, ToolDispatcher, ToolMeta};

/// The MCP server handler.
#[derive(Clone)]
pub struct MarketSvc {
    dispatcher: ToolDispatcher,
}

impl MarketSvc {
    pub fn new(backend: Arc<dyn MarketBackend>) -> Self {
        Self {
            dispatcher: ToolDispatcher::new(backend),
        }
    }

    /// Handler backed by the CLOB client described in `cfg`.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, BackendError> {
        let backend = ClobRemote::from_config(&cfg.backend)?;
        tracing::info!(host = %backend.base_url(), "CLOB backend configured");
        Ok(Self::new(Arc::new(backend)))
    }

    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    pub async fn call(&self, name: &str, arguments: Option<&JsonObject>) -> CallToolResult {
        let resp = self.dispatcher.dispatch(name, arguments).await;
        CallToolResult::success(resp.content.into_iter().map(Content::from).collect())
    }

    pub fn tools(&self) -> Vec<rmcp::model::Tool> {
        catalog().iter().map(ToolMeta::to_mcp_tool).collect()
    }
}

impl ServerHandler for MarketSvc {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Read-only Polymarket market data: market info, market listings, current prices and recent price history."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.call(&request.name, request.arguments.as_ref()).await)
    }
}
