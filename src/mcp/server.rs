//! MCP server implementation

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::db::Database;
use crate::service::TodoService;

/// MCP server exposing the todo operations as tools.
///
/// Generic over `D: Database`; the tools live in [`super::tools`].
pub struct McpServer<D: Database> {
    service: TodoService<D>,
    tool_router: ToolRouter<Self>,
}

// Manual Clone impl - D itself is never cloned
impl<D: Database + 'static> Clone for McpServer<D> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            tool_router: Self::tool_router(),
        }
    }
}

impl<D: Database + 'static> McpServer<D> {
    /// Create a new MCP server over the given service.
    pub fn new(service: TodoService<D>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    pub(crate) fn service(&self) -> &TodoService<D> {
        &self.service
    }

    /// Get the tool router for this server
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }
}

#[tool_handler]
impl<D: Database + 'static> ServerHandler for McpServer<D> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_instructions("Todo MCP Server - List, read, create, update and delete todo items")
    }
}
