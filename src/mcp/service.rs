//! MCP Streamable HTTP service creation

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::db::Database;
use crate::service::TodoService;

use super::server::McpServer;

/// Create MCP Streamable HTTP service
///
/// The returned service can be nested into an Axum router:
///
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use todos::db::SqliteDatabase;
/// # use todos::mcp::create_mcp_service;
/// # use todos::service::TodoService;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let db = SqliteDatabase::in_memory().await?;
///
/// let ct = CancellationToken::new();
/// let mcp_service = create_mcp_service(TodoService::new(db), ct);
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service<D: Database + 'static>(
    service: TodoService<D>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<D>, LocalSessionManager> {
    // Service factory: creates new McpServer instance per session
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<McpServer<D>, std::io::Error> {
        Ok(McpServer::new(service.clone()))
    };

    let config = StreamableHttpServerConfig::default()
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
