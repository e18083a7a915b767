//! MCP tool implementations
//!
//! One tool per CRUD operation, named after the operation's stable id.

mod todos;


pub use todos::{CreateTodoParams, DeleteTodoParams, GetTodoParams, UpdateTodoParams};

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;
use serde_json::json;

use crate::service::ServiceError;

/// Map service errors to MCP error codes.
pub(crate) fn map_service_error(err: ServiceError) -> McpError {
    match err {
        ServiceError::Validation { message } => McpError::invalid_params(message, None),
        e @ ServiceError::NotFound { id } => {
            McpError::resource_not_found(e.to_string(), Some(json!({ "todo_id": id })))
        }
        ServiceError::StoreUnavailable { .. } => {
            McpError::internal_error("Store unavailable", None)
        }
    }
}

/// Successful tool result carrying pretty-printed JSON.
pub(crate) fn json_content<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
