//! Todo tool implementations

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{json_content, map_service_error};
use crate::api::TodoResponse;
use crate::api::operations::operation_description;
use crate::db::{Database, TodoId, TodoPatch};
use crate::mcp::McpServer;

// Parameter types for tools
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTodoParams {
    #[schemars(description = "Todo ID")]
    pub todo_id: TodoId,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateTodoParams {
    #[schemars(description = "Todo text (may be empty)")]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTodoParams {
    #[schemars(description = "Todo ID")]
    pub todo_id: TodoId,
    #[schemars(description = "New text; omit to keep the current text")]
    pub content: Option<String>,
    #[schemars(description = "New completion flag; omit to keep the current value")]
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTodoParams {
    #[schemars(description = "Todo ID to delete")]
    pub todo_id: TodoId,
}

#[tool_router(vis = "pub(crate)")]
impl<D: Database + 'static> McpServer<D> {
    #[tool]
    #[doc = operation_description!(get_all_todos)]
    pub async fn get_all_todos(&self) -> Result<CallToolResult, McpError> {
        let todos = self
            .service()
            .list()
            .await
            .map_err(map_service_error)?;
        let todos: Vec<TodoResponse> = todos.into_iter().map(TodoResponse::from).collect();
        json_content(&todos)
    }

    #[tool]
    #[doc = operation_description!(get_todo)]
    pub async fn get_todo(
        &self,
        params: Parameters<GetTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        let todo = self
            .service()
            .get(params.0.todo_id)
            .await
            .map_err(map_service_error)?;
        json_content(&TodoResponse::from(todo))
    }

    #[tool]
    #[doc = operation_description!(create_todo)]
    pub async fn create_todo(
        &self,
        params: Parameters<CreateTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        let todo = self
            .service()
            .create(Some(params.0.content))
            .await
            .map_err(map_service_error)?;
        json_content(&TodoResponse::from(todo))
    }

    #[tool]
    #[doc = operation_description!(update_todo)]
    pub async fn update_todo(
        &self,
        params: Parameters<UpdateTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        let Parameters(UpdateTodoParams {
            todo_id,
            content,
            completed,
        }) = params;
        let todo = self
            .service()
            .update(todo_id, TodoPatch { content, completed })
            .await
            .map_err(map_service_error)?;
        json_content(&TodoResponse::from(todo))
    }

    #[tool]
    #[doc = operation_description!(delete_todo)]
    pub async fn delete_todo(
        &self,
        params: Parameters<DeleteTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        let todo_id = params.0.todo_id;
        self.service()
            .delete(todo_id)
            .await
            .map_err(map_service_error)?;
        json_content(&json!({
            "success": true,
            "message": format!("Deleted todo {}", todo_id)
        }))
    }
}
