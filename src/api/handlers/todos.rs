//! Todo CRUD handlers.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::{ErrorResponse, RequestError};
use crate::api::AppState;
use crate::db::{Database, Todo, TodoId, TodoPatch};

// =============================================================================
// DTOs
// =============================================================================

/// Wire form of a todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct TodoResponse {
    #[schema(example = 1)]
    pub todo_id: TodoId,
    #[schema(example = "buy milk")]
    pub content: String,
    #[schema(example = false)]
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            todo_id: t.id,
            content: t.content,
            completed: t.completed,
        }
    }
}

impl From<TodoResponse> for Todo {
    fn from(r: TodoResponse) -> Self {
        Self {
            id: r.todo_id,
            content: r.content,
            completed: r.completed,
        }
    }
}

/// Body of `POST /todos`.
///
/// `content` decodes as optional so the service can report a missing field
/// as a validation error rather than a decode failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    #[schema(required = true, example = "buy milk")]
    pub content: Option<String>,
}

/// Body of `PUT /todos/{todo_id}`. Null or absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    #[schema(example = "buy oat milk")]
    pub content: Option<String>,
    #[schema(example = true)]
    pub completed: Option<bool>,
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(req: UpdateTodoRequest) -> Self {
        Self {
            content: req.content,
            completed: req.completed,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all todos
#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    operation_id = "get_all_todos",
    responses(
        (status = 200, description = "All todo items ordered by id", body = Vec<TodoResponse>),
        (status = 503, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_all_todos<D: Database + 'static>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<TodoResponse>>, RequestError> {
    let todos = state.service().list().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Get a todo by id
#[utoipa::path(
    get,
    path = "/todos/{todo_id}",
    tag = "todos",
    operation_id = "get_todo",
    params(("todo_id" = i64, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Todo found", body = TodoResponse),
        (status = 400, description = "Invalid todo id", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn get_todo<D: Database + 'static>(
    State(state): State<AppState<D>>,
    path: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<TodoResponse>, RequestError> {
    let Path(id) = path?;
    let todo = state.service().get(id).await?;
    Ok(Json(todo.into()))
}

/// Create a new todo
#[utoipa::path(
    post,
    path = "/todos",
    tag = "todos",
    operation_id = "create_todo",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = TodoResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_todo<D: Database + 'static>(
    State(state): State<AppState<D>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoResponse>), RequestError> {
    let Json(req) = payload?;
    let todo = state.service().create(req.content).await?;
    Ok((StatusCode::CREATED, Json(todo.into())))
}

/// Update a todo
///
/// Only the supplied fields change; an empty body returns the item unchanged.
#[utoipa::path(
    put,
    path = "/todos/{todo_id}",
    tag = "todos",
    operation_id = "update_todo",
    params(("todo_id" = i64, Path, description = "Todo ID")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = TodoResponse),
        (status = 400, description = "Malformed body or invalid todo id", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state, path, payload))]
pub async fn update_todo<D: Database + 'static>(
    State(state): State<AppState<D>>,
    path: Result<Path<TodoId>, PathRejection>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<TodoResponse>, RequestError> {
    let Path(id) = path?;
    let Json(req) = payload?;
    let todo = state.service().update(id, req.into()).await?;
    Ok(Json(todo.into()))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/todos/{todo_id}",
    tag = "todos",
    operation_id = "delete_todo",
    params(("todo_id" = i64, Path, description = "Todo ID")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, description = "Invalid todo id", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn delete_todo<D: Database + 'static>(
    State(state): State<AppState<D>>,
    path: Result<Path<TodoId>, PathRejection>,
) -> Result<StatusCode, RequestError> {
    let Path(id) = path?;
    state.service().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
