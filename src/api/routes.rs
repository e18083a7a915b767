//! API route configuration.

use axum::Router;
use axum::routing::{MethodRouter, get, on};
use tokio_util::sync::CancellationToken;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateTodoRequest, ErrorResponse, HealthResponse, TodoResponse, UpdateTodoRequest,
    WelcomeResponse,
};
use super::operations::{OPERATIONS, Operation, OperationId};
use super::state::AppState;
use crate::db::Database;
use crate::mcp::create_mcp_service;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo List API",
        version = "0.1.0",
        description = "CRUD API for todo items with tool discovery for agents",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::get_all_todos,
        handlers::get_todo,
        handlers::create_todo,
        handlers::update_todo,
        handlers::delete_todo,
    ),
    components(
        schemas(
            WelcomeResponse,
            HealthResponse,
            TodoResponse,
            CreateTodoRequest,
            UpdateTodoRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "todos", description = "Todo item management endpoints")
    )
)]
pub struct ApiDoc;

/// Handler for one entry of the operation table.
fn operation_route<D: Database + 'static>(op: &Operation) -> MethodRouter<AppState<D>> {
    let filter = op.method.filter();
    match op.id {
        OperationId::GetAllTodos => on(filter, handlers::get_all_todos::<D>),
        OperationId::GetTodo => on(filter, handlers::get_todo::<D>),
        OperationId::CreateTodo => on(filter, handlers::create_todo::<D>),
        OperationId::UpdateTodo => on(filter, handlers::update_todo::<D>),
        OperationId::DeleteTodo => on(filter, handlers::delete_todo::<D>),
    }
}

/// CRUD routes, registered from the operation table.
///
/// Entries sharing a path are merged into one method router by axum.
pub fn todo_routes<D: Database + 'static>() -> Router<AppState<D>> {
    OPERATIONS.iter().fold(Router::new(), |router, op| {
        router.route(op.path, operation_route::<D>(op))
    })
}

/// Create the API router.
///
/// Mounts the CRUD routes, the MCP endpoint at `/mcp`, the discovery manifest
/// and, when `enable_docs` is set, the Scalar docs page at `/docs`.
pub fn create_router<D: Database + 'static>(
    state: AppState<D>,
    enable_docs: bool,
    ct: CancellationToken,
) -> Router {
    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/manifest", get(handlers::discovery_manifest));

    let mcp_service = create_mcp_service(state.service().clone(), ct);

    let mut router = system_routes
        .merge(todo_routes::<D>())
        .nest_service("/mcp", mcp_service);

    if enable_docs {
        router = router.merge(Scalar::with_url("/docs", ApiDoc::openapi()));
    }

    router.with_state(state)
}
