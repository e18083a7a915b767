//! The CRUD operation table.
//!
//! Single list of the five todo operations. The HTTP router registers its
//! routes from it and the discovery adapters (`/manifest`, MCP tool list)
//! describe exactly these entries, so the surfaces cannot drift apart.
//! Non-CRUD routes (`/`, `/health`, `/docs`, `/manifest`) are never listed.

use std::fmt;

use axum::http::StatusCode;
use axum::routing::MethodFilter;

/// One-line description of an operation, by its stable name.
///
/// Expands to a string literal so it can also serve as an MCP tool's doc
/// attribute, which the tool macro reads as the tool description.
macro_rules! operation_description {
    (get_all_todos) => {
        "Retrieve all todo items"
    };
    (get_todo) => {
        "Retrieve a single todo item by its ID"
    };
    (create_todo) => {
        "Create a new todo item"
    };
    (update_todo) => {
        "Update an existing todo item; omitted fields are left unchanged"
    };
    (delete_todo) => {
        "Delete a todo item by its ID"
    };
}

pub(crate) use operation_description;

/// Stable operation identifiers, shared with MCP tool names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationId {
    GetAllTodos,
    GetTodo,
    CreateTodo,
    UpdateTodo,
    DeleteTodo,
}

impl OperationId {
    pub const fn as_str(self) -> &'static str {
        match self {
            OperationId::GetAllTodos => "get_all_todos",
            OperationId::GetTodo => "get_todo",
            OperationId::CreateTodo => "create_todo",
            OperationId::UpdateTodo => "update_todo",
            OperationId::DeleteTodo => "delete_todo",
        }
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP methods used by the CRUD routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Router filter for this method.
    pub fn filter(self) -> MethodFilter {
        match self {
            HttpMethod::Get => MethodFilter::GET,
            HttpMethod::Post => MethodFilter::POST,
            HttpMethod::Put => MethodFilter::PUT,
            HttpMethod::Delete => MethodFilter::DELETE,
        }
    }
}

/// One CRUD operation.
#[derive(Debug)]
pub struct Operation {
    pub id: OperationId,
    pub method: HttpMethod,
    /// Axum path template; the item id segment is `{todo_id}`.
    pub path: &'static str,
    pub success_status: StatusCode,
    pub description: &'static str,
}

pub static OPERATIONS: [Operation; 5] = [
    Operation {
        id: OperationId::GetAllTodos,
        method: HttpMethod::Get,
        path: "/todos",
        success_status: StatusCode::OK,
        description: operation_description!(get_all_todos),
    },
    Operation {
        id: OperationId::GetTodo,
        method: HttpMethod::Get,
        path: "/todos/{todo_id}",
        success_status: StatusCode::OK,
        description: operation_description!(get_todo),
    },
    Operation {
        id: OperationId::CreateTodo,
        method: HttpMethod::Post,
        path: "/todos",
        success_status: StatusCode::CREATED,
        description: operation_description!(create_todo),
    },
    Operation {
        id: OperationId::UpdateTodo,
        method: HttpMethod::Put,
        path: "/todos/{todo_id}",
        success_status: StatusCode::OK,
        description: operation_description!(update_todo),
    },
    Operation {
        id: OperationId::DeleteTodo,
        method: HttpMethod::Delete,
        path: "/todos/{todo_id}",
        success_status: StatusCode::NO_CONTENT,
        description: operation_description!(delete_todo),
    },
];

/// Look up an operation by its stable name.
pub fn find(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.id.as_str() == name)
}
