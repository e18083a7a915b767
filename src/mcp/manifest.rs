//! JSON manifest of the CRUD operations.
//!
//! A plain-JSON alternative to the MCP tool list for clients that only speak
//! HTTP. Generated from [`OPERATIONS`], with input schemas taken from the
//! tool parameter types and output schemas from the wire todo type.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::tools::{CreateTodoParams, DeleteTodoParams, GetTodoParams, UpdateTodoParams};
use crate::api::TodoResponse;
use crate::api::operations::{OPERATIONS, Operation, OperationId};

/// The full discovery document.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub operations: Vec<ManifestOperation>,
}

/// One discoverable operation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ManifestOperation {
    pub operation_id: String,
    pub method: String,
    pub path: String,
    pub description: String,
    pub success_status: u16,
    pub input_schema: Value,
    /// `null` when the operation returns no body.
    pub output_schema: Value,
}

fn schema_of<T: JsonSchema>() -> Value {
    serde_json::to_value(schemars::schema_for!(T)).unwrap_or(Value::Null)
}

fn input_schema(id: OperationId) -> Value {
    match id {
        OperationId::GetAllTodos => json!({ "type": "object", "properties": {} }),
        OperationId::GetTodo => schema_of::<GetTodoParams>(),
        OperationId::CreateTodo => schema_of::<CreateTodoParams>(),
        OperationId::UpdateTodo => schema_of::<UpdateTodoParams>(),
        OperationId::DeleteTodo => schema_of::<DeleteTodoParams>(),
    }
}

fn output_schema(id: OperationId) -> Value {
    match id {
        OperationId::GetAllTodos => schema_of::<Vec<TodoResponse>>(),
        OperationId::GetTodo | OperationId::CreateTodo | OperationId::UpdateTodo => {
            schema_of::<TodoResponse>()
        }
        OperationId::DeleteTodo => Value::Null,
    }
}

impl From<&Operation> for ManifestOperation {
    fn from(op: &Operation) -> Self {
        Self {
            operation_id: op.id.as_str().to_string(),
            method: op.method.as_str().to_string(),
            path: op.path.to_string(),
            description: op.description.to_string(),
            success_status: op.success_status.as_u16(),
            input_schema: input_schema(op.id),
            output_schema: output_schema(op.id),
        }
    }
}

/// Build the manifest for every entry of the operation table.
pub fn manifest() -> Manifest {
    Manifest {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        operations: OPERATIONS.iter().map(ManifestOperation::from).collect(),
    }
}
