//! Domain models for the todo store.
//!
//! These models are storage-agnostic. Wire formats (HTTP, MCP) live with
//! their transports and convert from these explicitly.

/// Store-assigned integer identifier. Never reused once deleted.
pub type TodoId = i64;

/// A todo item as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub content: String,
    pub completed: bool,
}

/// Input for inserting a new todo. `completed` always starts out false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub content: String,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub content: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.completed.is_none()
    }
}
