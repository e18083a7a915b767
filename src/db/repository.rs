//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//! Every method is a single atomic unit against the store.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{NewTodo, Todo, TodoId, TodoPatch},
};

/// Repository for Todo operations.
pub trait TodoRepository: Send + Sync {
    /// Insert a new todo and return it with its assigned id.
    fn create(&self, todo: &NewTodo) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Get a todo by id.
    fn get(&self, id: TodoId) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Get all todos, ordered by id.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Todo>>> + Send;

    /// Apply a partial update and return the stored result.
    fn update(&self, id: TodoId, patch: &TodoPatch)
    -> impl Future<Output = DbResult<Todo>> + Send;

    /// Delete a todo by id.
    fn delete(&self, id: TodoId) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Todos<'a>: TodoRepository
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the todo repository.
    fn todos(&self) -> Self::Todos<'_>;
}
