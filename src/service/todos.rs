//! Todo service operations.

use std::sync::Arc;

use tracing::{info, instrument};

use super::error::{ServiceError, ServiceResult};
use crate::db::{Database, NewTodo, Todo, TodoId, TodoPatch, TodoRepository};

/// Service layer for todo items.
///
/// Generic over `D: Database`; cheap to clone (shares the database handle).
pub struct TodoService<D: Database> {
    db: Arc<D>,
}

// Manual Clone impl - only the Arc needs cloning, not D
impl<D: Database> Clone for TodoService<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> TodoService<D> {
    pub fn new(db: impl Into<Arc<D>>) -> Self {
        Self { db: db.into() }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// All todos, ordered by id. Empty when the store is empty.
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<Todo>> {
        Ok(self.db.todos().list().await?)
    }

    /// A single todo by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: TodoId) -> ServiceResult<Todo> {
        Ok(self.db.todos().get(id).await?)
    }

    /// Create a todo. `content` must be present; an empty string is valid.
    #[instrument(skip(self, content))]
    pub async fn create(&self, content: Option<String>) -> ServiceResult<Todo> {
        let content = content.ok_or_else(|| ServiceError::missing_field("content"))?;

        let created = self.db.todos().create(&NewTodo { content }).await?;
        info!(todo_id = created.id, "Created todo");
        Ok(created)
    }

    /// Apply the supplied fields. An empty patch returns the item unchanged.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: TodoId, patch: TodoPatch) -> ServiceResult<Todo> {
        let noop = patch.is_empty();
        let updated = self.db.todos().update(id, &patch).await?;
        if !noop {
            info!(todo_id = id, "Updated todo");
        }
        Ok(updated)
    }

    /// Delete a todo. Deleting an id twice is NotFound the second time.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: TodoId) -> ServiceResult<()> {
        self.db.todos().delete(id).await?;
        info!(todo_id = id, "Deleted todo");
        Ok(())
    }
}
