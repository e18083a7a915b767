//! SQLite TodoRepository implementation.

use sqlx::{FromRow, SqlitePool};

use crate::db::{DbError, DbResult, NewTodo, Todo, TodoId, TodoPatch, TodoRepository};

/// Row shape of the `todos` table.
#[derive(Debug, FromRow)]
struct TodoRow {
    todo_id: i64,
    content: String,
    completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.todo_id,
            content: row.content,
            completed: row.completed,
        }
    }
}

/// SQLx-backed todo repository.
///
/// Every operation runs inside its own transaction. If anything fails before
/// `commit`, dropping the transaction rolls it back and hands the
/// connection back to the pool.
pub struct SqliteTodoRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl TodoRepository for SqliteTodoRepository<'_> {
    async fn create(&self, todo: &NewTodo) -> DbResult<Todo> {
        let mut tx = self.pool.begin().await?;

        let row: TodoRow = sqlx::query_as(
            "INSERT INTO todos (content, completed) VALUES (?, 0) \
             RETURNING todo_id, content, completed",
        )
        .bind(&todo.content)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.into())
    }

    async fn get(&self, id: TodoId) -> DbResult<Todo> {
        let mut tx = self.pool.begin().await?;

        let row: Option<TodoRow> =
            sqlx::query_as("SELECT todo_id, content, completed FROM todos WHERE todo_id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let row = row.ok_or_else(|| DbError::todo_not_found(id))?;
        tx.commit().await?;
        Ok(row.into())
    }

    async fn list(&self) -> DbResult<Vec<Todo>> {
        let mut tx = self.pool.begin().await?;

        let rows: Vec<TodoRow> =
            sqlx::query_as("SELECT todo_id, content, completed FROM todos ORDER BY todo_id ASC")
                .fetch_all(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn update(&self, id: TodoId, patch: &TodoPatch) -> DbResult<Todo> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut tx = self.pool.begin().await?;

        // NULL binds keep the stored value
        let row: Option<TodoRow> = sqlx::query_as(
            "UPDATE todos SET content = COALESCE(?, content), completed = COALESCE(?, completed) \
             WHERE todo_id = ? RETURNING todo_id, content, completed",
        )
        .bind(patch.content.as_deref())
        .bind(patch.completed)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let row = row.ok_or_else(|| DbError::todo_not_found(id))?;
        tx.commit().await?;
        Ok(row.into())
    }

    async fn delete(&self, id: TodoId) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM todos WHERE todo_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::todo_not_found(id));
        }

        tx.commit().await?;
        Ok(())
    }
}
