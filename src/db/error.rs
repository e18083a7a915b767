//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(todos::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(todos::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(todos::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(todos::db::connection_error),
        help("Check the store connection string, e.g. sqlite://todos.db or ./todos.db")
    )]
    Connection { message: String },
}

impl DbError {
    /// Shorthand for a missing todo row.
    pub fn todo_not_found(id: i64) -> Self {
        DbError::NotFound {
            entity_type: "Todo".to_string(),
            id: id.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
