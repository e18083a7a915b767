//! Storage layer for todo items.
//!
//! This module provides trait-based abstractions for data access so the
//! service and transport layers never see the concrete backend.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Todo, NewTodo, TodoPatch)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed SQLite implementation

mod error;
mod models;
mod repository;
pub mod sqlite;


pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
