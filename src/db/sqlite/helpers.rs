//! Shared helper functions for the SQLite backend.

use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;

use crate::db::{DbError, DbResult};

/// Build connect options from a store connection string.
///
/// `sqlite:` URLs are parsed by sqlx. Anything with another `scheme://`
/// prefix is rejected. Everything else is treated as a file path.
pub fn connect_options(url: &str) -> DbResult<SqliteConnectOptions> {
    let url = url.trim();
    if url.is_empty() {
        return Err(DbError::Connection {
            message: "store connection string is empty".to_string(),
        });
    }

    if url.starts_with("sqlite:") {
        let options = SqliteConnectOptions::from_str(url).map_err(|e| DbError::Connection {
            message: e.to_string(),
        })?;
        return Ok(options.create_if_missing(true));
    }

    if let Some((scheme, _)) = url.split_once("://") {
        return Err(DbError::Connection {
            message: format!("unsupported store scheme '{}'", scheme),
        });
    }

    Ok(SqliteConnectOptions::new()
        .filename(url)
        .create_if_missing(true))
}

/// True for connection strings naming a private in-memory database.
pub fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_) => DbError::Connection {
                message: e.to_string(),
            },
            _ => DbError::Database {
                message: e.to_string(),
            },
        }
    }
}
