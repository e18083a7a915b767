//! SQLite connection pool and migration management.

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, info};

use super::helpers::{connect_options, is_in_memory};
use super::todo::SqliteTodoRepository;
use crate::db::{Database, DbError, DbResult};

/// Upper bound on pooled connections for file-backed stores.
const MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a pooled connection before giving up.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite database implementation.
///
/// Wraps a connection pool. Repositories borrow the pool and check a
/// connection out per operation; the connection goes back on drop.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Connect using a store connection string.
    ///
    /// Accepts `sqlite:` URLs (`sqlite://todos.db`, `sqlite::memory:`) or a
    /// plain file path. Other URL schemes are rejected.
    pub async fn connect(url: &str) -> DbResult<Self> {
        let options = connect_options(url)?;
        let pool_options = if is_in_memory(url) {
            memory_pool_options()
        } else {
            SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
        };
        debug!(url, "Connecting to store");
        Self::with_options(options, pool_options).await
    }

    /// Open a database file at the given path, creating it if missing.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::with_options(
            options,
            SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS),
        )
        .await
    }

    /// Create an in-memory database (useful for testing).
    pub async fn in_memory() -> DbResult<Self> {
        Self::connect("sqlite::memory:").await
    }

    async fn with_options(
        options: SqliteConnectOptions,
        pool_options: SqlitePoolOptions,
    ) -> DbResult<Self> {
        let pool = pool_options
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    /// Direct access to the pool, for tests and diagnostics.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection. Later operations fail with a
    /// connection error.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

// Every in-memory connection is its own database, so the pool must hold
// exactly one connection and never recycle it.
fn memory_pool_options() -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
}

impl Database for SqliteDatabase {
    type Todos<'a> = SqliteTodoRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        sqlx::migrate!("./data/sql/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })?;
        info!("Store migrations complete");
        Ok(())
    }

    fn todos(&self) -> Self::Todos<'_> {
        SqliteTodoRepository { pool: &self.pool }
    }
}
