//! HTTP transport for the todo service.

mod handlers;
pub mod operations;
mod routes;
mod state;


use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

pub use handlers::{ErrorResponse, TodoResponse, WELCOME_MESSAGE};
pub use routes::{ApiDoc, create_router};
pub use state::AppState;

/// Environment variable holding the store connection string.
pub const DATABASE_URL_ENV: &str = "TODOS_DATABASE_URL";

/// Store used when neither flag nor environment names one.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db";

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Store connection string (file path or `sqlite:` URL)
    pub database_url: String,
    /// Verbosity level (0 = info, 1 = debug, 2+ = trace)
    pub verbosity: u8,
    /// Serve the Scalar docs page at `/docs`
    pub enable_docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            verbosity: 0,
            enable_docs: true,
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied.
    ///
    /// Reads `TODOS_DATABASE_URL`. Builder methods called afterwards win over
    /// the environment.
    pub fn new() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(DATABASE_URL_ENV)
            && !url.is_empty()
        {
            config.database_url = url;
        }
        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_docs(mut self, enable_docs: bool) -> Self {
        self.enable_docs = enable_docs;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Server startup and runtime errors
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(todos::api::bind),
        help("Is another process already listening on this address?")
    )]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(todos::api::serve))]
    Serve(#[from] std::io::Error),
}

/// Log filter for a `-v` count, unless `RUST_LOG` is set.
fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "todos=info,tower_http=info",
        1 => "todos=debug,tower_http=debug",
        _ => "todos=trace,tower_http=trace",
    }
}

/// Initialize tracing subscriber with env filter.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(verbosity: u8) {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbosity).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Run the API server with the given configuration and store.
///
/// The store must already be migrated. Returns after Ctrl-C once in-flight
/// requests have drained.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    let ct = CancellationToken::new();
    let state = AppState::new(db);

    let app = create_router(state, config.enable_docs, ct.clone())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("API server listening on http://{}", addr);
    if config.enable_docs {
        info!("API docs available at http://{}/docs", addr);
    }
    info!("MCP endpoint available at http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(ct))
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal(ct: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
    ct.cancel();
}
