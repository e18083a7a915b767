//! `todos serve`: open the store and run the API server.

use std::net::IpAddr;

use tracing::info;

use crate::api::{self, Config};
use crate::cli::error::CliResult;
use crate::db::{Database, SqliteDatabase};

/// Command-line overrides for the server configuration.
#[derive(Debug, Default)]
pub struct ServeArgs {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub no_docs: bool,
    pub verbose: u8,
}

/// Resolve the server configuration: flag > environment > default.
pub fn resolve_config(args: ServeArgs) -> Config {
    let mut config = Config::new()
        .with_verbosity(args.verbose)
        .with_docs(!args.no_docs);
    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(url) = args.database_url {
        config = config.with_database_url(url);
    }
    config
}

/// Connect to the store and apply migrations.
pub async fn open_store(database_url: &str) -> CliResult<SqliteDatabase> {
    info!(database_url, "Opening store");
    let db = SqliteDatabase::connect(database_url).await?;
    db.migrate().await?;
    Ok(db)
}

/// Run the server until Ctrl-C.
pub async fn serve(args: ServeArgs) -> CliResult<()> {
    let config = resolve_config(args);
    api::init_tracing(config.verbosity);

    let db = open_store(&config.database_url).await?;
    api::run(config, db).await?;
    Ok(())
}
