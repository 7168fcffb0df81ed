//! CLI command implementations

use std::path::Path;

use serde_json::json;
use tracing::info;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_response;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::init_logging;
use crate::store::{EditionStore, FileEditionStore};

/// Main CLI entry point
///
/// Parses arguments, installs logging, and dispatches to the command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(cli.log_format);
    run_command(cli.command)
}

/// Run the appropriate command; no subcommand means serve with defaults
pub fn run_command(cmd: Option<Command>) -> CliResult<()> {
    match cmd {
        Some(Command::Serve { host, port, db }) => serve(HttpServerConfig {
            host,
            port,
            db_path: db,
        }),
        Some(Command::Seed { db }) => seed(&db),
        None => serve(HttpServerConfig::from_env()),
    }
}

/// Serve the REST API until interrupted
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Create the document with the seed set unless it already exists
pub fn seed(db_path: &Path) -> CliResult<()> {
    let existed = db_path.exists();
    let store = FileEditionStore::new(db_path);
    let editions = store.load()?;

    info!(path = %db_path.display(), count = editions.len(), existed, "edition document ready");

    write_response(json!({
        "path": db_path.display().to_string(),
        "editions": editions.len(),
        "seeded": !existed,
    }))
}
