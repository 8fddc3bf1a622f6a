//! CLI command implementations
//!
//! `init` writes a default configuration file; `serve` loads configuration,
//! initializes logging, and runs the HTTP server to completion.

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, ServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the requested command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Write a default configuration file. Refuses to overwrite an existing one.
fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(config_path.to_path_buf()));
    }

    let config = ServerConfig::default();
    let body = config.to_pretty_json().map_err(CliError::Config)?;
    fs::write(config_path, body)?;

    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

/// Load configuration and run the HTTP server until shutdown.
///
/// A missing config file is not an error; the server runs with defaults.
fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    setup_tracing();

    let mut config = if config_path.exists() {
        ServerConfig::load(config_path)?
    } else {
        ServerConfig::default()
    };
    if let Some(port) = port_override {
        config.port = port;
    }

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::BootFailed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::BootFailed(format!("HTTP server failed: {}", e)))
    })
}

/// Initializes structured logging with environment-based filtering.
///
/// Set `RUST_LOG` to control verbosity, e.g. `RUST_LOG=fruitstand=debug`.
fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
