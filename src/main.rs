//! Binary entry point.
//!
//! Reads configuration, starts logging and loads the album list before any
//! transport is opened, so a missing or malformed list stops startup.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use album_list_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let albums_path = config.catalog.albums_path.display().to_string();
    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::from_config(config)
        .await
        .with_context(|| format!("failed to load albums from {albums_path}"))?;

    transport.run(server).await?;
    info!("Server shutting down");
    Ok(())
}

/// Log to stderr; stdout carries the STDIO protocol.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
