//! Starts the configured transport.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "tcp")]
use super::tcp::TcpTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Runs an `McpServer` on the transport chosen at startup.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a service for `config`.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// The selected transport.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Serve until the transport closes (STDIO) or fails (TCP, HTTP).
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!(
            server = server.name(),
            "Starting transport: {}",
            self.config.description()
        );

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(cfg) => TcpTransport::new(cfg).run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        }
    }
}
