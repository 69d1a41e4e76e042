//! TCP transport: line-delimited JSON-RPC, one MCP session per connection.

use std::net::SocketAddr;
use std::time::Duration;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed `accept` before retrying.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a transport for the given listener settings.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Accept connections until the process stops.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.config.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            albums = server.store().len(),
            "Listening on {} (JSON-RPC over TCP)", addr
        );

        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                warn!("Failed to set TCP_NODELAY for {}: {}", peer, e);
            }

            tokio::spawn(serve_connection(server.clone(), stream, peer));
        }
    }
}

/// Run one MCP session on an accepted connection.
#[instrument(skip(server, stream))]
async fn serve_connection(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    let session = match server.serve(stream).await {
        Ok(session) => session,
        Err(e) => {
            warn!("Session initialization failed: {}", e);
            return;
        }
    };
    info!("Client connected");

    match session.waiting().await {
        Ok(reason) => info!(?reason, "Client disconnected"),
        Err(e) => warn!("Session ended with error: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tcp_address() {
        let config = TcpConfig {
            port: 4100,
            host: "0.0.0.0".to_string(),
        };
        assert_eq!(config.address(), "0.0.0.0:4100");
        let _transport = TcpTransport::new(config);
    }
}
