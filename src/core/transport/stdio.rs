//! STDIO transport: a single MCP session over stdin/stdout.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve one session until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let albums = server.store().len();

        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(TransportError::handshake)?;
        info!(albums, "Serving over stdin/stdout");

        let reason = session
            .waiting()
            .await
            .map_err(TransportError::session)?;

        info!(?reason, "STDIO session closed");
        Ok(())
    }
}
