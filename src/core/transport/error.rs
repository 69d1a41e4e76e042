//! Transport failures.

use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The client never completed the MCP initialize exchange.
    #[error("Handshake failed: {0}")]
    Handshake(String),

    /// An established session ended abnormally.
    #[error("Session failed: {0}")]
    Session(String),

    #[error("HTTP server failed: {0}")]
    Http(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn handshake(reason: impl ToString) -> Self {
        Self::Handshake(reason.to_string())
    }

    pub fn session(reason: impl ToString) -> Self {
        Self::Session(reason.to_string())
    }

    pub fn http(reason: impl ToString) -> Self {
        Self::Http(reason.to_string())
    }
}
