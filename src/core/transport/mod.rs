//! Transport layer for the MCP server.
//!
//! | Feature | Transport | Sessions |
//! |---|---|---|
//! | `stdio` (default) | stdin/stdout | one |
//! | `tcp` | line-delimited JSON-RPC over TCP | one per connection |
//! | `http` | JSON-RPC 2.0 over HTTP POST | stateless requests |
//!
//! Every transport serves the same `McpServer`, whose album store is shared
//! read-only across sessions.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
