//! Album list MCP server.
//!
//! Serves a ranked list of the best albums of the 2000s over the
//! Model Context Protocol: query and statistics tools, analysis prompts and
//! a genre resource, all computed from one read-only album collection.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **catalog**: The album store and its query, aggregation and statistics engines
//!   - **tools**: MCP tools exposing catalog operations
//!   - **prompts**: Prompt templates filled with catalog data
//!   - **resources**: Readable views of the catalog
//!
//! # Example
//!
//! ```rust,no_run
//! use album_list_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::from_config(config).await?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
