//! Crate-level error type.
//!
//! Each domain keeps its own error enum; this one wraps them for callers
//! that drive the whole server, such as `McpServer::from_config`.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::{
    catalog::CatalogError, prompts::PromptError, resources::ResourceError, tools::ToolError,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The album list could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
