//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file and implements [`ToolDefinition`],
//! which supplies the rmcp route, the tool metadata and the HTTP handler.

pub mod albums;
pub mod stats;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::error::ToolError;
use super::validation::Validate;
use crate::domains::catalog::AlbumStore;

pub use albums::{
    AlbumByRankTool, AlbumsByArtistTool, AlbumsByGenreTool, AlbumsByYearTool, ListAlbumsTool,
    ListGenresTool, SearchAlbumsTool,
};
pub use stats::{ArtistStatisticsTool, GenreStatisticsTool, YearStatisticsTool};

/// Trait for tool definitions.
///
/// Implementors provide metadata, a parameters type and the tool logic;
/// parsing, validation and transport plumbing come from the provided methods.
pub trait ToolDefinition: Sized + 'static {
    /// Parameters accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Validate + Send + 'static;

    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Short human-readable title.
    const TITLE: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Execute the tool logic against the album store.
    fn execute(params: &Self::Params, store: &AlbumStore) -> CallToolResult;

    /// Deserialize and validate raw arguments.
    fn parse(arguments: JsonObject) -> Result<Self::Params, ToolError> {
        let params: Self::Params = serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some(Self::TITLE.into()),
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    fn create_route<S>(store: AlbumStore) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let store = store.clone();
            async move {
                let params =
                    Self::parse(args).map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &store))
            }
            .boxed()
        })
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    fn http_handler(
        arguments: serde_json::Value,
        store: &AlbumStore,
    ) -> Result<serde_json::Value, String> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            _ => return Err("Tool arguments must be a JSON object".to_string()),
        };

        let params = Self::parse(arguments).map_err(|e| e.to_string())?;
        let result = Self::execute(&params, store);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }
}

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, serde::Deserialize, JsonSchema)]
pub struct NoParams {}

impl Validate for NoParams {
    fn validate(&self) -> Result<(), ToolError> {
        Ok(())
    }
}
