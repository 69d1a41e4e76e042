//! Search albums tool definition.
//!
//! Case-insensitive partial matching against artist names and album titles.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use crate::domains::catalog::{AlbumStore, query};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::presentation::respond_json;
use crate::domains::tools::validation::{Validate, non_blank};

/// Parameters for the search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchAlbumsParams {
    /// Search term to match against artist names or album titles (case-insensitive)
    #[schemars(length(min = 1))]
    pub query: String,
}

impl Validate for SearchAlbumsParams {
    fn validate(&self) -> Result<(), ToolError> {
        non_blank("Search query", &self.query)
    }
}

/// Search albums tool - matches artist or title substrings.
pub struct SearchAlbumsTool;

impl ToolDefinition for SearchAlbumsTool {
    type Params = SearchAlbumsParams;

    const NAME: &'static str = "search_albums";
    const TITLE: &'static str = "Search albums";
    const DESCRIPTION: &'static str =
        "Search albums by artist or title using case-insensitive partial matching.";

    #[instrument(skip_all, fields(query = %params.query))]
    fn execute(params: &SearchAlbumsParams, store: &AlbumStore) -> CallToolResult {
        let results = query::search(store.albums(), &params.query);
        info!("Search for '{}' matched {} albums", params.query, results.len());
        respond_json(&results)
    }
}
