//! Albums-by-genre tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use crate::domains::catalog::{AlbumStore, query};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::presentation::respond_lookup;
use crate::domains::tools::validation::{Validate, non_empty};

/// Parameters for the genre filter tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AlbumsByGenreParams {
    /// The genre/tag to filter by (case-insensitive)
    #[schemars(length(min = 1))]
    pub genre: String,
}

impl Validate for AlbumsByGenreParams {
    fn validate(&self) -> Result<(), ToolError> {
        non_empty("Genre", &self.genre)
    }
}

/// Albums-by-genre tool - case-insensitive partial tag match.
pub struct AlbumsByGenreTool;

impl ToolDefinition for AlbumsByGenreTool {
    type Params = AlbumsByGenreParams;

    const NAME: &'static str = "get_albums_by_genre";
    const TITLE: &'static str = "Get albums by genre";
    const DESCRIPTION: &'static str =
        "Find all albums that include a specific genre/tag (case-insensitive), sorted by rank.";

    #[instrument(skip_all, fields(genre = %params.genre))]
    fn execute(params: &AlbumsByGenreParams, store: &AlbumStore) -> CallToolResult {
        info!("Albums by genre tool called for '{}'", params.genre);
        respond_lookup(query::by_genre(store.albums(), &params.genre))
    }
}
