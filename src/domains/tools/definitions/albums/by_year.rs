//! Albums-by-year tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use crate::domains::catalog::{AlbumStore, query};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::presentation::respond_lookup;
use crate::domains::tools::validation::{Validate, decade_year};

/// Parameters for the year filter tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AlbumsByYearParams {
    /// The release year to filter by (2000-2009, e.g., "2005")
    pub year: String,
}

impl Validate for AlbumsByYearParams {
    fn validate(&self) -> Result<(), ToolError> {
        decade_year(&self.year)
    }
}

/// Albums-by-year tool - every album released in a given year.
pub struct AlbumsByYearTool;

impl ToolDefinition for AlbumsByYearTool {
    type Params = AlbumsByYearParams;

    const NAME: &'static str = "get_albums_by_year";
    const TITLE: &'static str = "Get albums by year";
    const DESCRIPTION: &'static str =
        "Find all albums released in a specific year (2000-2009), sorted by rank.";

    #[instrument(skip_all, fields(year = %params.year))]
    fn execute(params: &AlbumsByYearParams, store: &AlbumStore) -> CallToolResult {
        info!("Albums by year tool called for {}", params.year);
        respond_lookup(query::by_year(store.albums(), &params.year))
    }
}
