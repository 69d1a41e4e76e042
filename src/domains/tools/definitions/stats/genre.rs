//! Genre statistics tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use crate::domains::catalog::AlbumStore;
use crate::domains::catalog::stats::{StatsOrder, genre_statistics};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::presentation::respond_json;
use crate::domains::tools::validation::{Validate, at_least_one};

/// Sort order for genre statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GenreSortBy {
    /// Album count, descending.
    #[default]
    Count,

    /// Genre name, ascending.
    Genre,
}

impl From<GenreSortBy> for StatsOrder {
    fn from(sort: GenreSortBy) -> Self {
        match sort {
            GenreSortBy::Count => Self::ByCount,
            GenreSortBy::Genre => Self::ByKey,
        }
    }
}

fn default_min_count() -> i64 {
    1
}

/// Parameters for the genre statistics tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenreStatisticsParams {
    /// Sort by album count (descending) or genre name (ascending). Defaults to count.
    #[serde(default)]
    pub sort_by: GenreSortBy,

    /// Only show genres that appear on at least this many albums. Defaults to 1.
    #[serde(default = "default_min_count")]
    #[schemars(range(min = 1))]
    pub min_count: i64,
}

impl Validate for GenreStatisticsParams {
    fn validate(&self) -> Result<(), ToolError> {
        at_least_one("minCount", self.min_count).map(|_| ())
    }
}

/// Genre statistics tool - album counts and shares per genre tag.
pub struct GenreStatisticsTool;

impl ToolDefinition for GenreStatisticsTool {
    type Params = GenreStatisticsParams;

    const NAME: &'static str = "get_genre_statistics";
    const TITLE: &'static str = "Get album statistics by genre";
    const DESCRIPTION: &'static str =
        "Returns the count of albums for each genre/tag, sorted by frequency or alphabetically.";

    #[instrument(skip_all, fields(sort_by = ?params.sort_by, min_count = params.min_count))]
    fn execute(params: &GenreStatisticsParams, store: &AlbumStore) -> CallToolResult {
        info!("Genre statistics tool called");
        let min_count = usize::try_from(params.min_count).unwrap_or(1);
        respond_json(&genre_statistics(
            store.albums(),
            params.sort_by.into(),
            min_count,
        ))
    }
}
