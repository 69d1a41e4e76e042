//! Artist statistics tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use crate::domains::catalog::AlbumStore;
use crate::domains::catalog::stats::{StatsOrder, artist_statistics};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::presentation::respond_json;
use crate::domains::tools::validation::{Validate, at_least_one};

/// Sort order for artist statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ArtistSortBy {
    /// Album count, descending.
    #[default]
    Count,

    /// Artist name, ascending.
    Artist,
}

impl From<ArtistSortBy> for StatsOrder {
    fn from(sort: ArtistSortBy) -> Self {
        match sort {
            ArtistSortBy::Count => Self::ByCount,
            ArtistSortBy::Artist => Self::ByKey,
        }
    }
}

fn default_min_albums() -> i64 {
    1
}

fn default_show_summary() -> bool {
    true
}

/// Parameters for the artist statistics tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistStatisticsParams {
    /// Sort by album count (descending) or artist name (ascending). Defaults to count.
    #[serde(default)]
    pub sort_by: ArtistSortBy,

    /// Only show artists with at least this many albums. Defaults to 1.
    #[serde(default = "default_min_albums")]
    #[schemars(range(min = 1))]
    pub min_albums: i64,

    /// Include summary statistics about artist distribution. Defaults to true.
    #[serde(default = "default_show_summary")]
    pub show_summary: bool,
}

impl Validate for ArtistStatisticsParams {
    fn validate(&self) -> Result<(), ToolError> {
        at_least_one("minAlbums", self.min_albums).map(|_| ())
    }
}

/// Artist statistics tool - album counts per artist and their distribution.
pub struct ArtistStatisticsTool;

impl ToolDefinition for ArtistStatisticsTool {
    type Params = ArtistStatisticsParams;

    const NAME: &'static str = "get_artist_statistics";
    const TITLE: &'static str = "Get artist statistics";
    const DESCRIPTION: &'static str =
        "Returns statistics about artists, including album counts and distribution patterns.";

    #[instrument(
        skip_all,
        fields(
            sort_by = ?params.sort_by,
            min_albums = params.min_albums,
            show_summary = params.show_summary
        )
    )]
    fn execute(params: &ArtistStatisticsParams, store: &AlbumStore) -> CallToolResult {
        info!("Artist statistics tool called");
        let min_albums = usize::try_from(params.min_albums).unwrap_or(1);
        respond_json(&artist_statistics(
            store.albums(),
            params.sort_by.into(),
            min_albums,
            params.show_summary,
        ))
    }
}
