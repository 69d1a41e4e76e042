//! Year statistics tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use crate::domains::catalog::AlbumStore;
use crate::domains::catalog::stats::{StatsOrder, year_statistics};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::presentation::respond_json;
use crate::domains::tools::validation::Validate;

/// Sort order for year statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum YearSortBy {
    /// Album count, descending.
    #[default]
    Count,

    /// Year, ascending.
    Year,
}

impl From<YearSortBy> for StatsOrder {
    fn from(sort: YearSortBy) -> Self {
        match sort {
            YearSortBy::Count => Self::ByCount,
            YearSortBy::Year => Self::ByKey,
        }
    }
}

/// Parameters for the year statistics tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct YearStatisticsParams {
    /// Sort by album count (descending) or year (ascending). Defaults to count.
    #[serde(default)]
    pub sort_by: YearSortBy,
}

impl Validate for YearStatisticsParams {
    fn validate(&self) -> Result<(), ToolError> {
        Ok(())
    }
}

/// Year statistics tool - album counts and shares per release year.
pub struct YearStatisticsTool;

impl ToolDefinition for YearStatisticsTool {
    type Params = YearStatisticsParams;

    const NAME: &'static str = "get_year_statistics";
    const TITLE: &'static str = "Get album statistics by year";
    const DESCRIPTION: &'static str =
        "Returns the count of albums for each year (2000-2009), sorted by count or year.";

    #[instrument(skip_all, fields(sort_by = ?params.sort_by))]
    fn execute(params: &YearStatisticsParams, store: &AlbumStore) -> CallToolResult {
        info!("Year statistics tool called");
        respond_json(&year_statistics(store.albums(), params.sort_by.into()))
    }
}
