//! Album-by-rank tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use crate::domains::catalog::{AlbumStore, query};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::presentation::respond_lookup;
use crate::domains::tools::validation::{Validate, rank_in_range};

/// Parameters for the rank lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AlbumByRankParams {
    /// The rank position of the album (1-200)
    #[schemars(range(min = 1, max = 200))]
    pub rank: i64,
}

impl Validate for AlbumByRankParams {
    fn validate(&self) -> Result<(), ToolError> {
        rank_in_range(self.rank).map(|_| ())
    }
}

/// Album-by-rank tool - finds the album at a given position.
pub struct AlbumByRankTool;

impl ToolDefinition for AlbumByRankTool {
    type Params = AlbumByRankParams;

    const NAME: &'static str = "get_album_by_rank";
    const TITLE: &'static str = "Get album by rank";
    const DESCRIPTION: &'static str = "Find a specific album by its rank position (1-200).";

    #[instrument(skip_all, fields(rank = params.rank))]
    fn execute(params: &AlbumByRankParams, store: &AlbumStore) -> CallToolResult {
        info!("Album by rank tool called for rank {}", params.rank);
        // Ranks outside u32 never match anything.
        let rank = u32::try_from(params.rank).unwrap_or(0);
        respond_lookup(query::by_rank(store.albums(), rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::Album;
    use crate::domains::catalog::fixtures::{decade_store, sample_store};
    use crate::domains::tools::presentation::result_text;

    #[test]
    fn test_by_rank_execute() {
        let store = sample_store();
        let result = AlbumByRankTool::execute(&AlbumByRankParams { rank: 3 }, &store);

        let album: Album = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(album.rank, 3);
        assert_eq!(album.artist, "Daft Punk");
    }

    #[test]
    fn test_by_rank_missing_is_message() {
        let store = sample_store();
        let result = AlbumByRankTool::execute(&AlbumByRankParams { rank: 150 }, &store);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "No album found at rank 150");
    }

    #[test]
    fn test_by_rank_round_trip() {
        let store = decade_store();
        for rank in 1..=200 {
            let result = AlbumByRankTool::execute(&AlbumByRankParams { rank }, &store);
            let album: Album = serde_json::from_str(result_text(&result)).unwrap();
            assert_eq!(i64::from(album.rank), rank);
        }
    }

    #[test]
    fn test_by_rank_validation() {
        let parse = |value: serde_json::Value| {
            let args = serde_json::json!({ "rank": value });
            AlbumByRankTool::parse(args.as_object().unwrap().clone())
        };

        assert!(parse(serde_json::json!(1)).is_ok());
        assert!(parse(serde_json::json!(200)).is_ok());
        assert!(matches!(parse(serde_json::json!(201)), Err(ToolError::InvalidArguments(_))));
        assert!(matches!(parse(serde_json::json!(0)), Err(ToolError::InvalidArguments(_))));
        assert!(parse(serde_json::json!(2.5)).is_err());
        assert!(parse(serde_json::json!("5")).is_err());
    }
}
