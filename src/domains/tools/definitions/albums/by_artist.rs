//! Albums-by-artist tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use crate::domains::catalog::{AlbumStore, query};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::presentation::respond_lookup;
use crate::domains::tools::validation::{Validate, non_empty};

/// Parameters for the artist filter tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AlbumsByArtistParams {
    /// The artist name to search for (case-insensitive)
    #[schemars(length(min = 1))]
    pub artist: String,
}

impl Validate for AlbumsByArtistParams {
    fn validate(&self) -> Result<(), ToolError> {
        non_empty("Artist name", &self.artist)
    }
}

/// Albums-by-artist tool - case-insensitive exact artist match.
pub struct AlbumsByArtistTool;

impl ToolDefinition for AlbumsByArtistTool {
    type Params = AlbumsByArtistParams;

    const NAME: &'static str = "get_albums_by_artist";
    const TITLE: &'static str = "Get albums by artist";
    const DESCRIPTION: &'static str =
        "Find all albums by a specific artist (case-insensitive exact match), sorted by rank.";

    #[instrument(skip_all, fields(artist = %params.artist))]
    fn execute(params: &AlbumsByArtistParams, store: &AlbumStore) -> CallToolResult {
        info!("Albums by artist tool called for '{}'", params.artist);
        respond_lookup(query::by_artist(store.albums(), &params.artist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::Album;
    use crate::domains::catalog::fixtures::sample_store;
    use crate::domains::tools::presentation::result_text;

    fn params(artist: &str) -> AlbumsByArtistParams {
        AlbumsByArtistParams {
            artist: artist.to_string(),
        }
    }

    #[test]
    fn test_by_artist_execute() {
        let store = sample_store();
        let lower = AlbumsByArtistTool::execute(&params("radiohead"), &store);
        let proper = AlbumsByArtistTool::execute(&params("Radiohead"), &store);
        assert_eq!(result_text(&lower), result_text(&proper));

        let albums: Vec<Album> = serde_json::from_str(result_text(&lower)).unwrap();
        let titles: Vec<_> = albums.iter().map(|a| a.album.as_str()).collect();
        assert_eq!(titles, vec!["Kid A", "In Rainbows"]);
    }

    #[test]
    fn test_by_artist_missing_is_message() {
        let store = sample_store();
        let result = AlbumsByArtistTool::execute(&params("Radio"), &store);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "No albums found for artist \"Radio\"");
    }

    #[test]
    fn test_by_artist_rejects_empty() {
        let args = serde_json::json!({ "artist": "" });
        let result = AlbumsByArtistTool::parse(args.as_object().unwrap().clone());
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
