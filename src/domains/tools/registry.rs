//! Name-based access to the tools, for callers without an rmcp session.

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::domains::catalog::AlbumStore;

use super::definitions::{
    AlbumByRankTool, AlbumsByArtistTool, AlbumsByGenreTool, AlbumsByYearTool,
    ArtistStatisticsTool, GenreStatisticsTool, ListAlbumsTool, ListGenresTool, SearchAlbumsTool,
    ToolDefinition, YearStatisticsTool,
};

/// Every tool, addressable by name.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    store: AlbumStore,
}

impl ToolRegistry {
    pub fn new(store: AlbumStore) -> Self {
        Self { store }
    }

    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            ListAlbumsTool::NAME,
            ListGenresTool::NAME,
            SearchAlbumsTool::NAME,
            AlbumByRankTool::NAME,
            AlbumsByYearTool::NAME,
            AlbumsByArtistTool::NAME,
            AlbumsByGenreTool::NAME,
            YearStatisticsTool::NAME,
            GenreStatisticsTool::NAME,
            ArtistStatisticsTool::NAME,
        ]
    }

    /// Listing metadata, in the same order as [`Self::tool_names`].
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListAlbumsTool::to_tool(),
            ListGenresTool::to_tool(),
            SearchAlbumsTool::to_tool(),
            AlbumByRankTool::to_tool(),
            AlbumsByYearTool::to_tool(),
            AlbumsByArtistTool::to_tool(),
            AlbumsByGenreTool::to_tool(),
            YearStatisticsTool::to_tool(),
            GenreStatisticsTool::to_tool(),
            ArtistStatisticsTool::to_tool(),
        ]
    }

    /// Run the tool called `name`. `Err` carries a message for the client
    /// when the tool is unknown or its arguments do not validate.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let store = &self.store;
        match name {
            ListAlbumsTool::NAME => ListAlbumsTool::http_handler(arguments, store),
            ListGenresTool::NAME => ListGenresTool::http_handler(arguments, store),
            SearchAlbumsTool::NAME => SearchAlbumsTool::http_handler(arguments, store),
            AlbumByRankTool::NAME => AlbumByRankTool::http_handler(arguments, store),
            AlbumsByYearTool::NAME => AlbumsByYearTool::http_handler(arguments, store),
            AlbumsByArtistTool::NAME => AlbumsByArtistTool::http_handler(arguments, store),
            AlbumsByGenreTool::NAME => AlbumsByGenreTool::http_handler(arguments, store),
            YearStatisticsTool::NAME => YearStatisticsTool::http_handler(arguments, store),
            GenreStatisticsTool::NAME => GenreStatisticsTool::http_handler(arguments, store),
            ArtistStatisticsTool::NAME => ArtistStatisticsTool::http_handler(arguments, store),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(super::ToolError::unknown_tool(name).to_string())
            }
        }
    }
}
