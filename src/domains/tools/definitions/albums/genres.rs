//! List genres tool definition.

use rmcp::model::CallToolResult;
use tracing::{info, instrument};

use super::super::{NoParams, ToolDefinition};
use crate::domains::catalog::{AlbumStore, query};
use crate::domains::tools::presentation::respond_json;

/// List genres tool - returns every distinct genre tag.
pub struct ListGenresTool;

impl ToolDefinition for ListGenresTool {
    type Params = NoParams;

    const NAME: &'static str = "list_genres";
    const TITLE: &'static str = "List all genres";
    const DESCRIPTION: &'static str = "Returns all unique genres sorted alphabetically.";

    #[instrument(skip_all)]
    fn execute(_params: &NoParams, store: &AlbumStore) -> CallToolResult {
        let genres = query::unique_genres(store.albums());
        info!("List genres tool returned {} genres", genres.len());
        respond_json(&genres)
    }
}
