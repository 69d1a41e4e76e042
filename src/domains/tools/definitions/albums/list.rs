//! List albums tool definition.
//!
//! Returns the whole collection in rank order.

use rmcp::model::CallToolResult;
use tracing::{info, instrument};

use super::super::{NoParams, ToolDefinition};
use crate::domains::catalog::{AlbumStore, query};
use crate::domains::tools::presentation::respond_json;

/// List albums tool - returns every album sorted by rank.
pub struct ListAlbumsTool;

impl ToolDefinition for ListAlbumsTool {
    type Params = NoParams;

    const NAME: &'static str = "list_albums";
    const TITLE: &'static str = "List all music albums";
    const DESCRIPTION: &'static str = "Returns all 200 albums sorted by rank (1-200).";

    #[instrument(skip_all)]
    fn execute(_params: &NoParams, store: &AlbumStore) -> CallToolResult {
        info!("List albums tool called");
        respond_json(query::list_all(store.albums()))
    }
}
