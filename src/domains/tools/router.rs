//! The rmcp `ToolRouter` used by STDIO and TCP sessions.

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::catalog::AlbumStore;

use super::definitions::{
    AlbumByRankTool, AlbumsByArtistTool, AlbumsByGenreTool, AlbumsByYearTool,
    ArtistStatisticsTool, GenreStatisticsTool, ListAlbumsTool, ListGenresTool, SearchAlbumsTool,
    ToolDefinition, YearStatisticsTool,
};

/// One route per tool, each holding its own handle on `store`.
pub fn build_tool_router<S>(store: AlbumStore) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListAlbumsTool::create_route(store.clone()))
        .with_route(ListGenresTool::create_route(store.clone()))
        .with_route(SearchAlbumsTool::create_route(store.clone()))
        .with_route(AlbumByRankTool::create_route(store.clone()))
        .with_route(AlbumsByYearTool::create_route(store.clone()))
        .with_route(AlbumsByArtistTool::create_route(store.clone()))
        .with_route(AlbumsByGenreTool::create_route(store.clone()))
        .with_route(YearStatisticsTool::create_route(store.clone()))
        .with_route(GenreStatisticsTool::create_route(store.clone()))
        .with_route(ArtistStatisticsTool::create_route(store))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::catalog::fixtures::sample_store;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(sample_store());
        let tools = router.list_all();
        assert_eq!(tools.len(), 10);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list_albums"));
        assert!(names.contains(&"list_genres"));
        assert!(names.contains(&"search_albums"));
        assert!(names.contains(&"get_album_by_rank"));
        assert!(names.contains(&"get_albums_by_year"));
        assert!(names.contains(&"get_albums_by_artist"));
        assert!(names.contains(&"get_albums_by_genre"));
        assert!(names.contains(&"get_year_statistics"));
        assert!(names.contains(&"get_genre_statistics"));
        assert!(names.contains(&"get_artist_statistics"));
    }

    #[test]
    fn test_registry_matches_router() {
        let store = sample_store();
        let registry = ToolRegistry::new(store.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(store);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
