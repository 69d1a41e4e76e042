//! Genre list resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::StoreView;

/// Every distinct genre tag in the album list, one per line.
pub struct GenresResource;

impl ResourceDefinition for GenresResource {
    const URI: &'static str = "pitchfork-list://genres";
    const NAME: &'static str = "genres";
    const DESCRIPTION: &'static str = "All genres in the Pitchfork 2000s list";
    const MIME_TYPE: &'static str = "text/plain";

    fn view() -> StoreView {
        StoreView::Genres
    }
}
