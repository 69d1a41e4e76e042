//! Resource definitions, one per file.

mod genres;

pub use genres::GenresResource;

use super::service::StoreView;

/// Static description of a resource and how its content is produced.
pub trait ResourceDefinition {
    /// URI clients read the resource by.
    const URI: &'static str;

    /// Short display name.
    const NAME: &'static str;

    /// What the resource contains.
    const DESCRIPTION: &'static str;

    /// MIME type of the content.
    const MIME_TYPE: &'static str;

    /// Store view the content is rendered from on read.
    fn view() -> StoreView;
}
