//! Listing and reading resources.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::BTreeMap;
use tracing::debug;

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::domains::catalog::AlbumStore;
use crate::domains::catalog::query::unique_genres;

/// Resolves resource reads against the album store.
pub struct ResourceService {
    store: AlbumStore,
    /// Keyed by URI, so listings come out in URI order.
    entries: BTreeMap<String, ResourceEntry>,
}

/// A listed resource and the store view its text is rendered from.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    pub resource: Resource,
    pub view: StoreView,
}

/// Views of the album store exposed as resources, recomputed on each read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreView {
    /// Distinct genre tags in case-insensitive order, one per line.
    Genres,
}

impl StoreView {
    fn render(self, store: &AlbumStore) -> String {
        match self {
            Self::Genres => unique_genres(store.albums()).join("\n"),
        }
    }
}

impl ResourceService {
    pub fn new(store: AlbumStore) -> Self {
        let mut service = Self {
            store,
            entries: BTreeMap::new(),
        };
        get_all_resources()
            .into_iter()
            .for_each(|entry| service.insert(entry));
        service
    }

    /// Add an entry, replacing any previous one at the same URI.
    pub fn insert(&mut self, entry: ResourceEntry) {
        let uri = entry.resource.raw.uri.clone();
        debug!(%uri, "Registered resource");
        self.entries.insert(uri, entry);
    }

    pub async fn list_resources(&self) -> Vec<Resource> {
        self.entries.values().map(|e| e.resource.clone()).collect()
    }

    /// Read `uri` as a single text content item.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let Some(entry) = self.entries.get(uri) else {
            return Err(ResourceError::not_found(uri));
        };

        let contents = ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: entry.resource.raw.mime_type.clone(),
            text: entry.view.render(&self.store),
            meta: None,
        };
        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}
