//! The write-once album store.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::album::Album;
use super::error::CatalogError;
use super::source::AlbumSource;

/// Key under which the collection is stored in the backing namespace.
pub const ALBUMS_KEY: &str = "albums";

/// Immutable, rank-sorted album collection shared by every operation.
///
/// Cloning the store is cheap: all clones share the same allocation.
#[derive(Debug, Clone)]
pub struct AlbumStore {
    albums: Arc<[Album]>,
}

impl AlbumStore {
    /// Build a store from a collection, sorting it by ascending rank.
    pub fn new(mut albums: Vec<Album>) -> Self {
        albums.sort_by_key(|album| album.rank);

        let mut seen = HashSet::with_capacity(albums.len());
        for album in &albums {
            if !seen.insert(album.rank) {
                warn!(
                    "Duplicate rank {} ({} - {})",
                    album.rank, album.artist, album.album
                );
            }
        }

        Self {
            albums: albums.into(),
        }
    }

    /// Fetch the collection from `source` and freeze it.
    ///
    /// Fails with [`CatalogError::DataUnavailable`] when the source has no
    /// collection under `key`.
    #[instrument(skip(source), fields(origin = %source.describe()))]
    pub async fn load(source: &dyn AlbumSource, key: &str) -> Result<Self, CatalogError> {
        let albums = source
            .fetch_collection(key)
            .await?
            .ok_or_else(|| CatalogError::data_unavailable(key))?;

        let store = Self::new(albums);
        info!("Loaded {} albums", store.len());
        Ok(store)
    }

    /// All albums, ascending by rank.
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Number of albums in the collection.
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}
