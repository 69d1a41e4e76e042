//! Key-value sources for the album collection.
//!
//! A source behaves like a key-value namespace: the collection lives under a
//! key (normally `"albums"`), and a missing key or a `null` value means the
//! collection is absent. Sources are only read once, at startup.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use super::album::Album;
use super::error::CatalogError;

/// A key-value store that can supply the raw album collection.
#[async_trait]
pub trait AlbumSource: Send + Sync {
    /// Human-readable description of where the data comes from (for logs).
    fn describe(&self) -> String;

    /// Fetch the collection stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or holds `null`.
    async fn fetch_collection(&self, key: &str) -> Result<Option<Vec<Album>>, CatalogError>;
}

/// Decode a raw key-value entry into album records.
fn decode_entry(value: Option<&Value>) -> Result<Option<Vec<Album>>, CatalogError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| CatalogError::malformed(e.to_string())),
    }
}

// ============================================================================
// JSON file source
// ============================================================================

/// A JSON document on disk holding a key-value namespace.
///
/// ```json
/// { "albums": [ { "artist": "...", "album": "...", "rank": 1, "year": "2000", "genres": [] } ] }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading the given document.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AlbumSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("JSON document {}", self.path.display())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_collection(&self, key: &str) -> Result<Option<Vec<Album>>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::io(self.path.display().to_string(), e))?;

        let document: Value =
            serde_json::from_str(&raw).map_err(|e| CatalogError::malformed(e.to_string()))?;

        let namespace = document.as_object().ok_or_else(|| {
            CatalogError::malformed("expected a JSON object mapping keys to values")
        })?;

        debug!("Document holds {} key(s)", namespace.len());
        decode_entry(namespace.get(key))
    }
}

// ============================================================================
// In-memory source
// ============================================================================

/// An in-process key-value namespace.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, Value>,
}

impl MemorySource {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an album collection under `key`.
    pub fn with_albums(self, key: impl Into<String>, albums: Vec<Album>) -> Self {
        let value = Value::Array(
            albums
                .into_iter()
                .filter_map(|album| serde_json::to_value(album).ok())
                .collect(),
        );
        self.with_value(key, value)
    }

    /// Store a raw JSON value under `key`.
    pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.entries.insert(key.into(), value);
        self
    }
}

#[async_trait]
impl AlbumSource for MemorySource {
    fn describe(&self) -> String {
        format!("in-memory namespace ({} key(s))", self.entries.len())
    }

    async fn fetch_collection(&self, key: &str) -> Result<Option<Vec<Album>>, CatalogError> {
        decode_entry(self.entries.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::fixtures::sample_albums;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_json_file_source_reads_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kv.json");
        let document = serde_json::json!({ "albums": sample_albums(), "other": 1 });
        fs::write(&path, document.to_string()).unwrap();

        let source = JsonFileSource::new(&path);
        let albums = source.fetch_collection("albums").await.unwrap().unwrap();
        assert_eq!(albums.len(), sample_albums().len());
    }

    #[tokio::test]
    async fn test_json_file_source_missing_key_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kv.json");
        fs::write(&path, r#"{"albums": null}"#).unwrap();

        let source = JsonFileSource::new(&path);
        assert!(source.fetch_collection("albums").await.unwrap().is_none());
        assert!(source.fetch_collection("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_json_file_source_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kv.json");

        fs::write(&path, "[1, 2, 3]").unwrap();
        let source = JsonFileSource::new(&path);
        let result = source.fetch_collection("albums").await;
        assert!(matches!(result, Err(CatalogError::Malformed(_))));

        fs::write(&path, r#"{"albums": [{"artist": "X"}]}"#).unwrap();
        let result = source.fetch_collection("albums").await;
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_json_file_source_missing_file() {
        let source = JsonFileSource::new("/nonexistent/albums/12345.json");
        let result = source.fetch_collection("albums").await;
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[tokio::test]
    async fn test_memory_source() {
        let source = MemorySource::new().with_albums("albums", sample_albums());
        let albums = source.fetch_collection("albums").await.unwrap().unwrap();
        assert_eq!(albums, sample_albums());
        assert!(source.fetch_collection("genres").await.unwrap().is_none());
    }
}
