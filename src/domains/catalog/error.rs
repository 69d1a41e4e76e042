//! Catalog-specific error types.

use thiserror::Error;

/// Errors that can occur while loading the album collection.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store holds no collection under the requested key.
    #[error("Album data not found under key '{0}'")]
    DataUnavailable(String),

    /// The collection exists but does not decode into album records.
    #[error("Malformed album data: {0}")]
    Malformed(String),

    /// The backing document could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Create a new "data unavailable" error.
    pub fn data_unavailable(key: impl Into<String>) -> Self {
        Self::DataUnavailable(key.into())
    }

    /// Create a new "malformed" error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Create a new I/O error for the given path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
