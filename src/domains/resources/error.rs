//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur while reading resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resource is registered under this URI.
    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl ResourceError {
    /// Create a "not found" error for `uri`.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_uri() {
        let err = ResourceError::not_found("pitchfork-list://decades");
        assert_eq!(err.to_string(), "Resource not found: pitchfork-list://decades");
    }
}
