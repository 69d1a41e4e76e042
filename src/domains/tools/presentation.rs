//! Conversion of catalog results into MCP tool content.
//!
//! Every tool answers with a single text item. Strings are passed through
//! verbatim; anything else is serialized to compact JSON with fields in
//! declaration order.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use super::error::ToolError;
use crate::domains::catalog::Lookup;

/// A tool answer before it is turned into protocol content.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Human-readable message, sent as-is.
    Text(String),

    /// Compact JSON text.
    Json(String),
}

impl Payload {
    /// Wrap any serializable value. Values that serialize to a plain
    /// string become [`Payload::Text`].
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ToolError> {
        let json = serde_json::to_string(value)?;
        if json.starts_with('"') {
            return Ok(Self::Text(serde_json::from_str(&json)?));
        }
        Ok(Self::Json(json))
    }

    /// Render the payload as the text sent to the client.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Json(json) => json,
        }
    }
}

impl<T: Serialize> TryFrom<Lookup<T>> for Payload {
    type Error = ToolError;

    fn try_from(lookup: Lookup<T>) -> Result<Self, Self::Error> {
        match lookup {
            Lookup::Found(value) => Self::json(&value),
            Lookup::NotFound(message) => Ok(Self::Text(message)),
        }
    }
}

/// Build the tool result for a payload, or an error result if it could not
/// be produced.
pub fn respond(payload: Result<Payload, ToolError>) -> CallToolResult {
    match payload {
        Ok(payload) => CallToolResult::success(vec![Content::text(payload.into_text())]),
        Err(e) => {
            warn!("Failed to build tool response: {}", e);
            CallToolResult::error(vec![Content::text(e.to_string())])
        }
    }
}

/// Serialize `value` and build a successful tool result from it.
pub fn respond_json<T: Serialize + ?Sized>(value: &T) -> CallToolResult {
    respond(Payload::json(value))
}

/// Build a tool result from a lookup that may have matched nothing.
pub fn respond_lookup<T: Serialize>(lookup: Lookup<T>) -> CallToolResult {
    respond(Payload::try_from(lookup))
}

/// Extract the text of the first content item (test helper).
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_passes_through() {
        let payload = Payload::Text("No albums found for year 2009".to_string());
        assert_eq!(payload.into_text(), "No albums found for year 2009");
    }

    #[test]
    fn test_json_is_compact() {
        let payload = Payload::json(&serde_json::json!({ "year": "2007", "count": 40 })).unwrap();
        let text = payload.into_text();
        assert!(!text.contains('\n'));
        assert!(!text.contains(": "));
    }

    #[test]
    fn test_lookup_not_found_is_success() {
        let lookup: Lookup<Vec<u32>> = Lookup::NotFound("No album found at rank 7".to_string());
        let result = respond_lookup(lookup);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "No album found at rank 7");
    }

    #[test]
    fn test_lookup_found_is_json() {
        let result = respond_lookup(Lookup::Found(vec![1, 2, 3]));
        assert_eq!(result_text(&result), "[1,2,3]");
    }

    #[test]
    fn test_albums_keep_field_order() {
        let albums = vec![crate::domains::catalog::fixtures::album(
            4,
            "Radiohead",
            "In Rainbows",
            Some("2007"),
            &["Rock"],
        )];
        let result = respond_json(&albums);
        assert_eq!(
            result_text(&result),
            r#"[{"artist":"Radiohead","album":"In Rainbows","rank":4,"year":"2007","genres":["Rock"]}]"#
        );
    }

    #[test]
    fn test_string_value_is_not_quoted() {
        let result = respond_json("plain");
        assert_eq!(result_text(&result), "plain");
    }
}
