//! Tools domain module.
//!
//! Tools are the query and statistics operations clients call over the
//! album list. Each one parses and validates its arguments, runs a catalog
//! operation and presents the answer as a single text item.
//!
//! - `definitions/` holds one file per tool, grouped into `albums/` and `stats/`
//! - `validation.rs` checks argument preconditions after deserialization
//! - `presentation.rs` turns catalog results into tool content
//! - `router.rs` builds the rmcp `ToolRouter` (STDIO/TCP)
//! - `registry.rs` lists tools and dispatches HTTP calls
//!
//! A new tool needs a `ToolDefinition` impl, a route in `router.rs` and an
//! entry in `registry.rs`; the server picks it up without changes.

pub mod definitions;
mod error;
pub mod presentation;
mod registry;
pub mod router;
pub mod validation;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
