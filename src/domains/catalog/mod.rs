//! Catalog domain module.
//!
//! This module owns the ranked album collection and every computation made
//! over it. Tools, prompts and resources only format what this domain returns.
//!
//! ## Architecture
//!
//! - `album.rs` - The `Album` record and shared comparison helpers
//! - `source.rs` - Key-value sources the collection is fetched from
//! - `store.rs` - The write-once, rank-sorted `AlbumStore`
//! - `query.rs` - Filter, search and lookup operations
//! - `aggregate.rs` - Raw frequency counts by year, genre and artist
//! - `stats.rs` - Sorted, filtered, percentage-annotated statistics
//!
//! All operations are pure functions over `&[Album]`. The store is loaded
//! once at startup and shared read-only afterwards.

pub mod aggregate;
pub mod album;
mod error;
pub mod query;
pub mod source;
pub mod stats;
mod store;

#[cfg(test)]
pub(crate) mod fixtures;

pub use album::{Album, is_decade_year};
pub use error::CatalogError;
pub use query::Lookup;
pub use source::{AlbumSource, JsonFileSource, MemorySource};
pub use store::{ALBUMS_KEY, AlbumStore};
