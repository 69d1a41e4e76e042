//! Resources domain module.
//!
//! Resources are readable documents; here each one is a view computed from
//! the album store when it is read.
//!
//! - `definitions/` holds one file per resource (URI, name, MIME type, store view)
//! - `registry.rs` turns definitions into listed entries
//! - `service.rs` lists entries and resolves reads
//!
//! To add a resource, implement `ResourceDefinition` in a new definition file,
//! export it from `definitions/mod.rs` and register it in `registry.rs`.

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::{GenresResource, ResourceDefinition};
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{ResourceEntry, ResourceService, StoreView};
