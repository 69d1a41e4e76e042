//! Domains module containing business logic organized by bounded contexts.
//!
//! `catalog` owns the album data and every computation over it; `tools`,
//! `prompts` and `resources` expose those computations over MCP.

pub mod catalog;
pub mod prompts;
pub mod resources;
pub mod tools;
