//! Prompts domain module.
//!
//! Prompts are message templates filled with data from the album store,
//! asking a language model to reason about the ranked list.
//!
//! - `definitions/` holds one file per prompt (metadata, template, context)
//! - `templates.rs` is the `{{variable}}` / `{{#if}}` renderer
//! - `registry.rs` turns definitions into templates
//! - `service.rs` lists prompts and renders them against the store
//!
//! To add a prompt, implement `PromptDefinition` in a new definition file,
//! export it from `definitions/mod.rs` and register it in `registry.rs`.

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::{OverviewPrompt, PromptDefinition, YearContextPrompt};
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
pub use templates::PromptTemplate;
