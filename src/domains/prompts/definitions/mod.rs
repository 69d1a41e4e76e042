//! One file per prompt. A new prompt implements [`PromptDefinition`], is
//! exported here and listed in `registry.rs`.

mod overview;
mod year_context;

pub use overview::OverviewPrompt;
pub use year_context::YearContextPrompt;

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;
use crate::domains::catalog::AlbumStore;

/// Metadata, body and variable source of one prompt.
pub trait PromptDefinition {
    const NAME: &'static str;
    const TITLE: &'static str;
    /// Shown when listing.
    const DESCRIPTION: &'static str;

    /// Description attached to a rendered prompt; may use {{variable}} placeholders.
    const RESULT_DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    fn arguments() -> Vec<PromptArgument>;

    /// Template variables computed from the album store.
    ///
    /// Argument validation beyond presence belongs here.
    fn context(
        store: &AlbumStore,
        arguments: &HashMap<String, String>,
    ) -> Result<HashMap<String, String>, PromptError>;
}
