//! Listing and rendering prompts.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;
use crate::domains::catalog::AlbumStore;

/// Renders registered prompt templates against the album store.
pub struct PromptService {
    store: AlbumStore,
    /// Keyed by name, so listings come out sorted.
    templates: BTreeMap<String, PromptTemplate>,
}

impl PromptService {
    pub fn new(store: AlbumStore) -> Self {
        let mut service = Self {
            store,
            templates: BTreeMap::new(),
        };
        get_all_prompts()
            .into_iter()
            .for_each(|template| service.insert(template));
        service
    }

    /// Add a template, replacing any previous one with the same name.
    pub fn insert(&mut self, template: PromptTemplate) {
        debug!(name = %template.name, "Registered prompt");
        self.templates.insert(template.name.clone(), template);
    }

    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.templates.values().map(listing).collect()
    }

    /// Render `name` into a single user message.
    ///
    /// Required arguments are checked before the template's context runs.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let Some(template) = self.templates.get(name) else {
            return Err(PromptError::not_found(name));
        };
        let arguments = arguments.unwrap_or_default();

        if let Some(missing) = template
            .arguments
            .iter()
            .filter(|arg| arg.required == Some(true))
            .find(|arg| !arguments.contains_key(&arg.name))
        {
            return Err(PromptError::missing_argument(&missing.name));
        }

        info!(prompt = name, "Rendering prompt");
        let (description, text) = template.render_with_store(&self.store, &arguments)?;
        Ok(GetPromptResult {
            description,
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}

fn listing(template: &PromptTemplate) -> Prompt {
    Prompt {
        name: template.name.clone(),
        title: template.title.clone(),
        description: template.description.clone(),
        arguments: Some(template.arguments.clone()),
        icons: None,
        meta: None,
    }
}
