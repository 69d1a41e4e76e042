//! Prompt templates and their renderer.
//!
//! Bodies use `{{name}}` placeholders and `{{#if name}}..{{else}}..{{/if}}`
//! blocks. Variables come from the caller's arguments plus whatever the
//! template's [`PromptContext`] derives from the album store.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;
use crate::domains::catalog::AlbumStore;

/// Derives template variables from the album store and the caller's arguments.
pub type PromptContext =
    fn(&AlbumStore, &HashMap<String, String>) -> Result<HashMap<String, String>, PromptError>;

fn no_context(
    _store: &AlbumStore,
    _arguments: &HashMap<String, String>,
) -> Result<HashMap<String, String>, PromptError> {
    Ok(HashMap::new())
}

/// A named prompt: metadata, body template and the context function that
/// fills in data-derived variables.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub title: Option<String>,
    /// Shown in prompt listings.
    pub description: Option<String>,
    /// Shown with a rendered prompt; may use the body's placeholders.
    pub result_description: Option<String>,
    pub arguments: Vec<PromptArgument>,
    pub template: String,
    pub context: PromptContext,
}

impl PromptTemplate {
    /// Render the description and body against the album store.
    ///
    /// Context variables shadow caller arguments of the same name. Without a
    /// result description the listing description is returned as is.
    pub fn render_with_store(
        &self,
        store: &AlbumStore,
        arguments: &HashMap<String, String>,
    ) -> Result<(Option<String>, String), PromptError> {
        let mut variables = arguments.clone();
        variables.extend((self.context)(store, arguments)?);

        let description = match &self.result_description {
            Some(text) => Some(render_text(text, &variables)?),
            None => self.description.clone(),
        };
        let body = render_text(&self.template, &variables)?;
        Ok((description, body))
    }
}

/// Render a template string with the given variables.
///
/// Tags are `{{name}}`, `{{#if name}}`, `{{else}}` and `{{/if}}`; conditionals
/// nest. A variable is set when present and non-empty. Unknown variables
/// render as nothing. Substituted values are never re-scanned for tags.
fn render_text(template: &str, variables: &HashMap<String, String>) -> Result<String, PromptError> {
    let mut output = String::with_capacity(template.len());
    let mut branches: Vec<Branch> = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        let emitting = branches.iter().all(Branch::active);
        if emitting {
            output.push_str(&rest[..open]);
        }

        let tag_start = &rest[open + 2..];
        let close = tag_start
            .find("}}")
            .ok_or_else(|| PromptError::template("Unclosed tag"))?;
        let tag = Tag::parse(tag_start[..close].trim());
        rest = &tag_start[close + 2..];

        match tag {
            Tag::If(name) => branches.push(Branch {
                taken: variables.get(name).is_some_and(|v| !v.is_empty()),
                in_else: false,
            }),
            Tag::Else => {
                branches
                    .last_mut()
                    .ok_or_else(|| PromptError::template("{{else}} outside {{#if}}"))?
                    .in_else = true;
            }
            Tag::EndIf => {
                branches
                    .pop()
                    .ok_or_else(|| PromptError::template("{{/if}} without {{#if}}"))?;
            }
            Tag::Variable(name) => {
                if let Some(value) = variables.get(name).filter(|_| emitting) {
                    output.push_str(value);
                }
            }
        }
    }

    if !branches.is_empty() {
        return Err(PromptError::template("Missing {{/if}} tag"));
    }
    output.push_str(rest);
    Ok(output)
}

/// One open `{{#if}}` block.
struct Branch {
    taken: bool,
    in_else: bool,
}

impl Branch {
    /// Whether text at this nesting level is currently emitted.
    fn active(&self) -> bool {
        self.taken != self.in_else
    }
}

/// A `{{...}}` tag.
enum Tag<'a> {
    If(&'a str),
    Else,
    EndIf,
    Variable(&'a str),
}

impl<'a> Tag<'a> {
    fn parse(tag: &'a str) -> Self {
        match tag {
            "else" => Self::Else,
            "/if" => Self::EndIf,
            _ => match tag.strip_prefix("#if ") {
                Some(name) => Self::If(name.trim()),
                None => Self::Variable(tag),
            },
        }
    }
}

/// Assembles a [`PromptTemplate`]; unset fields stay empty.
pub struct PromptTemplateBuilder {
    template: PromptTemplate,
}

impl PromptTemplateBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            template: PromptTemplate {
                name: name.into(),
                title: None,
                description: None,
                result_description: None,
                arguments: Vec::new(),
                template: String::new(),
                context: no_context,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.template.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.template.description = Some(description.into());
        self
    }

    pub fn result_description(mut self, description: impl Into<String>) -> Self {
        self.template.result_description = Some(description.into());
        self
    }

    pub fn arguments(mut self, arguments: Vec<PromptArgument>) -> Self {
        self.template.arguments = arguments;
        self
    }

    /// Body text.
    pub fn template(mut self, body: impl Into<String>) -> Self {
        self.template.template = body.into();
        self
    }

    pub fn context(mut self, context: PromptContext) -> Self {
        self.template.context = context;
        self
    }

    pub fn build(self) -> PromptTemplate {
        self.template
    }
}
