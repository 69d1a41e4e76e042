//! The prompts this server exposes.
//!
//! A new prompt is a `PromptDefinition` in `definitions/` plus one line in
//! each function below.

use super::definitions::{OverviewPrompt, PromptDefinition, YearContextPrompt};
use super::templates::{PromptTemplate, PromptTemplateBuilder};

fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplateBuilder::new(P::NAME)
        .title(P::TITLE)
        .description(P::DESCRIPTION)
        .result_description(P::RESULT_DESCRIPTION)
        .arguments(P::arguments())
        .template(P::template())
        .context(P::context)
        .build()
}

pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<YearContextPrompt>(),
        build_template::<OverviewPrompt>(),
    ]
}

pub fn prompt_names() -> Vec<&'static str> {
    vec![YearContextPrompt::NAME, OverviewPrompt::NAME]
}
