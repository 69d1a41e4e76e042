//! Year context prompt definition.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::PromptDefinition;
use crate::domains::catalog::query::by_year;
use crate::domains::catalog::{AlbumStore, Lookup, is_decade_year};
use crate::domains::prompts::error::PromptError;

/// Asks for the musical significance of one year, listing its ranked albums.
pub struct YearContextPrompt;

impl PromptDefinition for YearContextPrompt {
    const NAME: &'static str = "analyze_year_context";
    const TITLE: &'static str = "Analyze Musical Year Context";
    const DESCRIPTION: &'static str = "Understand what made specific years notable in 2000s music";
    const RESULT_DESCRIPTION: &'static str = "Musical context analysis for {{year}}";

    fn template() -> &'static str {
        "Analyze the musical significance of {{year}} based on these Pitchfork-ranked albums:

{{year}} Albums in Top 200:
{{#if albums}}{{albums}}{{else}}No albums from {{year}} appear in the list.{{/if}}

Analysis Request:
1. What made {{year}} notable in music history?
2. What genres/movements were prominent that year?
3. What innovations or breakthroughs happened?
4. How does this year compare to others in the decade?

Use your music knowledge combined with this ranking data to provide context."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "year".to_string(),
            title: None,
            description: Some("Year to analyze (2000-2009)".to_string()),
            required: Some(true),
        }]
    }

    fn context(
        store: &AlbumStore,
        arguments: &HashMap<String, String>,
    ) -> Result<HashMap<String, String>, PromptError> {
        let year = arguments
            .get("year")
            .ok_or_else(|| PromptError::missing_argument("year"))?;
        if !is_decade_year(year) {
            return Err(PromptError::invalid_argument(
                "year",
                "Year must be between 2000 and 2009",
            ));
        }

        let albums = match by_year(store.albums(), year) {
            Lookup::Found(albums) => albums
                .iter()
                .map(|a| {
                    format!(
                        "#{}. {} - {} [{}]",
                        a.rank,
                        a.artist,
                        a.album,
                        a.genres.join(", ")
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Lookup::NotFound(_) => String::new(),
        };

        Ok(HashMap::from([("albums".to_string(), albums)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::fixtures::sample_store;

    fn year_args(year: &str) -> HashMap<String, String> {
        HashMap::from([("year".to_string(), year.to_string())])
    }

    #[test]
    fn test_year_context_metadata() {
        assert_eq!(YearContextPrompt::NAME, "analyze_year_context");
        let args = YearContextPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "year");
        assert_eq!(args[0].required, Some(true));
    }

    #[test]
    fn test_year_context_lists_albums_by_rank() {
        let context = YearContextPrompt::context(&sample_store(), &year_args("2007")).unwrap();
        assert_eq!(
            context["albums"],
            "#4. Radiohead - In Rainbows [Rock, Art Rock]\n\
             #5. LCD Soundsystem - Sound of Silver [Electronic, Rock]\n\
             #7. Panda Bear - Person Pitch [Experimental, electronic]"
        );
    }

    #[test]
    fn test_year_context_without_albums() {
        let context = YearContextPrompt::context(&sample_store(), &year_args("2003")).unwrap();
        assert_eq!(context["albums"], "");
    }

    #[test]
    fn test_year_context_rejects_out_of_decade_year() {
        for year in ["1999", "2010", "07", "abcd"] {
            let result = YearContextPrompt::context(&sample_store(), &year_args(year));
            assert!(matches!(result, Err(PromptError::InvalidArgument(_, _))));
        }
    }
}
