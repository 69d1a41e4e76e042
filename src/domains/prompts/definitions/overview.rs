//! Decade overview prompt definition.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::PromptDefinition;
use crate::domains::catalog::AlbumStore;
use crate::domains::catalog::aggregate::UNKNOWN_YEAR;
use crate::domains::catalog::stats::{StatsOrder, genre_statistics, year_statistics};
use crate::domains::prompts::error::PromptError;

const TOP_YEARS: usize = 5;
const TOP_GENRES: usize = 10;
const TOP_ALBUMS: usize = 10;

/// Summarizes the whole decade: busiest years, common genres and the top albums.
pub struct OverviewPrompt;

impl PromptDefinition for OverviewPrompt {
    const NAME: &'static str = "2000s_overview";
    const TITLE: &'static str = "Analyze 2000s Music Overview";
    const DESCRIPTION: &'static str =
        "Get a simple overview of 2000s music trends based on Pitchfork's top 200 albums";
    const RESULT_DESCRIPTION: &'static str = "2000s music overview analysis";

    fn template() -> &'static str {
        "Analyze the 2000s music decade based on Pitchfork's top 200 albums.

Basic Stats:
- Total albums: {{total}}
- Years covered: 2000-2009

Most Productive Years:
{{top_years}}

Most Common Genres:
{{top_genres}}

Top 10 Albums:
{{top_albums}}

Questions to Answer:
1. What defined the 2000s music decade according to critics?
2. Which years and genres dominated critical acclaim?
3. What makes these top albums special?

Provide a simple overview of 2000s music culture based on this data."
    }

    fn arguments() -> Vec<PromptArgument> {
        Vec::new()
    }

    fn context(
        store: &AlbumStore,
        _arguments: &HashMap<String, String>,
    ) -> Result<HashMap<String, String>, PromptError> {
        let albums = store.albums();

        let top_years = year_statistics(albums, StatsOrder::ByCount)
            .iter()
            .take(TOP_YEARS)
            .map(|s| format!("{}: {} albums", s.year, s.count))
            .collect::<Vec<_>>()
            .join("\n");

        let top_genres = genre_statistics(albums, StatsOrder::ByCount, 1)
            .iter()
            .take(TOP_GENRES)
            .map(|s| format!("{}: {} albums", s.genre, s.count))
            .collect::<Vec<_>>()
            .join("\n");

        let top_albums = albums
            .iter()
            .take(TOP_ALBUMS)
            .map(|a| {
                format!(
                    "#{}. {} - {} ({})",
                    a.rank,
                    a.artist,
                    a.album,
                    a.year().unwrap_or(UNKNOWN_YEAR)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        Ok(HashMap::from([
            ("total".to_string(), albums.len().to_string()),
            ("top_years".to_string(), top_years),
            ("top_genres".to_string(), top_genres),
            ("top_albums".to_string(), top_albums),
        ]))
    }
}
