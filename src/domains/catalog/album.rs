//! The album record.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Release years accepted by year-scoped operations: 2000 through 2009.
static DECADE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^200[0-9]$").expect("decade year pattern is valid"));

/// One ranked entry of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Artist name.
    pub artist: String,

    /// Album title.
    pub album: String,

    /// Position in the ranking, 1 being the best.
    pub rank: u32,

    /// Four-digit release year, if known.
    #[serde(default)]
    pub year: Option<String>,

    /// Genre tags in source order. Not deduplicated.
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Album {
    /// Release year, or `None` when absent or blank.
    pub fn year(&self) -> Option<&str> {
        self.year.as_deref().filter(|y| !y.is_empty())
    }
}

/// Check whether `year` is a textual year between 2000 and 2009.
pub fn is_decade_year(year: &str) -> bool {
    DECADE_YEAR.is_match(year)
}

/// Case-insensitive ordering of names, falling back to byte order so that
/// names differing only in case still sort deterministically.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
