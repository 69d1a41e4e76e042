//! Raw frequency counts over the album collection.
//!
//! Counts are never rounded or sorted here. Keys keep the order in which they
//! first appear in the collection, which is rank order for a loaded store.

use std::collections::HashMap;

use super::album::Album;

/// Key used for albums without a release year.
pub const UNKNOWN_YEAR: &str = "unknown";

/// Occurrence counts per key, in first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct Counts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Counts {
    /// Record one occurrence of `key`.
    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    /// Count recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.index.get(key).map(|&position| self.entries[position].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate over `(key, count)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Consume into `(key, count)` pairs in first-appearance order.
    pub fn into_entries(self) -> Vec<(String, usize)> {
        self.entries
    }
}

impl<'a> FromIterator<&'a str> for Counts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = Self::default();
        for key in iter {
            counts.add(key);
        }
        counts
    }
}

/// One count per album, keyed by release year or [`UNKNOWN_YEAR`].
pub fn counts_by_year(albums: &[Album]) -> Counts {
    albums
        .iter()
        .map(|album| album.year().unwrap_or(UNKNOWN_YEAR))
        .collect()
}

/// One count per genre tag occurrence.
pub fn counts_by_genre(albums: &[Album]) -> Counts {
    albums
        .iter()
        .flat_map(|album| album.genres.iter().map(String::as_str))
        .collect()
}

/// One count per album, keyed by the exact (case-sensitive) artist name.
pub fn counts_by_artist(albums: &[Album]) -> Counts {
    albums.iter().map(|album| album.artist.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::fixtures::{album, decade_store, sample_store};

    #[test]
    fn test_counts_by_year_uses_unknown() {
        let store = sample_store();
        let counts = counts_by_year(store.albums());
        assert_eq!(counts.get("2007"), Some(3));
        assert_eq!(counts.get(UNKNOWN_YEAR), Some(1));
        assert_eq!(counts.get("2009"), None);
    }

    #[test]
    fn test_year_counts_sum_to_album_count() {
        let store = decade_store();
        let counts = counts_by_year(store.albums());
        assert_eq!(counts.total(), store.len());
        assert_eq!(counts.get("2007"), Some(40));
        assert_eq!(counts.get(UNKNOWN_YEAR), Some(1));
    }

    #[test]
    fn test_genre_counts_one_per_tag() {
        let store = decade_store();
        let counts = counts_by_genre(store.albums());
        let tags: usize = store.albums().iter().map(|a| a.genres.len()).sum();
        assert_eq!(counts.total(), tags);
        assert!(counts.total() > store.len());
        assert_eq!(counts.get("Rock"), Some(200));
        assert_eq!(counts.get("Electronic"), Some(66));
    }

    #[test]
    fn test_genre_counts_keep_duplicate_tags() {
        let albums = vec![album(1, "A", "X", Some("2000"), &["Rock", "Rock"])];
        let counts = counts_by_genre(&albums);
        assert_eq!(counts.get("Rock"), Some(2));
    }

    #[test]
    fn test_artist_counts_are_case_sensitive() {
        let albums = vec![
            album(1, "Radiohead", "Kid A", Some("2000"), &[]),
            album(2, "radiohead", "Amnesiac", Some("2001"), &[]),
            album(3, "Radiohead", "In Rainbows", Some("2007"), &[]),
        ];
        let counts = counts_by_artist(&albums);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("Radiohead"), Some(2));
        assert_eq!(counts.get("radiohead"), Some(1));
    }

    #[test]
    fn test_counts_keep_first_appearance_order() {
        let store = sample_store();
        let keys: Vec<_> = counts_by_artist(store.albums())
            .iter()
            .map(|(key, _)| key.to_string())
            .collect();
        assert_eq!(keys[0], "Radiohead");
        assert_eq!(keys[1], "Arcade Fire");
        assert_eq!(keys[2], "Daft Punk");
    }

    #[test]
    fn test_counts_empty_collection() {
        assert!(counts_by_year(&[]).is_empty());
        assert_eq!(counts_by_genre(&[]).total(), 0);
    }
}
