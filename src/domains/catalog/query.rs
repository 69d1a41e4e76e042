//! Filter, search and lookup operations over the album collection.
//!
//! Year, artist and genre queries always return their matches re-sorted by
//! ascending rank. Free-text search keeps the collection's own order.
//!
//! A query that matches nothing is not a failure: lookups return
//! [`Lookup::NotFound`] carrying a message meant to be shown as-is.

use std::collections::HashSet;

use super::album::{Album, compare_names};

/// Outcome of a lookup that may legitimately match nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// At least one album matched.
    Found(T),

    /// Nothing matched; the message explains what was looked for.
    NotFound(String),
}

impl<T> Lookup<T> {
    /// Whether the lookup matched.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Turn a filtered list into a lookup, sorted by ascending rank.
fn ranked<'a>(
    mut albums: Vec<&'a Album>,
    not_found: impl FnOnce() -> String,
) -> Lookup<Vec<&'a Album>> {
    if albums.is_empty() {
        return Lookup::NotFound(not_found());
    }
    albums.sort_by_key(|album| album.rank);
    Lookup::Found(albums)
}

/// The whole collection, unchanged.
pub fn list_all(albums: &[Album]) -> &[Album] {
    albums
}

/// Every distinct genre tag, sorted case-insensitively.
pub fn unique_genres(albums: &[Album]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut genres: Vec<String> = albums
        .iter()
        .flat_map(|album| album.genres.iter())
        .filter(|genre| seen.insert(genre.as_str()))
        .cloned()
        .collect();

    genres.sort_by(|a, b| compare_names(a, b));
    genres
}

/// Albums whose artist or title contains `query`, ignoring case.
///
/// Surrounding whitespace in `query` is ignored.
pub fn search<'a>(albums: &'a [Album], query: &str) -> Vec<&'a Album> {
    let needle = query.trim().to_lowercase();
    albums
        .iter()
        .filter(|album| {
            album.artist.to_lowercase().contains(&needle)
                || album.album.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The album at exactly `rank`.
pub fn by_rank(albums: &[Album], rank: u32) -> Lookup<&Album> {
    match albums.iter().find(|album| album.rank == rank) {
        Some(album) => Lookup::Found(album),
        None => Lookup::NotFound(format!("No album found at rank {rank}")),
    }
}

/// Albums released in `year`.
pub fn by_year<'a>(albums: &'a [Album], year: &str) -> Lookup<Vec<&'a Album>> {
    let matches = albums
        .iter()
        .filter(|album| album.year.as_deref() == Some(year))
        .collect();
    ranked(matches, || format!("No albums found for year {year}"))
}

/// Albums whose artist equals `artist`, ignoring case.
pub fn by_artist<'a>(albums: &'a [Album], artist: &str) -> Lookup<Vec<&'a Album>> {
    let wanted = artist.to_lowercase();
    let matches = albums
        .iter()
        .filter(|album| album.artist.to_lowercase() == wanted)
        .collect();
    ranked(matches, || format!("No albums found for artist \"{artist}\""))
}

/// Albums with at least one tag containing `genre`, ignoring case.
pub fn by_genre<'a>(albums: &'a [Album], genre: &str) -> Lookup<Vec<&'a Album>> {
    let wanted = genre.to_lowercase();
    let matches = albums
        .iter()
        .filter(|album| {
            album
                .genres
                .iter()
                .any(|tag| tag.to_lowercase().contains(&wanted))
        })
        .collect();
    ranked(matches, || format!("No albums found for genre \"{genre}\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::fixtures::{decade_store, sample_store};

    fn ranks(albums: &[&Album]) -> Vec<u32> {
        albums.iter().map(|a| a.rank).collect()
    }

    #[test]
    fn test_list_all_keeps_rank_order() {
        let store = sample_store();
        let all = list_all(store.albums());
        assert_eq!(all.len(), 8);
        assert!(all.windows(2).all(|w| w[0].rank < w[1].rank));
    }

    #[test]
    fn test_unique_genres() {
        let store = sample_store();
        let genres = unique_genres(store.albums());
        assert_eq!(
            genres,
            vec![
                "Art Rock",
                "dance",
                "Electronic",
                "electronic",
                "Experimental",
                "Pop/R&B",
                "Rock",
            ]
        );
    }

    #[test]
    fn test_unique_genres_empty_collection() {
        assert!(unique_genres(&[]).is_empty());
    }

    #[test]
    fn test_search_matches_artist_and_title() {
        let store = sample_store();
        let results = search(store.albums(), "radio");
        // Radiohead (artist), The Radio Dept. (artist), "Radio" (title)
        assert_eq!(ranks(&results), vec![1, 4, 6, 8]);
        assert!(results.iter().any(|a| a.album == "In Rainbows"));
        assert!(results.iter().any(|a| a.album == "Radio"));
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let store = sample_store();
        let upper = search(store.albums(), "  DISCOVERY ");
        assert_eq!(ranks(&upper), vec![3]);
        assert!(search(store.albums(), "nothing like this").is_empty());
    }

    #[test]
    fn test_by_rank() {
        let store = sample_store();
        match by_rank(store.albums(), 2) {
            Lookup::Found(album) => assert_eq!(album.album, "Funeral"),
            Lookup::NotFound(msg) => panic!("unexpected not found: {msg}"),
        }
    }

    #[test]
    fn test_by_rank_every_present_rank() {
        let store = decade_store();
        for album in store.albums() {
            let found: Vec<_> = store
                .albums()
                .iter()
                .filter(|a| a.rank == album.rank)
                .collect();
            assert_eq!(found.len(), 1);
            assert_eq!(by_rank(store.albums(), album.rank), Lookup::Found(album));
        }
    }

    #[test]
    fn test_by_rank_not_found_is_message() {
        let store = decade_store();
        assert_eq!(
            by_rank(store.albums(), 201),
            Lookup::NotFound("No album found at rank 201".to_string())
        );
    }

    #[test]
    fn test_by_year_scenario() {
        let store = decade_store();
        let Lookup::Found(albums) = by_year(store.albums(), "2007") else {
            panic!("expected albums for 2007");
        };
        assert_eq!(albums.len(), 40);
        assert!(albums.iter().all(|a| a.year.as_deref() == Some("2007")));
        assert!(albums.windows(2).all(|w| w[0].rank < w[1].rank));
    }

    #[test]
    fn test_by_year_not_found() {
        let store = sample_store();
        assert_eq!(
            by_year(store.albums(), "2009"),
            Lookup::NotFound("No albums found for year 2009".to_string())
        );
    }

    #[test]
    fn test_by_artist_case_insensitive_exact() {
        let store = sample_store();
        let lower = by_artist(store.albums(), "radiohead");
        let proper = by_artist(store.albums(), "Radiohead");
        assert_eq!(lower, proper);

        let Lookup::Found(albums) = lower else {
            panic!("expected Radiohead albums");
        };
        assert_eq!(ranks(&albums), vec![1, 4]);

        assert_eq!(
            by_artist(store.albums(), "Radio"),
            Lookup::NotFound("No albums found for artist \"Radio\"".to_string())
        );
    }

    #[test]
    fn test_by_genre_substring() {
        let store = sample_store();
        let Lookup::Found(albums) = by_genre(store.albums(), "ELECTRON") else {
            panic!("expected electronic albums");
        };
        assert_eq!(ranks(&albums), vec![1, 3, 5, 7]);

        let Lookup::Found(albums) = by_genre(store.albums(), "rock") else {
            panic!("expected rock albums");
        };
        assert_eq!(ranks(&albums), vec![1, 2, 4, 5]);

        assert!(!by_genre(store.albums(), "jazz").is_found());
    }
}
