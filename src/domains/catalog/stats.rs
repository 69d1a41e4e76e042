//! Statistics derived from the aggregation counts.
//!
//! Each statistic can be filtered by a minimum count, sorted either by
//! descending count or by ascending key, and carries a percentage of the
//! total number of albums.
//!
//! Percentages are rounded to one decimal place, half away from zero
//! (`(x * 10).round() / 10`). Sorting by count is stable. Equal year counts
//! list in ascending year order with `unknown` last; equal genre and artist
//! counts keep the order in which the key first appears in the collection.

use serde::Serialize;
use std::collections::BTreeMap;

use super::aggregate::{Counts, counts_by_artist, counts_by_genre, counts_by_year};
use super::album::{Album, compare_names};

/// Ordering applied to statistic entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsOrder {
    /// Descending count. Ties are broken per statistic.
    #[default]
    ByCount,

    /// Ascending key, ignoring case.
    ByKey,
}

/// Round to one decimal place, half away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Share of `total` represented by `count`, in percent with one decimal.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_one_decimal(count as f64 / total as f64 * 100.0)
}

/// Filter and sort raw counts.
fn select(counts: Counts, min_count: usize, order: StatsOrder) -> Vec<(String, usize)> {
    let mut entries: Vec<_> = counts
        .into_entries()
        .into_iter()
        .filter(|(_, count)| *count >= min_count)
        .collect();

    match order {
        StatsOrder::ByCount => entries.sort_by(|(_, a), (_, b)| b.cmp(a)),
        StatsOrder::ByKey => entries.sort_by(|(a, _), (b, _)| compare_names(a, b)),
    }
    entries
}

// ============================================================================
// Year statistics
// ============================================================================

/// Album count for one release year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearStat {
    pub year: String,
    pub count: usize,
    pub percentage: f64,
}

/// Album counts per release year (`"unknown"` for albums without one).
pub fn year_statistics(albums: &[Album], order: StatsOrder) -> Vec<YearStat> {
    let total = albums.len();
    let mut entries = select(counts_by_year(albums), 1, StatsOrder::ByKey);
    if order == StatsOrder::ByCount {
        entries.sort_by(|(_, a), (_, b)| b.cmp(a));
    }
    entries
        .into_iter()
        .map(|(year, count)| YearStat {
            year,
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

// ============================================================================
// Genre statistics
// ============================================================================

/// Album count for one genre tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreStat {
    pub genre: String,
    pub count: usize,
    pub percentage: f64,
}

/// Album counts per genre tag, keeping tags with at least `min_count` albums.
///
/// Percentages are relative to the number of albums, so they can sum to
/// more than 100 when albums carry several tags.
pub fn genre_statistics(albums: &[Album], order: StatsOrder, min_count: usize) -> Vec<GenreStat> {
    let total = albums.len();
    select(counts_by_genre(albums), min_count, order)
        .into_iter()
        .map(|(genre, count)| GenreStat {
            genre,
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

// ============================================================================
// Artist statistics
// ============================================================================

/// Album count for one artist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistStat {
    pub artist: String,
    pub album_count: usize,
    pub percentage: f64,
}

/// Number of artists having a given number of albums.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDistribution {
    pub albums_per_artist: usize,
    pub number_of_artists: usize,
}

/// How albums are spread across artists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSummary {
    /// Distinct artists in the whole collection.
    pub total_artists: usize,

    /// Listed artists with more than one album.
    pub artists_with_multiple_albums: usize,

    /// Albums divided by distinct artists, one decimal.
    pub average_albums_per_artist: f64,

    /// Histogram over the listed artists, most albums first.
    pub album_distribution: Vec<AlbumDistribution>,
}

/// Artist entries plus an optional distribution summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistStatistics {
    pub artists: Vec<ArtistStat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ArtistSummary>,
}

/// Album counts per artist, keeping artists with at least `min_albums` albums.
///
/// The summary's total and average cover every artist; the multiple-album
/// count and the histogram cover only the artists that passed the filter.
pub fn artist_statistics(
    albums: &[Album],
    order: StatsOrder,
    min_albums: usize,
    show_summary: bool,
) -> ArtistStatistics {
    let total = albums.len();
    let counts = counts_by_artist(albums);
    let total_artists = counts.len();
    let entries = select(counts, min_albums, order);

    let summary = show_summary.then(|| {
        let mut histogram: BTreeMap<usize, usize> = BTreeMap::new();
        for (_, count) in &entries {
            *histogram.entry(*count).or_default() += 1;
        }

        ArtistSummary {
            total_artists,
            artists_with_multiple_albums: entries.iter().filter(|(_, count)| *count > 1).count(),
            average_albums_per_artist: if total_artists == 0 {
                0.0
            } else {
                round_one_decimal(total as f64 / total_artists as f64)
            },
            album_distribution: histogram
                .into_iter()
                .rev()
                .map(|(albums_per_artist, number_of_artists)| AlbumDistribution {
                    albums_per_artist,
                    number_of_artists,
                })
                .collect(),
        }
    });

    let artists = entries
        .into_iter()
        .map(|(artist, album_count)| ArtistStat {
            artist,
            album_count,
            percentage: percentage(album_count, total),
        })
        .collect();

    ArtistStatistics { artists, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::fixtures::{album, decade_store, sample_store};

    fn assert_sums_to_hundred(percentages: impl Iterator<Item = f64>) {
        let sum: f64 = percentages.sum();
        assert!((sum - 100.0).abs() < 1.0, "percentages sum to {sum}");
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(40, 200), 20.0);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(1, 8), 12.5);
        assert_eq!(percentage(1, 0), 0.0);
        assert_eq!(round_one_decimal(0.25), 0.3);
    }

    #[test]
    fn test_year_statistics_scenario() {
        let store = decade_store();
        let stats = year_statistics(store.albums(), StatsOrder::ByKey);

        let entry = stats.iter().find(|s| s.year == "2007").unwrap();
        assert_eq!(entry.count, 40);
        assert_eq!(entry.percentage, 20.0);

        let years: Vec<_> = stats.iter().map(|s| s.year.as_str()).collect();
        let mut sorted = years.clone();
        sorted.sort();
        assert_eq!(years, sorted);
        assert_eq!(years.last(), Some(&"unknown"));

        assert_sums_to_hundred(stats.iter().map(|s| s.percentage));
    }

    #[test]
    fn test_year_statistics_by_count() {
        let store = decade_store();
        let stats = year_statistics(store.albums(), StatsOrder::ByCount);
        assert_eq!(stats[0].year, "2007");
        assert!(stats.windows(2).all(|w| w[0].count >= w[1].count));
        assert_eq!(stats.iter().map(|s| s.count).sum::<usize>(), 200);
    }

    #[test]
    fn test_year_count_ties_in_ascending_year_order() {
        let albums = vec![
            album(1, "B", "x", Some("2005"), &[]),
            album(2, "A", "y", None, &[]),
            album(3, "C", "z", Some("2001"), &[]),
            album(4, "D", "w", Some("2003"), &[]),
            album(5, "E", "v", Some("2003"), &[]),
        ];
        let stats = year_statistics(&albums, StatsOrder::ByCount);
        let years: Vec<_> = stats.iter().map(|s| s.year.as_str()).collect();
        assert_eq!(years, vec!["2003", "2001", "2005", "unknown"]);
    }

    #[test]
    fn test_genre_count_ties_keep_first_appearance() {
        let albums = vec![
            album(1, "B", "x", Some("2005"), &["Rock", "Jazz"]),
            album(2, "A", "y", Some("2001"), &["Folk"]),
        ];
        let stats = genre_statistics(&albums, StatsOrder::ByCount, 1);
        let genres: Vec<_> = stats.iter().map(|s| s.genre.as_str()).collect();
        assert_eq!(genres, vec!["Rock", "Jazz", "Folk"]);
    }

    #[test]
    fn test_genre_statistics_min_count_and_order() {
        let store = sample_store();
        let stats = genre_statistics(store.albums(), StatsOrder::ByCount, 2);
        let genres: Vec<_> = stats.iter().map(|s| (s.genre.as_str(), s.count)).collect();
        assert_eq!(genres, vec![("Rock", 4), ("Electronic", 3)]);
        assert_eq!(stats[0].percentage, 50.0);
        assert_eq!(stats[1].percentage, 37.5);

        let by_name = genre_statistics(store.albums(), StatsOrder::ByKey, 1);
        let names: Vec<_> = by_name.iter().map(|s| s.genre.as_str()).collect();
        assert_eq!(
            names,
            vec!["Art Rock", "dance", "Electronic", "electronic", "Experimental", "Pop/R&B", "Rock"]
        );
    }

    #[test]
    fn test_artist_statistics_summary() {
        let store = decade_store();
        let stats = artist_statistics(store.albums(), StatsOrder::ByCount, 1, true);

        assert_eq!(stats.artists.len(), 150);
        assert_eq!(stats.artists[0].album_count, 2);
        assert_sums_to_hundred(stats.artists.iter().map(|a| a.percentage));

        let summary = stats.summary.unwrap();
        assert_eq!(summary.total_artists, 150);
        assert_eq!(summary.artists_with_multiple_albums, 50);
        assert_eq!(summary.average_albums_per_artist, 1.3);
        assert_eq!(
            summary.album_distribution,
            vec![
                AlbumDistribution { albums_per_artist: 2, number_of_artists: 50 },
                AlbumDistribution { albums_per_artist: 1, number_of_artists: 100 },
            ]
        );
    }

    #[test]
    fn test_artist_statistics_filtered_summary() {
        let store = decade_store();
        let stats = artist_statistics(store.albums(), StatsOrder::ByKey, 2, true);

        assert_eq!(stats.artists.len(), 50);
        assert!(stats.artists.iter().all(|a| a.album_count == 2));
        assert_eq!(stats.artists[0].artist, "Artist 1");
        assert_eq!(stats.artists[0].percentage, 1.0);

        let summary = stats.summary.unwrap();
        assert_eq!(summary.total_artists, 150);
        assert_eq!(summary.album_distribution.len(), 1);
    }

    #[test]
    fn test_artist_statistics_without_summary() {
        let store = sample_store();
        let stats = artist_statistics(store.albums(), StatsOrder::ByCount, 1, false);
        assert!(stats.summary.is_none());
        assert_eq!(stats.artists[0].artist, "Radiohead");
        assert_eq!(stats.artists[0].album_count, 2);

        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("summary").is_none());
        assert!(json["artists"][0].get("albumCount").is_some());
    }

    #[test]
    fn test_statistics_on_empty_collection() {
        assert!(year_statistics(&[], StatsOrder::ByCount).is_empty());
        assert!(genre_statistics(&[], StatsOrder::ByKey, 1).is_empty());

        let stats = artist_statistics(&[], StatsOrder::ByCount, 1, true);
        assert!(stats.artists.is_empty());
        let summary = stats.summary.unwrap();
        assert_eq!(summary.total_artists, 0);
        assert_eq!(summary.average_albums_per_artist, 0.0);
    }
}
