//! Album fixtures shared by the catalog, tools, prompts and resources tests.

use super::album::Album;
use super::store::AlbumStore;

/// Build a single album record.
pub fn album(rank: u32, artist: &str, title: &str, year: Option<&str>, genres: &[&str]) -> Album {
    Album {
        artist: artist.to_string(),
        album: title.to_string(),
        rank,
        year: year.map(str::to_string),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

/// A small hand-written collection, deliberately out of rank order.
pub fn sample_albums() -> Vec<Album> {
    vec![
        album(4, "Radiohead", "In Rainbows", Some("2007"), &["Rock", "Art Rock"]),
        album(1, "Radiohead", "Kid A", Some("2000"), &["Rock", "Electronic"]),
        album(6, "The Radio Dept.", "Pet Grief", Some("2006"), &["Pop/R&B"]),
        album(2, "Arcade Fire", "Funeral", Some("2004"), &["Rock"]),
        album(8, "Some Band", "Radio", None, &[]),
        album(3, "Daft Punk", "Discovery", Some("2001"), &["Electronic", "dance"]),
        album(7, "Panda Bear", "Person Pitch", Some("2007"), &["Experimental", "electronic"]),
        album(5, "LCD Soundsystem", "Sound of Silver", Some("2007"), &["Electronic", "Rock"]),
    ]
}

/// Store built from [`sample_albums`].
pub fn sample_store() -> AlbumStore {
    AlbumStore::new(sample_albums())
}

/// Years other than 2007, cycled through for the decade fixture.
const OTHER_YEARS: [&str; 9] = [
    "2000", "2001", "2002", "2003", "2004", "2005", "2006", "2008", "2009",
];

/// A 200-album collection in reverse rank order.
///
/// Every fifth rank is from 2007 (40 albums), rank 199 has no year, every
/// third rank carries two genre tags, and artists repeat so that some have
/// two albums.
pub fn decade_albums() -> Vec<Album> {
    (1..=200u32)
        .rev()
        .map(|rank| {
            let year = if rank % 5 == 0 {
                Some("2007")
            } else if rank == 199 {
                None
            } else {
                Some(OTHER_YEARS[rank as usize % OTHER_YEARS.len()])
            };
            let genres: &[&str] = if rank % 3 == 0 {
                &["Rock", "Electronic"]
            } else {
                &["Rock"]
            };
            let artist = format!("Artist {}", rank % 150);
            album(rank, &artist, &format!("Album {rank}"), year, genres)
        })
        .collect()
}

/// Store built from [`decade_albums`].
pub fn decade_store() -> AlbumStore {
    AlbumStore::new(decade_albums())
}
