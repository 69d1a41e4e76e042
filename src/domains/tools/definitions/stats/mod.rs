//! Statistics tools over years, genres and artists.

pub mod artist;
pub mod genre;
pub mod year;

pub use artist::{ArtistStatisticsParams, ArtistStatisticsTool};
pub use genre::{GenreStatisticsParams, GenreStatisticsTool};
pub use year::{YearStatisticsParams, YearStatisticsTool};
