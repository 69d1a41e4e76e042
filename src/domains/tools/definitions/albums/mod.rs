//! Album query tools: listing, search and lookups by rank, year, artist and genre.

pub mod by_artist;
pub mod by_genre;
pub mod by_rank;
pub mod by_year;
pub mod genres;
pub mod list;
pub mod search;

pub use by_artist::{AlbumsByArtistParams, AlbumsByArtistTool};
pub use by_genre::{AlbumsByGenreParams, AlbumsByGenreTool};
pub use by_rank::{AlbumByRankParams, AlbumByRankTool};
pub use by_year::{AlbumsByYearParams, AlbumsByYearTool};
pub use genres::ListGenresTool;
pub use list::ListAlbumsTool;
pub use search::{SearchAlbumsParams, SearchAlbumsTool};
