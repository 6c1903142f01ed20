//! Domain types

mod album;
mod api;
mod artist;
mod track;

pub use album::{Album, AlbumId, AlbumRef};
pub use api::{AlbumPage, ArtistPage, SearchResults};
pub use artist::{Artist, ArtistId, ArtistRef};
pub use track::{Track, TrackId};
