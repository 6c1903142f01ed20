//! Bemused - Core Domain Types
//!
//! Shared records and helpers for the bemused music browser/player.
//!
//! This crate defines the JSON shapes the remote API collaborator hands
//! to the UI and the playback core, plus small display helpers. It has
//! no knowledge of HTTP, storage, or playback; those live elsewhere.

pub mod format;
pub mod types;

pub use format::format_duration;
pub use types::{Album, AlbumPage, AlbumRef, Artist, ArtistPage, ArtistRef, SearchResults, Track};
