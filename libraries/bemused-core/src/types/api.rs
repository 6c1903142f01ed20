//! Remote API response payloads
//!
//! The JSON shapes the data-fetching collaborator returns. The core does
//! no HTTP itself; these records exist so every consumer deserializes
//! the same way.

use super::{Album, Artist, Track};
use serde::{Deserialize, Serialize};

/// Response of `/artist/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistPage {
    pub artist: Artist,
    /// Encyclopedia blurb, when one exists
    pub summary: Option<String>,
    pub albums: Vec<Album>,
}

/// Response of `/album/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumPage {
    pub artist: Artist,
    pub album: Album,
    pub tracks: Vec<Track>,
}

/// Response of `/search?q=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub albums: Vec<Album>,
}
