//! Track domain type

use super::{AlbumRef, ArtistRef};
use crate::format::format_duration;
use serde::{Deserialize, Serialize};

pub type TrackId = i64;

/// A playable track as returned by the remote API
///
/// Tracks are immutable values: the playback core queues them, plays
/// them, and reorders them, but never edits their fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist reference
    pub artist: ArtistRef,

    /// Album reference, if the track belongs to one
    pub album: Option<AlbumRef>,

    /// Playable media location
    pub url: String,

    /// Duration in seconds; unknown until media metadata loads
    pub duration: Option<f64>,

    /// Cover image path, resolved to a URL by the host
    pub image_path: Option<String>,
}

impl Track {
    /// Whether the track carries enough data to be queued
    ///
    /// A track needs at least a title and a playable url.
    pub fn is_playable(&self) -> bool {
        !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }

    /// One-line playlist rendering: `"3. Title - Artist (4:05)"`
    ///
    /// `index` is zero-based; the rendered number is one-based.
    /// The duration suffix is omitted while the duration is unknown.
    pub fn display_line(&self, index: usize) -> String {
        match self.duration {
            Some(secs) => format!(
                "{}. {} - {} ({})",
                index + 1,
                self.title,
                self.artist.name,
                format_duration(secs)
            ),
            None => format!("{}. {} - {}", index + 1, self.title, self.artist.name),
        }
    }
}
