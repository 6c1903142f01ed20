//! Core types for the playback state machine

use serde::{Deserialize, Serialize};

/// Controller configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Start with shuffle enabled (default: off)
    pub shuffle: bool,
}

/// Result of a batch insert: where the tracks landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSpan {
    /// Index of the first inserted track
    pub start_index: usize,

    /// Number of inserted tracks
    pub count: usize,
}

/// Coarse playback phase, derived from the controller flags
///
/// Shuffle is an orthogonal mode flag layered over these, not a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackPhase {
    /// Nothing queued
    Empty,

    /// A track is loaded (or selectable) but not playing
    Paused,

    /// The media element is playing
    Playing,

    /// Linear playback (or an exhausted shuffle pass) reached the end;
    /// nothing will auto-advance until an explicit play-from-start
    Finished,
}

/// Snapshot of the playback flags for host consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    /// Position of the loaded track; `None` means no track selected
    pub current_index: Option<usize>,

    /// Mirrors the native media element's play/pause state
    pub is_playing: bool,

    /// Queue exhausted with no further auto-advance
    pub finished: bool,

    /// Shuffle mode flag
    pub shuffle: bool,
}

impl PlaybackStatus {
    /// Derive the coarse phase from the flags
    pub fn phase(&self, queue_len: usize) -> PlaybackPhase {
        if queue_len == 0 {
            PlaybackPhase::Empty
        } else if self.finished {
            PlaybackPhase::Finished
        } else if self.is_playing {
            PlaybackPhase::Playing
        } else {
            PlaybackPhase::Paused
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_derivation() {
        let mut status = PlaybackStatus {
            current_index: None,
            is_playing: false,
            finished: false,
            shuffle: false,
        };
        assert_eq!(status.phase(0), PlaybackPhase::Empty);
        assert_eq!(status.phase(3), PlaybackPhase::Paused);

        status.is_playing = true;
        assert_eq!(status.phase(3), PlaybackPhase::Playing);

        status.is_playing = false;
        status.finished = true;
        assert_eq!(status.phase(3), PlaybackPhase::Finished);
    }
}
