//! Error types for the playback core

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Track is missing a title or a playable url
    #[error("Invalid track: missing title or url")]
    InvalidTrack,

    /// A batch insert contained invalid tracks; nothing was inserted
    #[error("Invalid tracks in batch: {count} of them lack a title or url")]
    InvalidTracks { count: usize },

    /// Explicit user-targeted index outside the queue
    #[error("Index {index} out of range for queue of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The native media element rejected a command (autoplay policy,
    /// network failure). Caught inside the controller, never retried.
    #[error("Media element error: {0}")]
    Media(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
