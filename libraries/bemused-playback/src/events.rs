//! Playback events
//!
//! Event-based UI synchronization: the controller pushes events into a
//! pending buffer as side effects of operations and media transitions;
//! the host drains the buffer (per frame or per gesture) and refreshes
//! whatever the events name. Keeps the controller free of any direct
//! view dependency.

use crate::types::PlaybackPhase;
use bemused_core::types::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The coarse playback phase changed (play/pause affordance)
    StateChanged {
        /// The new phase
        phase: PlaybackPhase,
    },

    /// A track was loaded into the media element and asked to play
    TrackStarted {
        /// Queue index of the track
        index: usize,
        /// Its identifier, for host-side lookups
        track_id: TrackId,
    },

    /// Which playlist entry should be highlighted
    ActiveItemChanged {
        /// Entry to highlight; `None` clears the highlight
        index: Option<usize>,
    },

    /// Queue contents changed (add/remove/reorder/clear)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Periodic time-readout refresh
    PositionUpdate {
        /// Elapsed seconds
        position_secs: f64,
        /// Total seconds, once the media element knows it
        duration_secs: Option<f64>,
    },

    /// Linear playback (or an exhausted shuffle pass) reached the end
    PlaylistFinished,

    /// A native media command failed; playback stays paused
    Error {
        /// Human-readable description
        message: String,
    },
}
