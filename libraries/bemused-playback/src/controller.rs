//! Playback controller - core orchestration
//!
//! Single authority over queue contents, current position, and shuffle
//! bookkeeping. Owns the one native media element and drives it; owns
//! the host hooks and fires them; pushes [`PlayerEvent`]s for the host
//! UI to drain. Everything runs to completion synchronously on the host
//! event loop, so operations never observe each other mid-mutation.

use crate::{
    error::{PlayerError, Result},
    events::PlayerEvent,
    hooks::{NoopHooks, PlayerHooks},
    media::{MediaElement, MediaEvent},
    queue::Queue,
    shuffle::{pick_other, remap_index, ShuffleHistory},
    types::{PlaybackPhase, PlaybackStatus, PlayerConfig, TrackSpan},
};
use bemused_core::Track;
use tracing::{debug, warn};

/// Seconds of listening after which a track counts as played
const PLAY_COUNT_MARK_SECS: f64 = 5.0;

/// Central playback management
///
/// State machine phases: `Empty` -> `Paused` <-> `Playing` -> `Finished`,
/// with `Finished` only reachable by exhausting the queue and left again
/// via an explicit play-from-start. Shuffle is an orthogonal mode flag.
pub struct PlayerController {
    // State
    queue: Queue,
    current_index: Option<usize>,
    is_playing: bool,
    finished: bool,

    // Shuffle session
    shuffle: bool,
    history: ShuffleHistory,

    // View-model: which playlist entry to highlight
    active_index: Option<usize>,

    // One-shot play-count latch, re-armed on track load only
    five_second_fired: bool,

    // Collaborators
    media: Box<dyn MediaElement>,
    hooks: Box<dyn PlayerHooks>,

    // Event buffer for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerController {
    /// Create a controller around a native media element
    pub fn new(config: PlayerConfig, media: Box<dyn MediaElement>) -> Self {
        Self::with_hooks(config, media, Box::new(NoopHooks))
    }

    /// Create a controller with host-supplied callback hooks
    pub fn with_hooks(
        config: PlayerConfig,
        media: Box<dyn MediaElement>,
        hooks: Box<dyn PlayerHooks>,
    ) -> Self {
        Self {
            queue: Queue::new(),
            current_index: None,
            is_playing: false,
            finished: false,
            shuffle: config.shuffle,
            history: ShuffleHistory::new(),
            active_index: None,
            five_second_fired: false,
            media,
            hooks,
            pending_events: Vec::new(),
        }
    }

    // ===== Queue Mutations =====

    /// Append a track to the queue; returns its index
    pub fn add_track(&mut self, track: Track) -> Result<usize> {
        if !track.is_playable() {
            return Err(PlayerError::InvalidTrack);
        }

        let index = self.queue.push(track);
        self.emit_queue_changed();
        Ok(index)
    }

    /// Insert a batch of tracks, atomically
    ///
    /// Every element is validated up front; one invalid track rejects
    /// the whole batch and leaves the queue untouched. With
    /// `insert_after_current` the batch lands immediately after the
    /// current track, otherwise at the end. Returns where it landed.
    pub fn add_tracks(&mut self, tracks: Vec<Track>, insert_after_current: bool) -> Result<TrackSpan> {
        let invalid = tracks.iter().filter(|t| !t.is_playable()).count();
        if invalid > 0 {
            return Err(PlayerError::InvalidTracks { count: invalid });
        }

        let at = if insert_after_current {
            self.current_index.map_or(self.queue.len(), |i| i + 1)
        } else {
            self.queue.len()
        };
        let count = tracks.len();

        self.history.shift_for_insert(at, count);
        self.queue.insert_many(at, tracks);
        self.emit_queue_changed();

        Ok(TrackSpan {
            start_index: at,
            count,
        })
    }

    /// Remove the track at `index`
    ///
    /// Soft no-op for stale gestures: out-of-bounds indices and the
    /// currently playing track are logged and ignored, never thrown.
    pub fn remove_track(&mut self, index: usize) {
        if index >= self.queue.len() {
            warn!(index, len = self.queue.len(), "remove_track index out of bounds, ignoring");
            return;
        }
        if self.current_index == Some(index) {
            warn!(index, "refusing to remove the currently playing track");
            return;
        }

        self.queue.remove(index);
        self.history.shift_for_remove(index);
        if let Some(current) = self.current_index {
            if index < current {
                self.current_index = Some(current - 1);
            }
        }

        if self.queue.is_empty() {
            self.reset_to_empty();
        } else {
            self.refresh_active();
        }
        self.emit_queue_changed();
    }

    /// Move the track at `from` so it ends up at `to` (drag-and-drop)
    ///
    /// The current track keeps playing and `current_index` follows it;
    /// shuffle history entries are renumbered the same way. A target one
    /// past the end (drop below the last entry) clamps to the last slot.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.queue.len();
        if from >= len {
            return Err(PlayerError::IndexOutOfRange { index: from, len });
        }
        let to = to.min(len - 1);
        if from == to {
            return Ok(());
        }

        self.queue.move_track(from, to);
        self.current_index = self.current_index.map(|c| remap_index(c, from, to));
        self.history.remap_for_move(from, to);
        self.refresh_active();
        self.emit_queue_changed();
        Ok(())
    }

    /// Empty the queue and reset to the empty playback state
    ///
    /// Idempotent: clearing an already-empty queue changes nothing.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.reset_to_empty();
        self.emit_queue_changed();
    }

    // ===== Playback Control =====

    /// Load the track at `index` into the media element and play it
    ///
    /// No-op on an empty queue; an invalid explicit index fails loudly.
    /// (Auto-advance paths compute their indices internally and never
    /// go through this bounds check.)
    pub fn load_and_play_track(&mut self, index: usize) -> Result<()> {
        if self.queue.is_empty() {
            return Ok(());
        }
        if index >= self.queue.len() {
            return Err(PlayerError::IndexOutOfRange {
                index,
                len: self.queue.len(),
            });
        }

        self.load_track(index);
        Ok(())
    }

    /// Advance to the next track
    ///
    /// Linear mode stops at the last index (no wrap) and marks the
    /// playlist finished. Shuffle mode picks uniformly among the indices
    /// this session has not visited; an exhausted pass finishes too.
    pub fn play_next_track(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        if self.shuffle {
            match self.history.pick_unvisited(self.queue.len()) {
                Some(next) => self.load_track(next),
                None => self.finish_playlist(),
            }
        } else {
            match self.current_index {
                Some(i) if i + 1 < self.queue.len() => self.load_track(i + 1),
                Some(_) => self.finish_playlist(),
                None => self.load_track(0),
            }
        }
    }

    /// Go back one track
    ///
    /// In shuffle mode with more than one history entry this exactly
    /// reverses the previous pick. Otherwise linear navigation wraps
    /// from the first track to the last.
    pub fn play_previous_track(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        self.finished = false;

        if self.shuffle {
            if let Some(previous) = self.history.pop_previous() {
                self.load_track(previous);
                return;
            }
        }

        let len = self.queue.len();
        let previous = match self.current_index {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.load_track(previous);
    }

    /// Flip shuffle mode
    ///
    /// Enabling starts a fresh session: the history is seeded with the
    /// current track (so "previous" can return to it) and one random
    /// *different* track starts playing. Disabling just drops the
    /// session; linear order resumes from wherever playback is.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        self.history.clear();
        debug!(shuffle = self.shuffle, "shuffle toggled");

        if self.shuffle {
            if let Some(current) = self.current_index {
                self.history.record(current);
            }
            if self.queue.len() > 1 {
                if let Some(next) = pick_other(self.queue.len(), self.current_index) {
                    self.load_track(next);
                }
            }
        }
    }

    /// The play/pause affordance
    ///
    /// From the finished state this restarts the playlist from the
    /// first track; otherwise it requests play or pause on the media
    /// element as appropriate.
    pub fn toggle_play_pause(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        if self.finished {
            self.finished = false;
            self.load_track(0);
        } else if self.is_playing {
            self.media.pause();
            self.set_playing(false);
        } else {
            self.request_play();
        }
    }

    /// Seek within the current track (progress-bar scrub)
    pub fn seek(&mut self, position_secs: f64) {
        if self.current_index.is_some() {
            self.media.seek(position_secs.max(0.0));
        }
    }

    // ===== Native Media Event Bridging =====

    /// Feed a native media element event into the state machine
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Play => {
                self.finished = false;
                self.set_playing(true);
            }
            MediaEvent::Pause => {
                self.set_playing(false);
            }
            MediaEvent::Ended => {
                if self.queue.is_empty() {
                    return;
                }
                let at_last = self.current_index == Some(self.queue.len() - 1);
                if !self.shuffle && at_last {
                    self.finish_playlist();
                } else {
                    self.play_next_track();
                }
            }
            MediaEvent::TimeUpdate { position, duration } => {
                self.pending_events.push(PlayerEvent::PositionUpdate {
                    position_secs: position,
                    duration_secs: duration,
                });

                if position >= PLAY_COUNT_MARK_SECS && !self.five_second_fired {
                    if let Some(track) = self.current_track().cloned() {
                        self.five_second_fired = true;
                        self.hooks.on_five_second_mark(&track);
                    }
                }
            }
        }
    }

    // ===== State Queries =====

    /// Snapshot of the playback flags
    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus {
            current_index: self.current_index,
            is_playing: self.is_playing,
            finished: self.finished,
            shuffle: self.shuffle,
        }
    }

    /// Current coarse phase
    pub fn phase(&self) -> PlaybackPhase {
        self.status().phase(self.queue.len())
    }

    /// The track loaded into the media element, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.current_index.and_then(|i| self.queue.get(i))
    }

    /// All queued tracks in order
    pub fn queue_tracks(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Number of queued tracks
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue holds no tracks
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Which playlist entry the UI should highlight
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Whether shuffle mode is on
    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    /// Indices visited during the current shuffle session, oldest first
    pub fn shuffle_history(&self) -> &[usize] {
        self.history.entries()
    }

    /// Rendered playlist lines, prefix hook applied
    pub fn playlist_lines(&self) -> Vec<String> {
        self.queue
            .tracks()
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let prefix = self.hooks.track_prefix(track, i);
                let line = track.display_line(i);
                if prefix.is_empty() {
                    line
                } else {
                    format!("{prefix} {line}")
                }
            })
            .collect()
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns everything emitted since the last drain; the host calls
    /// this after each operation or forwarded media event.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal Transitions =====

    /// Load and play a known-valid index
    fn load_track(&mut self, index: usize) {
        debug_assert!(index < self.queue.len());

        // Re-point the media element only when switching tracks or
        // restarting from pause; a redundant load would rewind playback.
        if self.current_index != Some(index) || !self.is_playing {
            let Some(track) = self.queue.get(index).cloned() else {
                return;
            };

            self.media.set_source(&track.url);
            self.current_index = Some(index);
            self.five_second_fired = false;
            if self.shuffle {
                self.history.record(index);
            }
            self.hooks.on_track_start(&track, index);
            self.pending_events.push(PlayerEvent::TrackStarted {
                index,
                track_id: track.id,
            });
        }

        self.finished = false;
        self.request_play();
        self.set_active(Some(index));
    }

    /// Ask the media element to play; a rejection leaves us paused
    ///
    /// Autoplay-blocked and network-failed play requests are logged and
    /// surfaced as an event. No automatic retry.
    fn request_play(&mut self) {
        match self.media.play() {
            Ok(()) => self.set_playing(true),
            Err(err) => {
                warn!(error = %err, "media element rejected play request");
                self.pending_events.push(PlayerEvent::Error {
                    message: err.to_string(),
                });
                self.set_playing(false);
            }
        }
    }

    /// The queue is exhausted: stop advancing, highlight the top
    fn finish_playlist(&mut self) {
        self.finished = true;
        self.media.pause();
        self.set_playing(false);
        self.pending_events.push(PlayerEvent::PlaylistFinished);
        if !self.queue.is_empty() {
            self.set_active(Some(0));
        }
    }

    /// Everything gone: pause, detach the source, zero the readouts
    fn reset_to_empty(&mut self) {
        self.current_index = None;
        self.finished = false;
        self.history.clear();
        self.five_second_fired = false;
        self.media.pause();
        self.media.clear_source();
        self.set_playing(false);
        self.set_active(None);
        self.pending_events.push(PlayerEvent::PositionUpdate {
            position_secs: 0.0,
            duration_secs: None,
        });
    }

    /// Highlight tracks the current index outside the finished state
    fn refresh_active(&mut self) {
        let target = if self.finished && !self.queue.is_empty() {
            Some(0)
        } else {
            self.current_index
        };
        self.set_active(target);
    }

    fn set_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            let phase = self.phase();
            self.pending_events.push(PlayerEvent::StateChanged { phase });
        }
    }

    fn set_active(&mut self, index: Option<usize>) {
        if self.active_index != index {
            self.active_index = index;
            self.pending_events
                .push(PlayerEvent::ActiveItemChanged { index });
        }
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }
}
