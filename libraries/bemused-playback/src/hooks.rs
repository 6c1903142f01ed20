//! Host callback hooks

use bemused_core::Track;

/// Callbacks the host supplies to the controller
///
/// All methods have no-op defaults; hosts override what they need.
pub trait PlayerHooks {
    /// A track was loaded and asked to play
    fn on_track_start(&mut self, track: &Track, index: usize) {
        let _ = (track, index);
    }

    /// The current track crossed five seconds of listening
    ///
    /// Fired once per track load; the host typically logs a play count.
    fn on_five_second_mark(&mut self, track: &Track) {
        let _ = track;
    }

    /// Cosmetic prefix rendered before a playlist entry
    fn track_prefix(&self, track: &Track, index: usize) -> String {
        let _ = (track, index);
        String::new()
    }
}

/// Hooks that do nothing; the default when the host supplies none
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl PlayerHooks for NoopHooks {}
