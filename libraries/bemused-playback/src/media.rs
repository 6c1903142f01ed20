//! Native media element abstraction
//!
//! The controller is the only owner of the one native playback
//! primitive (an `<audio>` element in the browser host). The host UI
//! never sets its source or transport state directly.

use crate::error::Result;

/// Commands the controller issues to the native playback primitive
///
/// `play` is fallible: browsers reject play requests that violate the
/// autoplay policy, and network errors surface the same way. Everything
/// else is fire-and-forget. Replacing the source implicitly abandons
/// any in-flight load of the previous one.
pub trait MediaElement {
    /// Point the element at a new media location and begin loading it
    fn set_source(&mut self, url: &str);

    /// Detach the current source (empty player)
    fn clear_source(&mut self);

    /// Request playback; `Err` means the request was rejected
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Seek to an absolute position in seconds
    fn seek(&mut self, position_secs: f64);
}

/// Events the native media element reports back
///
/// The host forwards these from the element's DOM listeners; each one
/// is a named input to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Playback started or resumed
    Play,

    /// Playback paused
    Pause,

    /// The current source played to its end
    Ended,

    /// Periodic position report
    TimeUpdate {
        /// Elapsed time in seconds
        position: f64,
        /// Total duration in seconds, once known
        duration: Option<f64>,
    },
}

/// Scripted media element for unit tests
///
/// Records every command; `play` fails while `reject_play` is set,
/// mimicking a blocked autoplay request.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FakeMediaElement {
    pub source: Option<String>,
    pub playing: bool,
    pub position: f64,
    pub reject_play: bool,
    pub play_calls: usize,
    pub pause_calls: usize,
}

#[cfg(test)]
impl MediaElement for FakeMediaElement {
    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.playing = false;
        self.position = 0.0;
    }

    fn clear_source(&mut self) {
        self.source = None;
        self.playing = false;
        self.position = 0.0;
    }

    fn play(&mut self) -> Result<()> {
        self.play_calls += 1;
        if self.reject_play {
            return Err(crate::error::PlayerError::Media(
                "play() request was interrupted".to_string(),
            ));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.playing = false;
    }

    fn seek(&mut self, position_secs: f64) {
        self.position = position_secs;
    }
}
