//! Bemused - Playback Management
//!
//! Platform-agnostic playlist and playback management for Bemused.
//!
//! This crate provides:
//! - Playlist queue (add, batch insert, remove, drag-reorder, clear)
//! - Linear and shuffle playback with a visit-once shuffle session
//! - Previous/next navigation (shuffle "previous" replays the history)
//! - Finished-playlist handling (no wrap; restart from the top)
//! - Event buffer for UI synchronization
//! - Host hooks (track start, five-second play-count mark, row prefixes)
//!
//! # Architecture
//!
//! `bemused-playback` never touches a real audio element:
//! - No dependency on any browser or DOM bindings
//! - No dependency on bemused's HTTP client or views
//!
//! The host implements [`MediaElement`] over whatever actually plays
//! audio, forwards its native events in as [`MediaEvent`]s, and drains
//! [`PlayerEvent`]s back out to refresh the UI.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use bemused_core::{ArtistRef, Track};
//! use bemused_playback::{MediaElement, PlayerConfig, PlayerController, Result};
//!
//! // Implement MediaElement for your platform
//! #[derive(Default)]
//! struct NullMedia;
//!
//! impl MediaElement for NullMedia {
//!     fn set_source(&mut self, _url: &str) {}
//!     fn clear_source(&mut self) {}
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _position_secs: f64) {}
//! }
//!
//! let mut player = PlayerController::new(PlayerConfig::default(), Box::new(NullMedia));
//!
//! let track = Track {
//!     id: 1,
//!     title: "My Song".to_string(),
//!     artist: ArtistRef { id: 1, name: "Artist Name".to_string() },
//!     album: None,
//!     url: "https://example.net/tracks/1.mp3".to_string(),
//!     duration: Some(180.0),
//!     image_path: None,
//! };
//!
//! player.add_track(track)?;
//! player.load_and_play_track(0)?;
//! player.toggle_play_pause();
//!
//! for event in player.drain_events() {
//!     // refresh whatever the event names
//! }
//! # Ok::<(), bemused_playback::PlayerError>(())
//! ```
//!
//! # Example: Media Event Bridging
//!
//! ```rust
//! use bemused_playback::{MediaEvent, PlayerConfig, PlayerController};
//!
//! # use bemused_playback::{MediaElement, Result};
//! # #[derive(Default)]
//! # struct NullMedia;
//! # impl MediaElement for NullMedia {
//! #     fn set_source(&mut self, _url: &str) {}
//! #     fn clear_source(&mut self) {}
//! #     fn play(&mut self) -> Result<()> { Ok(()) }
//! #     fn pause(&mut self) {}
//! #     fn seek(&mut self, _position_secs: f64) {}
//! # }
//! let mut player = PlayerController::new(PlayerConfig::default(), Box::new(NullMedia));
//!
//! // Wire these to the native element's event listeners
//! player.handle_media_event(MediaEvent::Play);
//! player.handle_media_event(MediaEvent::TimeUpdate {
//!     position: 12.0,
//!     duration: Some(180.0),
//! });
//! player.handle_media_event(MediaEvent::Ended);
//! ```

mod controller;
pub mod drag;
mod error;
mod events;
mod hooks;
mod media;
mod queue;
mod shuffle;
pub mod types;

// Public exports
pub use controller::PlayerController;
pub use drag::{DragSession, DropSide, PointerKind};
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use hooks::{NoopHooks, PlayerHooks};
pub use media::{MediaElement, MediaEvent};
pub use types::{PlaybackPhase, PlaybackStatus, PlayerConfig, TrackSpan};
