//! Property-based tests for the playback controller
//!
//! Uses proptest to verify queue and shuffle invariants across many
//! random inputs.

use bemused_core::{ArtistRef, Track};
use bemused_playback::{
    MediaElement, MediaEvent, PlayerConfig, PlayerController, Result,
};
use proptest::prelude::*;
use std::collections::HashSet;

// ===== Helpers =====

/// Media element that accepts everything and remembers nothing
#[derive(Default)]
struct NullMedia;

impl MediaElement for NullMedia {
    fn set_source(&mut self, _url: &str) {}
    fn clear_source(&mut self) {}
    fn play(&mut self) -> Result<()> {
        Ok(())
    }
    fn pause(&mut self) {}
    fn seek(&mut self, _position_secs: f64) {}
}

fn arbitrary_track() -> impl Strategy<Value = Track> {
    (
        1i64..10_000,            // id
        "[A-Za-z][A-Za-z ]{0,29}", // title (non-blank so it is playable)
        "[A-Za-z ]{1,20}",       // artist
        proptest::option::of(1.0f64..600.0), // duration
    )
        .prop_map(|(id, title, artist, duration)| Track {
            id,
            title,
            artist: ArtistRef { id: 1, name: artist },
            album: None,
            url: format!("https://media.example.net/{id}.mp3"),
            duration,
            image_path: None,
        })
}

fn arbitrary_tracks() -> impl Strategy<Value = Vec<Track>> {
    prop::collection::vec(arbitrary_track(), 2..30)
}

fn player_with(tracks: Vec<Track>) -> PlayerController {
    let mut player = PlayerController::new(PlayerConfig::default(), Box::new(NullMedia));
    player
        .add_tracks(tracks, false)
        .expect("generated tracks are playable");
    player
}

// ===== Property Tests =====

proptest! {
    /// A full shuffle pass plays every queue index exactly once, then
    /// finishes instead of repeating.
    #[test]
    fn shuffle_pass_visits_each_index_exactly_once(tracks in arbitrary_tracks()) {
        let len = tracks.len();
        let mut player = player_with(tracks);
        player.load_and_play_track(0).unwrap();
        player.toggle_shuffle();

        // Keep ending tracks until the playlist finishes
        for _ in 0..len + 2 {
            if player.status().finished {
                break;
            }
            player.handle_media_event(MediaEvent::Ended);
        }

        prop_assert!(player.status().finished, "shuffle pass never finished");

        let history = player.shuffle_history();
        prop_assert_eq!(history.len(), len, "pass length != queue length");
        let distinct: HashSet<usize> = history.iter().copied().collect();
        prop_assert_eq!(distinct.len(), len, "shuffle repeated an index");
        prop_assert!(history.iter().all(|i| *i < len));
    }

    /// "Previous" in shuffle mode exactly reverses the pick sequence.
    #[test]
    fn shuffle_previous_reverses_picks(
        tracks in arbitrary_tracks(),
        steps in 1usize..8,
    ) {
        let mut player = player_with(tracks);
        player.load_and_play_track(0).unwrap();
        player.toggle_shuffle();

        let mut forward = vec![player.status().current_index.unwrap()];
        for _ in 0..steps {
            if player.status().finished {
                break;
            }
            player.play_next_track();
            if let Some(i) = player.status().current_index {
                if !player.status().finished {
                    forward.push(i);
                }
            }
        }

        // Walk back: each previous lands on the preceding forward pick
        while forward.len() > 1 {
            forward.pop();
            player.play_previous_track();
            prop_assert_eq!(
                player.status().current_index,
                forward.last().copied()
            );
        }
    }

    /// Random edit sequences never leave a dangling current index or a
    /// history entry outside the queue.
    #[test]
    fn edits_keep_indices_in_bounds(
        tracks in arbitrary_tracks(),
        extra in arbitrary_track(),
        operations in prop::collection::vec((0u8..4, 0usize..40, 0usize..40), 1..25),
    ) {
        let mut player = player_with(tracks);
        player.load_and_play_track(0).unwrap();
        player.toggle_shuffle();

        for (op, a, b) in operations {
            match op {
                0 => {
                    player.add_track(extra.clone()).unwrap();
                }
                1 => {
                    // May be a soft no-op; either way state must stay sane
                    player.remove_track(a);
                }
                2 => {
                    if a < player.queue_len() {
                        player.reorder(a, b).unwrap();
                    }
                }
                _ => {
                    player.play_next_track();
                }
            }

            let len = player.queue_len();
            if let Some(current) = player.status().current_index {
                prop_assert!(current < len, "current index out of bounds");
            }
            prop_assert!(
                player.shuffle_history().iter().all(|i| *i < len),
                "history entry out of bounds"
            );
            if let Some(active) = player.active_index() {
                prop_assert!(active < len, "active index out of bounds");
            }
        }
    }

    /// Reordering never changes which track is playing, only where it
    /// sits in the queue.
    #[test]
    fn reorder_preserves_current_track_identity(
        tracks in arbitrary_tracks(),
        moves in prop::collection::vec((0usize..40, 0usize..40), 1..15),
    ) {
        let mut player = player_with(tracks);
        player.load_and_play_track(0).unwrap();
        let playing = player.current_track().unwrap().clone();

        for (from, to) in moves {
            if from < player.queue_len() {
                player.reorder(from, to).unwrap();
            }
            prop_assert_eq!(player.current_track().unwrap(), &playing);
        }
    }
}
