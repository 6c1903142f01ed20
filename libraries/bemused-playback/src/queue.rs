//! Ordered playback queue
//!
//! A flat, ordered sequence of tracks. Duplicates are allowed; the same
//! track may be queued more than once. The queue is deliberately dumb:
//! validation and current-index bookkeeping live in the controller,
//! which owns the only instance.

use bemused_core::Track;

/// Ordered, mutable sequence of queued tracks
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Track>,
}

impl Queue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Append a track; returns its index
    pub fn push(&mut self, track: Track) -> usize {
        self.tracks.push(track);
        self.tracks.len() - 1
    }

    /// Splice a batch of tracks in at `at`, preserving their order
    ///
    /// `at` may equal `len` (append). Callers bound-check first.
    pub fn insert_many(&mut self, at: usize, tracks: Vec<Track>) {
        debug_assert!(at <= self.tracks.len());
        self.tracks.splice(at..at, tracks);
    }

    /// Remove and return the track at `index`
    ///
    /// Callers bound-check first.
    pub fn remove(&mut self, index: usize) -> Track {
        debug_assert!(index < self.tracks.len());
        self.tracks.remove(index)
    }

    /// Move the track at `from` so it ends up at index `to`
    ///
    /// Remove-then-insert: the moved track's final position is exactly
    /// `to`, regardless of direction. Callers bound-check first.
    pub fn move_track(&mut self, from: usize, to: usize) {
        debug_assert!(from < self.tracks.len() && to < self.tracks.len());
        if from == to {
            return;
        }
        let track = self.tracks.remove(from);
        self.tracks.insert(to, track);
    }

    /// Drop every track
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Track at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// All queued tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of queued tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the queue holds no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bemused_core::ArtistRef;

    fn track(id: i64, title: &str) -> Track {
        Track {
            id,
            title: title.to_string(),
            artist: ArtistRef {
                id: 1,
                name: "Test Artist".to_string(),
            },
            album: None,
            url: format!("https://cdn/tracks/{id}.mp3"),
            duration: Some(180.0),
            image_path: None,
        }
    }

    #[test]
    fn push_appends_in_order() {
        let mut queue = Queue::new();
        assert_eq!(queue.push(track(1, "A")), 0);
        assert_eq!(queue.push(track(2, "B")), 1);
        assert_eq!(queue.get(0).unwrap().title, "A");
        assert_eq!(queue.get(1).unwrap().title, "B");
    }

    #[test]
    fn insert_many_splices_in_place() {
        let mut queue = Queue::new();
        queue.push(track(1, "A"));
        queue.push(track(2, "B"));

        queue.insert_many(1, vec![track(3, "X"), track(4, "Y")]);

        let titles: Vec<_> = queue.tracks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["A", "X", "Y", "B"]);
    }

    #[test]
    fn insert_many_at_end_appends() {
        let mut queue = Queue::new();
        queue.push(track(1, "A"));
        queue.insert_many(1, vec![track(2, "B")]);
        assert_eq!(queue.get(1).unwrap().title, "B");
    }

    #[test]
    fn move_track_lands_exactly_at_target() {
        let mut queue = Queue::new();
        for (id, title) in [(1, "A"), (2, "B"), (3, "C"), (4, "D")] {
            queue.push(track(id, title));
        }

        // Forward move
        queue.move_track(0, 2);
        let titles: Vec<_> = queue.tracks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["B", "C", "A", "D"]);

        // Backward move
        queue.move_track(3, 0);
        let titles: Vec<_> = queue.tracks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["D", "B", "C", "A"]);
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut queue = Queue::new();
        queue.push(track(1, "A"));
        queue.push(track(1, "A"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.get(0), queue.get(1));
    }

    #[test]
    fn remove_shifts_following_tracks() {
        let mut queue = Queue::new();
        queue.push(track(1, "A"));
        queue.push(track(2, "B"));
        queue.push(track(3, "C"));

        let removed = queue.remove(1);
        assert_eq!(removed.title, "B");
        assert_eq!(queue.get(1).unwrap().title, "C");
    }
}
