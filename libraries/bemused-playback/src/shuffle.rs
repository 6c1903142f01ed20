//! Shuffle session bookkeeping
//!
//! A shuffle session visits every queue index at most once, in random
//! order. The history doubles as the "previous" stack while shuffle is
//! active: popping it replays the preceding pick instead of rolling a
//! fresh one.
//!
//! The history stores *indices*, so every queue mutation that renumbers
//! tracks must renumber the history the same way; the controller calls
//! the shift/remap helpers alongside its own current-index math.

use rand::seq::SliceRandom;
use rand::thread_rng;

/// Ordered record of indices visited during the current shuffle session
///
/// Lifetime is bounded to one session: cleared when shuffle toggles in
/// either direction or when the queue is cleared.
#[derive(Debug, Clone, Default)]
pub struct ShuffleHistory {
    visited: Vec<usize>,
}

impl ShuffleHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited index, unless it is already the most recent entry
    ///
    /// Re-loading the current track (e.g. play after pause) must not
    /// grow the history, or "previous" would replay the same track.
    pub fn record(&mut self, index: usize) {
        if self.visited.last() != Some(&index) {
            self.visited.push(index);
        }
    }

    /// Step back one entry: pop the current one, return the new last
    ///
    /// Returns `None` when there is no earlier entry to return to.
    pub fn pop_previous(&mut self) -> Option<usize> {
        if self.visited.len() > 1 {
            self.visited.pop();
            self.visited.last().copied()
        } else {
            None
        }
    }

    /// Whether `index` was already visited this session
    pub fn contains(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    /// Indices of a queue of `len` tracks not yet visited
    pub fn unvisited(&self, len: usize) -> Vec<usize> {
        (0..len).filter(|i| !self.contains(*i)).collect()
    }

    /// Pick a uniformly random unvisited index, or `None` when the
    /// shuffle pass is complete
    pub fn pick_unvisited(&self, len: usize) -> Option<usize> {
        self.unvisited(len).choose(&mut thread_rng()).copied()
    }

    /// Forget the session
    pub fn clear(&mut self) {
        self.visited.clear();
    }

    /// Renumber after `removed` left the queue
    ///
    /// Drops the removed index and shifts every later entry down one.
    pub fn shift_for_remove(&mut self, removed: usize) {
        self.visited.retain(|i| *i != removed);
        for i in &mut self.visited {
            if *i > removed {
                *i -= 1;
            }
        }
    }

    /// Renumber after `count` tracks were spliced in at `at`
    pub fn shift_for_insert(&mut self, at: usize, count: usize) {
        for i in &mut self.visited {
            if *i >= at {
                *i += count;
            }
        }
    }

    /// Renumber after the track at `from` moved to `to`
    ///
    /// Same mapping as the controller's current index: the moved entry
    /// follows the track; entries the move crossed shift by one.
    pub fn remap_for_move(&mut self, from: usize, to: usize) {
        for i in &mut self.visited {
            *i = remap_index(*i, from, to);
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Whether the session has no entries
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Visited indices, oldest first
    pub fn entries(&self) -> &[usize] {
        &self.visited
    }
}

/// Where index `i` ends up after the track at `from` moves to `to`
///
/// Tie-break per the drag semantics: an item moving from before `i` to
/// at-or-after it decrements `i`; one moving from after `i` to
/// at-or-before it increments.
pub fn remap_index(i: usize, from: usize, to: usize) -> usize {
    if i == from {
        to
    } else if from < i && to >= i {
        i - 1
    } else if from > i && to <= i {
        i + 1
    } else {
        i
    }
}

/// Pick a random index in `0..len` different from `exclude`
///
/// Used to seed a fresh shuffle session with a track other than the one
/// already playing. `None` when no such index exists.
pub fn pick_other(len: usize, exclude: Option<usize>) -> Option<usize> {
    let candidates: Vec<usize> = (0..len).filter(|i| Some(*i) != exclude).collect();
    candidates.choose(&mut thread_rng()).copied()
}
