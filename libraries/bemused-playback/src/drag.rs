//! Drag-reorder gesture math
//!
//! Pure bookkeeping for pointer-driven playlist reordering; no DOM.
//! The host wires the element listeners and feeds geometry in:
//! drag-start captures the source index, drag-over picks an insertion
//! side from the pointer's vertical position against the hovered item's
//! midpoint, drop derives the target index for
//! [`PlayerController::reorder`](crate::PlayerController::reorder).
//!
//! Touch inputs never start a drag session: touch-drag reordering is
//! unreliable across browsers, so touch devices are tap-to-play only.

/// What kind of input started the gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Which side of the hovered item the drop lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSide {
    /// Pointer in the top half: insert before the hovered item
    Before,
    /// Pointer in the bottom half: insert after it
    After,
}

/// An in-flight drag of one playlist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    from: usize,
}

impl DragSession {
    /// Start dragging the entry at `index`; `None` for touch inputs
    pub fn begin(kind: PointerKind, index: usize) -> Option<Self> {
        match kind {
            PointerKind::Mouse => Some(Self { from: index }),
            PointerKind::Touch => None,
        }
    }

    /// Index the drag started from
    pub fn source_index(&self) -> usize {
        self.from
    }

    /// Resolve the drop into a `(from, to)` pair for `reorder`
    pub fn drop_on(self, hovered_index: usize, side: DropSide) -> (usize, usize) {
        (self.from, drop_target(hovered_index, side))
    }
}

/// Classify the pointer position against the hovered item's midpoint
pub fn drop_side(pointer_y: f64, item_top: f64, item_height: f64) -> DropSide {
    let midpoint = item_top + item_height / 2.0;
    if pointer_y < midpoint {
        DropSide::Before
    } else {
        DropSide::After
    }
}

/// Target index for a drop on the given side of `hovered_index`
///
/// May equal the queue length for a drop below the last entry; the
/// controller clamps that to the last slot.
pub fn drop_target(hovered_index: usize, side: DropSide) -> usize {
    match side {
        DropSide::Before => hovered_index,
        DropSide::After => hovered_index + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_never_starts_a_session() {
        assert!(DragSession::begin(PointerKind::Touch, 2).is_none());
        assert!(DragSession::begin(PointerKind::Mouse, 2).is_some());
    }

    #[test]
    fn top_half_inserts_before() {
        // Item spans 100..140, midpoint 120
        assert_eq!(drop_side(110.0, 100.0, 40.0), DropSide::Before);
        assert_eq!(drop_side(119.9, 100.0, 40.0), DropSide::Before);
    }

    #[test]
    fn bottom_half_inserts_after() {
        assert_eq!(drop_side(120.0, 100.0, 40.0), DropSide::After);
        assert_eq!(drop_side(139.0, 100.0, 40.0), DropSide::After);
    }

    #[test]
    fn drop_resolves_to_reorder_pair() {
        let session = DragSession::begin(PointerKind::Mouse, 4).unwrap();
        assert_eq!(session.drop_on(1, DropSide::Before), (4, 1));

        let session = DragSession::begin(PointerKind::Mouse, 0).unwrap();
        assert_eq!(session.drop_on(2, DropSide::After), (0, 3));
    }
}
