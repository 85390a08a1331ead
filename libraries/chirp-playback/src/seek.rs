//! Seek/drag input mapper
//!
//! Converts pointer or touch coordinates relative to the progress-track
//! element into a normalized fraction in [0, 1], for both single-click
//! jumps and continuous drag scrubbing. One boolean tracks the drag across
//! the whole input surface; move events are mapped only while it is set.

use serde::{Deserialize, Serialize};

/// Horizontal bounding box of the progress-track element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackBounds {
    /// Left edge in the same coordinate space as pointer events
    pub left: f64,

    /// Element width; a degenerate width maps everything to 0
    pub width: f64,
}

impl TrackBounds {
    /// Construct bounds from a bounding rect.
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

/// Map a pointer x-coordinate to a fraction in [0, 1].
///
/// Out-of-bounds coordinates clamp at both ends; a zero or negative width
/// yields 0 instead of dividing by zero.
pub fn fraction_at(x: f64, bounds: TrackBounds) -> f64 {
    if bounds.width <= 0.0 {
        return 0.0;
    }
    ((x - bounds.left) / bounds.width).clamp(0.0, 1.0)
}

/// Drag state shared across pointer and touch handlers.
///
/// The single-threaded host event loop is the only writer, so a plain
/// bool suffices; press/move/release mirror the down/move/up listeners.
#[derive(Debug, Default)]
pub struct DragTracker {
    dragging: bool,
}

impl DragTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer-down on the progress track: start dragging and map the
    /// press position.
    pub fn press(&mut self, x: f64, bounds: TrackBounds) -> f64 {
        self.dragging = true;
        fraction_at(x, bounds)
    }

    /// Pointer-move anywhere on the surface: maps the position only while
    /// a drag is active.
    pub fn drag_move(&mut self, x: f64, bounds: TrackBounds) -> Option<f64> {
        self.dragging.then(|| fraction_at(x, bounds))
    }

    /// Pointer-up/touch-end: the drag stops.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn midpoint_maps_to_half() {
        let bounds = TrackBounds::new(100.0, 400.0);
        assert_eq!(fraction_at(300.0, bounds), 0.5);
    }

    #[test]
    fn out_of_bounds_clamps() {
        let bounds = TrackBounds::new(100.0, 400.0);
        assert_eq!(fraction_at(-50.0, bounds), 0.0);
        assert_eq!(fraction_at(99.9, bounds), 0.0);
        assert_eq!(fraction_at(10_000.0, bounds), 1.0);
    }

    #[test]
    fn degenerate_width_maps_to_zero() {
        assert_eq!(fraction_at(123.0, TrackBounds::new(0.0, 0.0)), 0.0);
        assert_eq!(fraction_at(123.0, TrackBounds::new(0.0, -5.0)), 0.0);
    }

    #[test]
    fn drag_stays_active_across_moves_until_release() {
        let bounds = TrackBounds::new(0.0, 200.0);
        let mut tracker = DragTracker::new();

        // Moves before any press are ignored
        assert_eq!(tracker.drag_move(50.0, bounds), None);

        assert_eq!(tracker.press(50.0, bounds), 0.25);
        assert!(tracker.is_dragging());

        assert_eq!(tracker.drag_move(100.0, bounds), Some(0.5));
        assert_eq!(tracker.drag_move(300.0, bounds), Some(1.0));

        tracker.release();
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.drag_move(100.0, bounds), None);
    }

    proptest! {
        #[test]
        fn fraction_is_always_normalized(
            x in -1e6f64..1e6,
            left in -1e3f64..1e3,
            width in -1e3f64..1e3,
        ) {
            let f = fraction_at(x, TrackBounds::new(left, width));
            prop_assert!((0.0..=1.0).contains(&f));
        }
    }
}
