//! Position tracking for draggable floating panels.

use crate::geometry;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Floating panels that can be dragged around the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    /// The main tool bar.
    #[default]
    Toolbar,
    /// The text editing popover.
    TextPopover,
}

/// Tracks one panel's position while it is dragged.
///
/// Each move adds the delta from the *previous* pointer sample, never the
/// distance from where the drag started, so dropped move events only lose
/// their own motion.
#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    /// Current panel position.
    position: Point,
    /// Last pointer sample while dragging.
    last_sample: Option<Point>,
}

impl DragController {
    /// Create a controller resting at `position`.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            last_sample: None,
        }
    }

    /// Current panel position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.last_sample.is_some()
    }

    /// Begin dragging from pointer sample `pointer`.
    pub fn start(&mut self, pointer: Point) {
        self.last_sample = Some(pointer);
    }

    /// Follow the pointer to `pointer`. Ignored when not dragging.
    pub fn drag_to(&mut self, pointer: Point) {
        if let Some(last) = self.last_sample {
            self.position += geometry::delta(last, pointer);
            self.last_sample = Some(pointer);
        }
    }

    /// Stop dragging; the panel stays where it is.
    pub fn end(&mut self) {
        self.last_sample = None;
    }

    /// Move the panel to `position` and stop any drag.
    pub fn place(&mut self, position: Point) {
        self.position = position;
        self.last_sample = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additive_deltas() {
        let mut drag = DragController::new(Point::new(10.0, 10.0));
        drag.start(Point::new(200.0, 300.0));
        drag.drag_to(Point::new(205.0, 300.0));
        drag.drag_to(Point::new(205.0, 307.0));
        drag.end();

        assert_eq!(drag.position(), Point::new(15.0, 17.0));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut drag = DragController::new(Point::new(10.0, 10.0));
        drag.drag_to(Point::new(500.0, 500.0));
        assert_eq!(drag.position(), Point::new(10.0, 10.0));

        drag.start(Point::new(0.0, 0.0));
        drag.drag_to(Point::new(1.0, 1.0));
        drag.end();
        drag.drag_to(Point::new(50.0, 50.0));
        assert_eq!(drag.position(), Point::new(11.0, 11.0));
    }

    #[test]
    fn test_restart_uses_new_origin() {
        let mut drag = DragController::new(Point::ZERO);
        drag.start(Point::new(100.0, 100.0));
        drag.drag_to(Point::new(110.0, 100.0));
        drag.end();

        drag.start(Point::new(0.0, 0.0));
        drag.drag_to(Point::new(0.0, 5.0));
        assert_eq!(drag.position(), Point::new(10.0, 5.0));
    }

    #[test]
    fn test_place_cancels_drag() {
        let mut drag = DragController::new(Point::ZERO);
        drag.start(Point::new(1.0, 1.0));
        drag.place(Point::new(40.0, 60.0));
        assert!(!drag.is_dragging());
        drag.drag_to(Point::new(9.0, 9.0));
        assert_eq!(drag.position(), Point::new(40.0, 60.0));
    }
}
