//! Tool modes and the pointer-held drawing sub-state.

use crate::elements::{ElementId, ShapeKind};
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolMode {
    /// Idle selection; only double-click editing reacts.
    Select,
    #[default]
    Pen,
    Circle,
    Rectangle,
    Text,
    SpotErase,
}

impl ToolMode {
    /// Shape kind created by a press-and-drag with this tool, if any.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolMode::Circle => Some(ShapeKind::Circle),
            ToolMode::Rectangle => Some(ShapeKind::Rectangle),
            _ => None,
        }
    }

    /// Whether a pointer press with this tool starts a drawing gesture.
    pub fn draws(self) -> bool {
        matches!(self, ToolMode::Pen | ToolMode::Circle | ToolMode::Rectangle)
    }

    /// Get all tools in toolbar order.
    pub fn all() -> &'static [ToolMode] {
        &[
            ToolMode::Select,
            ToolMode::Pen,
            ToolMode::Circle,
            ToolMode::Rectangle,
            ToolMode::Text,
            ToolMode::SpotErase,
        ]
    }
}

/// What the held pointer button is currently drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum DrawingState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Points are being appended to this stroke.
    Stroke(ElementId),
    /// The extent of this shape follows the pointer.
    Shape(ElementId),
}

impl DrawingState {
    /// The element being drawn, if any.
    pub fn element(self) -> Option<ElementId> {
        match self {
            DrawingState::Idle => None,
            DrawingState::Stroke(id) | DrawingState::Shape(id) => Some(id),
        }
    }

    /// Check if a gesture is active.
    pub fn is_active(self) -> bool {
        !matches!(self, DrawingState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_is_pen() {
        assert_eq!(ToolMode::default(), ToolMode::Pen);
    }

    #[test]
    fn test_shape_kinds() {
        assert_eq!(ToolMode::Circle.shape_kind(), Some(ShapeKind::Circle));
        assert_eq!(ToolMode::Rectangle.shape_kind(), Some(ShapeKind::Rectangle));
        assert_eq!(ToolMode::Pen.shape_kind(), None);
        let drawing: Vec<_> = ToolMode::all().iter().copied().filter(|t| t.draws()).collect();
        assert_eq!(drawing, vec![ToolMode::Pen, ToolMode::Circle, ToolMode::Rectangle]);
    }

    #[test]
    fn test_drawing_state() {
        let id = ElementId::new(4);
        assert_eq!(DrawingState::Stroke(id).element(), Some(id));
        assert!(DrawingState::Shape(id).is_active());
        assert!(!DrawingState::Idle.is_active());
        assert_eq!(DrawingState::Idle.element(), None);
    }
}
