//! Input events delivered by the host surface.
//!
//! Coordinates are in the surface's local space; the host is responsible for
//! any screen-to-canvas conversion before dispatch.

use crate::drag::Panel;
use crate::elements::ElementId;
use crate::text_draft::TextField;
use crate::tools::ToolMode;
use serde::{Deserialize, Serialize};

/// One discrete input to [`Board::handle`](crate::board::Board::handle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    ToolSelected {
        tool: ToolMode,
    },
    PointerDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    /// Pen color as CSS hex.
    ColorChanged {
        hex: String,
    },
    ThicknessChanged {
        thickness: f64,
    },
    TextFieldChanged {
        field: TextField,
    },
    TextSubmitted,
    TextCancelled,
    /// Delete the label being edited, or drop a new draft.
    TextDeleted,
    TextDoubleClicked {
        id: ElementId,
    },
    /// Double click anywhere; edits the topmost text label under the point.
    DoubleClicked {
        x: f64,
        y: f64,
    },
    ClearRequested,
    ToolbarDragStart {
        #[serde(default)]
        panel: Panel,
        x: f64,
        y: f64,
    },
    ToolbarDragMove {
        #[serde(default)]
        panel: Panel,
        x: f64,
        y: f64,
    },
    ToolbarDragEnd {
        #[serde(default)]
        panel: Panel,
    },
    ViewportResized {
        width: f64,
        height: f64,
    },
}
