//! Scrawl Core Library
//!
//! Platform-agnostic document model and tool state machine for the Scrawl
//! annotation whiteboard. The host surface translates raw input into
//! [`Event`]s, feeds them to a [`Board`], and renders the resulting
//! elements itself.

pub mod board;
pub mod config;
pub mod document;
pub mod drag;
pub mod elements;
pub mod error;
pub mod event;
pub mod geometry;
pub mod text_draft;
pub mod tools;

pub use board::{Board, Cursor, InteractionView};
pub use config::BoardConfig;
pub use document::Document;
pub use drag::{DragController, Panel};
pub use elements::{
    Drawable, Element, ElementId, ElementKind, FontFamily, RgbaColor, Shape, ShapeKind, Stroke,
    TextLabel,
};
pub use error::{BoardError, BoardResult};
pub use event::Event;
pub use hit_test::{HoverProbe, hit_test};
pub use text_draft::{DraftTarget, TextDraft, TextField, TextStyle};
pub use tools::{DrawingState, ToolMode};
