//! Draft buffer behind the text popover.

use crate::elements::{ElementId, FontFamily, RgbaColor, TextLabel};
use crate::error::{BoardError, BoardResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Color, size and family applied to text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub color: RgbaColor,
    pub font_size: f64,
    pub font_family: FontFamily,
}

impl TextStyle {
    /// Default font size.
    pub const DEFAULT_FONT_SIZE: f64 = 20.0;
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: RgbaColor::black(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_family: FontFamily::default(),
        }
    }
}

/// Whether submitting the draft creates a label or rewrites one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum DraftTarget {
    #[default]
    Creating,
    Editing(ElementId),
}

/// A single popover field edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Body(String),
    /// CSS hex color.
    Color(String),
    Size(f64),
    Font(FontFamily),
}

/// The transient text-editing buffer.
///
/// A closed draft is always reset to an empty `Creating` buffer so the next
/// placement starts clean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextDraft {
    /// Whether the popover is showing.
    open: bool,
    /// Where a created label will be placed.
    anchor: Point,
    body: String,
    style: TextStyle,
    target: DraftTarget,
}

impl TextDraft {
    /// A closed, empty draft.
    pub fn new(style: TextStyle) -> Self {
        Self {
            open: false,
            anchor: Point::ZERO,
            body: String::new(),
            style,
            target: DraftTarget::Creating,
        }
    }

    /// Open an empty draft for a new label at `anchor`.
    pub fn open_creating(&mut self, anchor: Point, style: TextStyle) {
        *self = Self {
            open: true,
            anchor,
            body: String::new(),
            style,
            target: DraftTarget::Creating,
        };
    }

    /// Open a draft pre-filled from an existing label.
    pub fn open_editing(&mut self, label: &TextLabel) {
        *self = Self {
            open: true,
            anchor: label.position,
            body: label.body.clone(),
            style: TextStyle {
                color: label.color,
                font_size: label.font_size,
                font_family: label.font_family,
            },
            target: DraftTarget::Editing(label.id),
        };
    }

    /// Close and reset to an empty `Creating` draft.
    pub fn close(&mut self, style: TextStyle) {
        *self = Self::new(style);
    }

    /// Apply a popover field edit.
    pub fn set_field(&mut self, field: TextField) -> BoardResult<()> {
        match field {
            TextField::Body(body) => self.body = body,
            TextField::Color(hex) => self.style.color = RgbaColor::from_hex(&hex)?,
            TextField::Size(size) => {
                if !size.is_finite() || size <= 0.0 {
                    return Err(BoardError::InvalidFontSize(size));
                }
                self.style.font_size = size;
            }
            TextField::Font(family) => self.style.font_family = family,
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }

    pub fn target(&self) -> DraftTarget {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creating_starts_empty() {
        let mut draft = TextDraft::new(TextStyle::default());
        assert!(!draft.is_open());

        draft.open_creating(Point::new(100.0, 100.0), TextStyle::default());
        assert!(draft.is_open());
        assert_eq!(draft.anchor(), Point::new(100.0, 100.0));
        assert_eq!(draft.body(), "");
        assert_eq!(draft.target(), DraftTarget::Creating);
    }

    #[test]
    fn test_open_editing_prefills() {
        let label = TextLabel::new(
            ElementId::new(3),
            Point::new(5.0, 6.0),
            "Hi".to_string(),
            RgbaColor::new(255, 0, 0, 255),
            32.0,
            FontFamily::Monospace,
        );
        let mut draft = TextDraft::new(TextStyle::default());
        draft.open_editing(&label);

        assert_eq!(draft.target(), DraftTarget::Editing(ElementId::new(3)));
        assert_eq!(draft.body(), "Hi");
        assert_eq!(draft.anchor(), Point::new(5.0, 6.0));
        assert_eq!(draft.style().font_family, FontFamily::Monospace);
        assert_eq!(draft.style().color, RgbaColor::new(255, 0, 0, 255));
    }

    #[test]
    fn test_set_fields() {
        let mut draft = TextDraft::new(TextStyle::default());
        draft.set_field(TextField::Body("Hello".into())).unwrap();
        draft.set_field(TextField::Color("#00ff00".into())).unwrap();
        draft.set_field(TextField::Size(48.0)).unwrap();
        draft.set_field(TextField::Font(FontFamily::Serif)).unwrap();

        assert_eq!(draft.body(), "Hello");
        assert_eq!(draft.style().color, RgbaColor::new(0, 255, 0, 255));
        assert!((draft.style().font_size - 48.0).abs() < f64::EPSILON);
        assert_eq!(draft.style().font_family, FontFamily::Serif);
    }

    #[test]
    fn test_invalid_fields_leave_draft_unchanged() {
        let mut draft = TextDraft::new(TextStyle::default());
        let before = draft.clone();
        assert!(draft.set_field(TextField::Color("nope".into())).is_err());
        assert_eq!(
            draft.set_field(TextField::Size(0.0)),
            Err(BoardError::InvalidFontSize(0.0))
        );
        assert!(draft.set_field(TextField::Size(f64::NAN)).is_err());
        assert_eq!(draft, before);
    }

    #[test]
    fn test_close_resets() {
        let mut draft = TextDraft::new(TextStyle::default());
        draft.open_creating(Point::new(1.0, 2.0), TextStyle::default());
        draft.set_field(TextField::Body("x".into())).unwrap();
        draft.close(TextStyle::default());
        assert_eq!(draft, TextDraft::new(TextStyle::default()));
    }
}
