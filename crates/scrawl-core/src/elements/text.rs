//! Text label element.

use super::{Drawable, ElementId, ElementKind, RgbaColor};
use crate::geometry;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Font family options offered by the text popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    #[default]
    Sans,
    Serif,
    Monospace,
    Handwritten,
}

impl FontFamily {
    /// Get the font family name as used by the renderer.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Sans => "Arial",
            FontFamily::Serif => "Times New Roman",
            FontFamily::Monospace => "Courier New",
            FontFamily::Handwritten => "Comic Sans MS",
        }
    }

    /// Get all available font families.
    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::Sans,
            FontFamily::Serif,
            FontFamily::Monospace,
            FontFamily::Handwritten,
        ]
    }

    /// Average glyph advance as a fraction of the font size.
    /// Rough, empirically picked values.
    fn char_width_factor(&self) -> f64 {
        match self {
            FontFamily::Sans => 0.55,
            FontFamily::Serif => 0.50,
            FontFamily::Monospace => 0.60,
            FontFamily::Handwritten => 0.58,
        }
    }
}

/// A text label placed through the text popover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub(crate) id: ElementId,
    /// Top-left corner of the label box.
    pub position: Point,
    /// The text content.
    pub body: String,
    /// Text color.
    pub color: RgbaColor,
    /// Font size in pixels.
    pub font_size: f64,
    /// Font family.
    pub font_family: FontFamily,
}

impl TextLabel {
    /// Line height as a multiple of the font size.
    pub const LINE_HEIGHT: f64 = 1.2;

    pub(crate) fn new(
        id: ElementId,
        position: Point,
        body: String,
        color: RgbaColor,
        font_size: f64,
        font_family: FontFamily,
    ) -> Self {
        Self {
            id,
            position,
            body,
            color,
            font_size,
            font_family,
        }
    }

    /// Replace every editable field at once.
    pub(crate) fn update(
        &mut self,
        body: String,
        color: RgbaColor,
        font_size: f64,
        font_family: FontFamily,
    ) {
        self.body = body;
        self.color = color;
        self.font_size = font_size;
        self.font_family = font_family;
    }

    /// Estimated rendered width: the widest line at the family's average
    /// glyph width, never narrower than one em so empty labels stay clickable.
    fn approximate_width(&self) -> f64 {
        let max_line_len = self
            .body
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let width = max_line_len as f64 * self.font_size * self.font_family.char_width_factor();
        width.max(self.font_size)
    }

    /// Estimated rendered height from the line count.
    fn approximate_height(&self) -> f64 {
        let line_count = self.body.lines().count().max(1);
        // lines() drops a trailing empty line
        let line_count = if self.body.ends_with('\n') {
            line_count + 1
        } else {
            line_count
        };
        line_count as f64 * self.font_size * Self::LINE_HEIGHT
    }
}

impl Drawable for TextLabel {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Text
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.approximate_width(),
            self.position.y + self.approximate_height(),
        )
    }

    fn hit_test(&self, point: Point, _tolerance: f64) -> bool {
        geometry::point_in_rect(point, self.bounds())
    }

    fn color(&self) -> RgbaColor {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(body: &str) -> TextLabel {
        TextLabel::new(
            ElementId::new(1),
            Point::new(100.0, 100.0),
            body.to_string(),
            RgbaColor::black(),
            20.0,
            FontFamily::Sans,
        )
    }

    #[test]
    fn test_bounds_grow_with_widest_line() {
        let short = label("Hi").bounds();
        let long = label("Hi\nHello there").bounds();
        assert!(long.width() > short.width());
        assert!((long.height() - 2.0 * 20.0 * TextLabel::LINE_HEIGHT).abs() < 1e-9);
        assert!((short.x0 - 100.0).abs() < f64::EPSILON);
        assert!((short.y0 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_label_keeps_minimum_box() {
        let bounds = label("").bounds();
        assert!((bounds.width() - 20.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_hit_test() {
        let text = label("Hello World");
        let center = text.bounds().center();
        assert!(text.hit_test(center, 0.0));
        assert!(!text.hit_test(Point::new(0.0, 0.0), 0.0));
    }

    #[test]
    fn test_update_keeps_identity() {
        let mut text = label("Hi");
        text.update("Bye".to_string(), RgbaColor::white(), 32.0, FontFamily::Serif);
        assert_eq!(text.id(), ElementId::new(1));
        assert_eq!(text.body, "Bye");
        assert_eq!(text.font_family, FontFamily::Serif);
        assert!((text.font_size - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_font_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            FontFamily::all().iter().map(FontFamily::name).collect();
        assert_eq!(names.len(), FontFamily::all().len());
    }
}
