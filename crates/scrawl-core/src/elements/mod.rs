//! Drawable element definitions for the whiteboard.

mod shape;
mod stroke;
mod text;

pub use shape::{Shape, ShapeKind};
pub use stroke::Stroke;
pub use text::{FontFamily, TextLabel};

use crate::error::{BoardError, BoardResult};
use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of an element, unique for the lifetime of a document.
///
/// Identifiers are handed out by [`Document`](crate::document::Document) from a
/// monotonic counter and are never reused, even after the element is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a raw identifier, e.g. one echoed back by the rendering surface.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value, usable as a render key.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data tag of an element. Kept apart from [`ToolMode`](crate::tools::ToolMode),
/// which describes what the user intends to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Stroke,
    Shape,
    Text,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Stroke => "stroke",
            ElementKind::Shape => "shape",
            ElementKind::Text => "text label",
        };
        f.write_str(name)
    }
}

/// RGBA8 color as entered through the color pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Parse a CSS hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`.
    /// The leading `#` is optional.
    pub fn from_hex(input: &str) -> BoardResult<Self> {
        let invalid = || BoardError::InvalidColor(input.to_string());
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        // from_str_radix would also take a sign
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let nibble = |i: usize| byte(i..i + 1).map(|v| v * 17);
                Ok(Self::new(nibble(0)?, nibble(1)?, nibble(2)?, 255))
            }
            6 => Ok(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, 255)),
            8 => Ok(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
            _ => Err(invalid()),
        }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::black()
    }
}

impl FromStr for RgbaColor {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Lowercase hex, with the alpha byte only when it is not opaque.
impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl From<Color> for RgbaColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<RgbaColor> for Color {
    fn from(color: RgbaColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Common behaviour of every element variant.
pub trait Drawable {
    /// Get the stable identifier.
    fn id(&self) -> ElementId;

    /// Get the data tag.
    fn kind(&self) -> ElementKind;

    /// Get the bounding box in surface coordinates.
    fn bounds(&self) -> Rect;

    /// Check whether `point` hits this element. `tolerance` only widens
    /// elements that have no interior (strokes).
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Get the draw color.
    fn color(&self) -> RgbaColor;
}

/// Tagged union of all element variants, as stored in the document and
/// handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Stroke(Stroke),
    Shape(Shape),
    Text(TextLabel),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Stroke(e) => e.id(),
            Element::Shape(e) => e.id(),
            Element::Text(e) => e.id(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Stroke(e) => e.kind(),
            Element::Shape(e) => e.kind(),
            Element::Text(e) => e.kind(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Element::Stroke(e) => e.bounds(),
            Element::Shape(e) => e.bounds(),
            Element::Text(e) => e.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Element::Stroke(e) => e.hit_test(point, tolerance),
            Element::Shape(e) => e.hit_test(point, tolerance),
            Element::Text(e) => e.hit_test(point, tolerance),
        }
    }

    pub fn color(&self) -> RgbaColor {
        match self {
            Element::Stroke(e) => e.color(),
            Element::Shape(e) => e.color(),
            Element::Text(e) => e.color(),
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Element::Stroke(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Element::Shape(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextLabel> {
        match self {
            Element::Text(t) => Some(t),
            _ => None,
        }
    }
}
