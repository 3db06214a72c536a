//! Board configuration supplied by the host surface.

use crate::elements::RgbaColor;
use crate::error::{BoardError, BoardResult};
use crate::text_draft::TextStyle;
use crate::tools::ToolMode;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Default hit tolerance in surface pixels.
pub const DEFAULT_HIT_TOLERANCE: f64 = 5.0;

/// Initial settings for a [`Board`](crate::board::Board).
///
/// Every field has a default, so a host may pass a partial JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Size of the drawing surface.
    pub viewport: Size,
    /// Extra reach when hit-testing strokes.
    pub hit_tolerance: f64,
    /// Tool active when the board starts.
    pub initial_tool: ToolMode,
    /// Pen color for strokes and shapes.
    pub pen_color: RgbaColor,
    /// Pen thickness for strokes and shapes.
    pub pen_thickness: f64,
    /// Thinnest pen the thickness input accepts.
    pub min_thickness: f64,
    /// Style a fresh text draft starts with.
    pub text: TextStyle,
    /// Initial tool bar position.
    pub toolbar_origin: Point,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(800.0, 600.0),
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
            initial_tool: ToolMode::default(),
            pen_color: RgbaColor::black(),
            pen_thickness: 2.0,
            min_thickness: 1.0,
            text: TextStyle::default(),
            toolbar_origin: Point::new(10.0, 10.0),
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON configuration object.
    pub fn from_json(json: &str) -> BoardResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BoardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every numeric setting is usable.
    pub fn validate(&self) -> BoardResult<()> {
        validate_viewport(self.viewport)?;
        if !self.hit_tolerance.is_finite() || self.hit_tolerance < 0.0 {
            return Err(BoardError::Config(format!(
                "hit_tolerance must be a non-negative number, got {}",
                self.hit_tolerance
            )));
        }
        if !self.min_thickness.is_finite() || self.min_thickness <= 0.0 {
            return Err(BoardError::Config(format!(
                "min_thickness must be positive, got {}",
                self.min_thickness
            )));
        }
        if !self.pen_thickness.is_finite() || self.pen_thickness < self.min_thickness {
            return Err(BoardError::InvalidThickness(self.pen_thickness));
        }
        if !self.text.font_size.is_finite() || self.text.font_size <= 0.0 {
            return Err(BoardError::InvalidFontSize(self.text.font_size));
        }
        Ok(())
    }
}

/// A viewport must have finite, non-negative dimensions.
pub fn validate_viewport(size: Size) -> BoardResult<()> {
    let ok = |v: f64| v.is_finite() && v >= 0.0;
    if ok(size.width) && ok(size.height) {
        Ok(())
    } else {
        Err(BoardError::InvalidViewport {
            width: size.width,
            height: size.height,
        })
    }
}
