//! Circle and rectangle shapes, defined by an anchor and a drag extent.

use super::{Drawable, ElementId, ElementKind, RgbaColor};
use crate::geometry;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Geometric kind of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Centered on the anchor, radius reaching the extent point.
    Circle,
    /// Axis-aligned box with corners at anchor and extent.
    Rectangle,
}

/// An outlined shape drawn by press-and-drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub(crate) id: ElementId,
    /// Geometric kind.
    pub kind: ShapeKind,
    /// Press-down location.
    pub(crate) anchor: Point,
    /// Current drag location.
    pub(crate) extent: Point,
    /// Outline color.
    pub color: RgbaColor,
    /// Outline thickness.
    pub thickness: f64,
}

impl Shape {
    /// Create a shape whose extent starts at the anchor.
    pub(crate) fn new(
        id: ElementId,
        kind: ShapeKind,
        color: RgbaColor,
        thickness: f64,
        anchor: Point,
    ) -> Self {
        Self {
            id,
            kind,
            anchor,
            extent: anchor,
            color,
            thickness,
        }
    }

    /// Replace the extent point.
    pub(crate) fn set_extent(&mut self, point: Point) {
        self.extent = point;
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn extent(&self) -> Point {
        self.extent
    }

    /// Circle radius: distance from anchor to extent.
    pub fn radius(&self) -> f64 {
        geometry::distance(self.anchor, self.extent)
    }

    /// Normalized box spanned by anchor and extent.
    pub fn rect(&self) -> Rect {
        geometry::normalized_rect(self.anchor, self.extent)
    }
}

impl Drawable for Shape {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Shape
    }

    fn bounds(&self) -> Rect {
        match self.kind {
            ShapeKind::Circle => {
                let r = self.radius();
                Rect::new(
                    self.anchor.x - r,
                    self.anchor.y - r,
                    self.anchor.x + r,
                    self.anchor.y + r,
                )
            }
            ShapeKind::Rectangle => self.rect(),
        }
    }

    fn hit_test(&self, point: Point, _tolerance: f64) -> bool {
        match self.kind {
            ShapeKind::Circle => geometry::point_in_circle(point, self.anchor, self.radius()),
            ShapeKind::Rectangle => geometry::point_in_rect(point, self.rect()),
        }
    }

    fn color(&self) -> RgbaColor {
        self.color
    }
}
