//! Freehand pen stroke.

use super::{Drawable, ElementId, ElementKind, RgbaColor};
use crate::geometry;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A freehand pen path (series of sampled points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub(crate) id: ElementId,
    /// Sampled points in event order.
    pub(crate) points: Vec<Point>,
    /// Stroke color.
    pub color: RgbaColor,
    /// Stroke thickness.
    pub thickness: f64,
}

impl Stroke {
    /// Start a stroke at its first sampled point.
    pub(crate) fn new(id: ElementId, color: RgbaColor, thickness: f64, first_point: Point) -> Self {
        Self {
            id,
            points: vec![first_point],
            color,
            thickness,
        }
    }

    /// Append a sampled point to the path.
    pub(crate) fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Points in the path.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A stroke always has its first point, so this only holds for
    /// deserialized data.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Drawable for Stroke {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Stroke
    }

    fn bounds(&self) -> Rect {
        let half = self.thickness / 2.0;
        geometry::points_bounds(&self.points)
            .map(|r| r.inflate(half, half))
            .unwrap_or(Rect::ZERO)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        // Strokes have no interior; "inside" means near a segment.
        geometry::point_near_polyline(point, &self.points, tolerance + self.thickness / 2.0)
    }

    fn color(&self) -> RgbaColor {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(points: &[(f64, f64)]) -> Stroke {
        let mut s = Stroke::new(
            ElementId::new(1),
            RgbaColor::black(),
            2.0,
            Point::new(points[0].0, points[0].1),
        );
        for &(x, y) in &points[1..] {
            s.add_point(Point::new(x, y));
        }
        s
    }

    #[test]
    fn test_add_points_in_order() {
        let s = stroke(&[(0.0, 0.0), (10.0, 10.0), (20.0, 5.0)]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.points()[2], Point::new(20.0, 5.0));
    }

    #[test]
    fn test_bounds_include_half_thickness() {
        let s = stroke(&[(0.0, 0.0), (100.0, 50.0)]);
        let bounds = s.bounds();
        assert!((bounds.x0 + 1.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 51.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_near_segment() {
        let s = stroke(&[(0.0, 0.0), (100.0, 0.0)]);
        assert!(s.hit_test(Point::new(50.0, 5.0), 4.0));
        assert!(!s.hit_test(Point::new(50.0, 20.0), 4.0));
    }

    #[test]
    fn test_single_point_stroke_is_hittable() {
        let s = stroke(&[(30.0, 30.0)]);
        assert!(s.hit_test(Point::new(32.0, 30.0), 1.0));
        assert!(!s.hit_test(Point::new(40.0, 30.0), 1.0));
    }
}
