//! Geometry helpers shared by the element model and hit-testing.

use kurbo::{Point, Rect, Vec2};

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Axis-aligned box spanned by two corner points, normalized so that
/// `x0 <= x1` and `y0 <= y1`.
pub fn normalized_rect(p1: Point, p2: Point) -> Rect {
    Rect::new(
        p1.x.min(p2.x),
        p1.y.min(p2.y),
        p1.x.max(p2.x),
        p1.y.max(p2.y),
    )
}

/// Whether `point` lies inside or on the circle.
pub fn point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    distance(point, center) <= radius
}

/// Whether `point` lies inside or on the edge of `rect`.
///
/// Unlike [`Rect::contains`], the right and bottom edges are inclusive, so a
/// zero-area box still contains its own corner.
pub fn point_in_rect(point: Point, rect: Rect) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Distance from a point to the line segment `a`→`b`.
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = a + seg * t;
    distance(point, proj)
}

/// Minimum distance from a point to a polyline.
///
/// A single-point polyline degenerates to the distance to that point; an
/// empty one is infinitely far away.
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => distance(point, *only),
        _ => points
            .windows(2)
            .map(|w| point_to_segment_dist(point, w[0], w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

/// Whether `point` is within `tolerance` of any segment of the polyline.
pub fn point_near_polyline(point: Point, points: &[Point], tolerance: f64) -> bool {
    point_to_polyline_dist(point, points) <= tolerance
}

/// Smallest box containing all the points, or `None` for an empty slice.
pub fn points_bounds(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    let mut rect = Rect::from_points(*first, *first);
    for p in rest {
        rect = rect.union_pt(*p);
    }
    Some(rect)
}

/// Vector from `from` to `to`.
pub fn delta(from: Point, to: Point) -> Vec2 {
    to - from
}
