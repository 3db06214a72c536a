//! The document: every committed and in-progress element, in z-order.

use crate::elements::{
    Element, ElementId, ElementKind, FontFamily, RgbaColor, Shape, ShapeKind, Stroke, TextLabel,
};
use crate::error::{BoardError, BoardResult};
use kurbo::{Point, Rect};
use std::collections::HashMap;

/// Elements keyed by stable id, plus their z-order (back to front).
///
/// At most one stroke or shape is *in progress* at a time; it is the only
/// stroke/shape that accepts mutation. Text labels stay editable for their
/// whole life.
#[derive(Debug, Clone)]
pub struct Document {
    /// All elements, keyed by ID.
    elements: HashMap<ElementId, Element>,
    /// Z-order of elements (back to front).
    z_order: Vec<ElementId>,
    /// Stroke or shape currently being drawn.
    in_progress: Option<ElementId>,
    /// Next identifier to hand out. Never rewinds.
    next_id: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            z_order: Vec::new(),
            in_progress: None,
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert(&mut self, element: Element) -> ElementId {
        let id = element.id();
        self.z_order.push(id);
        self.elements.insert(id, element);
        id
    }

    /// Start a stroke at `first_point` and make it the in-progress element.
    pub fn create_stroke(
        &mut self,
        color: RgbaColor,
        thickness: f64,
        first_point: Point,
    ) -> ElementId {
        let id = self.allocate_id();
        self.insert(Element::Stroke(Stroke::new(id, color, thickness, first_point)));
        self.in_progress = Some(id);
        id
    }

    /// Append a point to the in-progress stroke `id`.
    pub fn append_point(&mut self, id: ElementId, point: Point) -> BoardResult<()> {
        match self.in_progress_mut(id)? {
            Element::Stroke(stroke) => {
                stroke.add_point(point);
                Ok(())
            }
            _ => Err(BoardError::KindMismatch {
                id,
                expected: ElementKind::Stroke,
            }),
        }
    }

    /// Start a shape anchored at `anchor` and make it the in-progress element.
    pub fn create_shape(
        &mut self,
        kind: ShapeKind,
        color: RgbaColor,
        thickness: f64,
        anchor: Point,
    ) -> ElementId {
        let id = self.allocate_id();
        self.insert(Element::Shape(Shape::new(id, kind, color, thickness, anchor)));
        self.in_progress = Some(id);
        id
    }

    /// Replace the extent point of the in-progress shape `id`.
    pub fn update_shape_extent(&mut self, id: ElementId, point: Point) -> BoardResult<()> {
        match self.in_progress_mut(id)? {
            Element::Shape(shape) => {
                shape.set_extent(point);
                Ok(())
            }
            _ => Err(BoardError::KindMismatch {
                id,
                expected: ElementKind::Shape,
            }),
        }
    }

    /// Add a finished text label.
    pub fn create_text(
        &mut self,
        position: Point,
        body: String,
        color: RgbaColor,
        font_size: f64,
        font_family: FontFamily,
    ) -> ElementId {
        let id = self.allocate_id();
        self.insert(Element::Text(TextLabel::new(
            id,
            position,
            body,
            color,
            font_size,
            font_family,
        )))
    }

    /// Rewrite the editable fields of text label `id` in place.
    pub fn update_text(
        &mut self,
        id: ElementId,
        body: String,
        color: RgbaColor,
        font_size: f64,
        font_family: FontFamily,
    ) -> BoardResult<()> {
        match self.elements.get_mut(&id) {
            Some(Element::Text(label)) => {
                label.update(body, color, font_size, font_family);
                Ok(())
            }
            Some(_) => Err(BoardError::KindMismatch {
                id,
                expected: ElementKind::Text,
            }),
            None => Err(BoardError::NotFound(id)),
        }
    }

    fn in_progress_mut(&mut self, id: ElementId) -> BoardResult<&mut Element> {
        if self.in_progress != Some(id) {
            return Err(if self.elements.contains_key(&id) {
                BoardError::NotInProgress(id)
            } else {
                BoardError::NotFound(id)
            });
        }
        self.elements.get_mut(&id).ok_or(BoardError::NotFound(id))
    }

    /// The in-progress stroke or shape, if any.
    pub fn in_progress(&self) -> Option<ElementId> {
        self.in_progress
    }

    /// Commit the in-progress element. Returns its id.
    pub fn finalize(&mut self) -> Option<ElementId> {
        self.in_progress.take()
    }

    /// Drop the in-progress element without committing it.
    pub fn discard_in_progress(&mut self) -> Option<Element> {
        let id = self.in_progress.take()?;
        self.remove(id)
    }

    /// Remove an element from the document.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        if self.in_progress == Some(id) {
            self.in_progress = None;
        }
        self.z_order.retain(|&element_id| element_id != id);
        self.elements.remove(&id)
    }

    /// Remove every element. Identifiers are not recycled afterwards.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.z_order.clear();
        self.in_progress = None;
    }

    /// Get an element by ID.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Check if an element is live.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Get elements in z-order (back to front).
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.z_order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Element ids in z-order (back to front).
    pub fn z_order(&self) -> &[ElementId] {
        &self.z_order
    }

    /// Owned copy of the elements in z-order, for the rendering surface.
    pub fn snapshot(&self) -> Vec<Element> {
        self.elements().cloned().collect()
    }

    /// Get the bounding box of all elements.
    pub fn bounds(&self) -> Option<Rect> {
        self.elements()
            .map(Element::bounds)
            .reduce(|acc, bounds| acc.union(bounds))
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn black() -> RgbaColor {
        RgbaColor::black()
    }

    #[test]
    fn test_document_creation() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert!(doc.bounds().is_none());
    }

    #[test]
    fn test_create_appends_in_z_order() {
        let mut doc = Document::new();
        let a = doc.create_stroke(black(), 2.0, Point::new(0.0, 0.0));
        doc.finalize();
        let b = doc.create_shape(ShapeKind::Circle, black(), 2.0, Point::new(5.0, 5.0));
        doc.finalize();
        let c = doc.create_text(Point::ZERO, "Hi".into(), black(), 20.0, FontFamily::Sans);

        assert_eq!(doc.z_order(), &[a, b, c]);
        let kinds: Vec<_> = doc.elements().map(Element::kind).collect();
        assert_eq!(kinds, vec![ElementKind::Stroke, ElementKind::Shape, ElementKind::Text]);
    }

    #[test]
    fn test_ids_unique_across_kinds_and_never_reused() {
        let mut doc = Document::new();
        let mut seen = HashSet::new();
        for round in 0..5 {
            let s = doc.create_stroke(black(), 1.0, Point::ZERO);
            doc.finalize();
            let r = doc.create_shape(ShapeKind::Rectangle, black(), 1.0, Point::ZERO);
            doc.finalize();
            let t = doc.create_text(Point::ZERO, "x".into(), black(), 12.0, FontFamily::Sans);
            for id in [s, r, t] {
                assert!(seen.insert(id), "id {id} reused");
            }
            doc.remove(r);
            if round % 2 == 1 {
                doc.clear();
            }
        }
    }

    #[test]
    fn test_mutation_only_on_in_progress() {
        let mut doc = Document::new();
        let stroke = doc.create_stroke(black(), 2.0, Point::ZERO);
        doc.append_point(stroke, Point::new(1.0, 1.0)).unwrap();
        assert_eq!(doc.finalize(), Some(stroke));

        assert_eq!(
            doc.append_point(stroke, Point::new(2.0, 2.0)),
            Err(BoardError::NotInProgress(stroke))
        );
        let len = doc.get(stroke).and_then(Element::as_stroke).map(Stroke::len);
        assert_eq!(len, Some(2));
    }

    #[test]
    fn test_kind_mismatch() {
        let mut doc = Document::new();
        let shape = doc.create_shape(ShapeKind::Circle, black(), 2.0, Point::ZERO);
        assert_eq!(
            doc.append_point(shape, Point::new(1.0, 1.0)),
            Err(BoardError::KindMismatch {
                id: shape,
                expected: ElementKind::Stroke
            })
        );
        assert_eq!(
            doc.update_text(shape, "x".into(), black(), 10.0, FontFamily::Sans),
            Err(BoardError::KindMismatch {
                id: shape,
                expected: ElementKind::Text
            })
        );
        let missing = ElementId::new(99);
        assert_eq!(
            doc.update_shape_extent(missing, Point::ZERO),
            Err(BoardError::NotFound(missing))
        );
    }

    #[test]
    fn test_update_shape_extent() {
        let mut doc = Document::new();
        let id = doc.create_shape(ShapeKind::Rectangle, black(), 2.0, Point::new(10.0, 10.0));
        doc.update_shape_extent(id, Point::new(0.0, 30.0)).unwrap();
        let rect = doc.get(id).and_then(Element::as_shape).map(Shape::rect).unwrap();
        assert!((rect.x0).abs() < f64::EPSILON);
        assert!((rect.height() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_text_after_finalize() {
        let mut doc = Document::new();
        let id = doc.create_text(Point::ZERO, "Hi".into(), black(), 20.0, FontFamily::Sans);
        doc.update_text(id, "Bye".into(), RgbaColor::white(), 24.0, FontFamily::Serif)
            .unwrap();
        let label = doc.get(id).and_then(Element::as_text).unwrap();
        assert_eq!(label.body, "Bye");
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_discard_in_progress() {
        let mut doc = Document::new();
        let kept = doc.create_stroke(black(), 2.0, Point::ZERO);
        doc.finalize();
        let dropped = doc.create_shape(ShapeKind::Circle, black(), 2.0, Point::ZERO);

        let removed = doc.discard_in_progress().map(|e| e.id());
        assert_eq!(removed, Some(dropped));
        assert_eq!(doc.z_order(), &[kept]);
        assert!(doc.in_progress().is_none());
        assert!(doc.discard_in_progress().is_none());
    }

    #[test]
    fn test_remove_in_progress_clears_marker() {
        let mut doc = Document::new();
        let id = doc.create_stroke(black(), 2.0, Point::ZERO);
        assert!(doc.remove(id).is_some());
        assert!(doc.in_progress().is_none());
        assert!(doc.remove(id).is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut doc = Document::new();
        doc.create_stroke(black(), 2.0, Point::ZERO);
        doc.clear();
        assert!(doc.is_empty());
        doc.clear();
        assert!(doc.is_empty());
        assert!(doc.z_order().is_empty());
    }

    #[test]
    fn test_bounds_union() {
        let mut doc = Document::new();
        let id = doc.create_shape(ShapeKind::Rectangle, black(), 2.0, Point::new(0.0, 0.0));
        doc.update_shape_extent(id, Point::new(10.0, 10.0)).unwrap();
        doc.finalize();
        let id = doc.create_shape(ShapeKind::Rectangle, black(), 2.0, Point::new(50.0, 50.0));
        doc.update_shape_extent(id, Point::new(60.0, 70.0)).unwrap();
        doc.finalize();

        let bounds = doc.bounds().unwrap();
        assert!((bounds.x1 - 60.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }
}
