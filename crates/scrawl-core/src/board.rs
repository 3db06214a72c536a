//! The annotation state machine.
//!
//! [`Board`] owns the document and all transient interaction state. The host
//! feeds it [`Event`]s one at a time, in delivery order; every transition
//! completes before `handle` returns. Malformed input is logged and dropped,
//! never returned to the caller.

use crate::config::{self, BoardConfig};
use crate::document::Document;
use crate::drag::{DragController, Panel};
use crate::elements::{Element, ElementId, RgbaColor};
use crate::error::{BoardError, BoardResult};
use crate::event::Event;
use crate::hit_test::{self, HoverProbe};
use crate::text_draft::{DraftTarget, TextDraft, TextField};
use crate::tools::{DrawingState, ToolMode};
use kurbo::{Point, Size};
use serde::Serialize;

/// Pointer cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    Default,
    Crosshair,
    /// Spot-erase is over an element that a click would delete.
    Pointer,
    Text,
    /// A panel is being dragged.
    Grabbing,
}

/// Read-only view of the interaction state, for reflecting in the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionView {
    pub tool: ToolMode,
    pub drawing: DrawingState,
    /// The open text draft, if the popover is showing.
    pub draft: Option<TextDraft>,
    pub toolbar_position: Point,
    pub popover_position: Point,
    pub hovered: Option<ElementId>,
    pub cursor: Cursor,
    pub viewport: Size,
    pub pen_color: RgbaColor,
    pub pen_thickness: f64,
}

/// Whiteboard document plus the tool state machine driving it.
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    document: Document,
    tool: ToolMode,
    drawing: DrawingState,
    pen_color: RgbaColor,
    pen_thickness: f64,
    draft: TextDraft,
    toolbar: DragController,
    popover: DragController,
    hover: HoverProbe,
    viewport: Size,
}

impl Default for Board {
    fn default() -> Self {
        Self::from_valid_config(BoardConfig::default())
    }
}

impl Board {
    /// Create a board from a configuration, rejecting unusable settings.
    pub fn new(config: BoardConfig) -> BoardResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: BoardConfig) -> Self {
        Self {
            document: Document::new(),
            tool: config.initial_tool,
            drawing: DrawingState::Idle,
            pen_color: config.pen_color,
            pen_thickness: config.pen_thickness,
            draft: TextDraft::new(config.text),
            toolbar: DragController::new(config.toolbar_origin),
            popover: DragController::new(Point::ZERO),
            hover: HoverProbe::new(),
            viewport: config.viewport,
            config,
        }
    }

    /// Apply one input event.
    pub fn handle(&mut self, event: Event) {
        log::trace!("event: {:?}", event);
        match event {
            Event::ToolSelected { tool } => self.select_tool(tool),
            Event::PointerDown { x, y } => self.pointer_down(Point::new(x, y)),
            Event::PointerMove { x, y } => self.pointer_move(Point::new(x, y)),
            Event::PointerUp => self.pointer_up(),
            Event::ColorChanged { hex } => {
                if let Err(e) = self.set_pen_color(&hex) {
                    log::warn!("Ignoring pen color change: {}", e);
                }
            }
            Event::ThicknessChanged { thickness } => {
                if let Err(e) = self.set_pen_thickness(thickness) {
                    log::warn!("Ignoring thickness change: {}", e);
                }
            }
            Event::TextFieldChanged { field } => self.change_text_field(field),
            Event::TextSubmitted => self.submit_text(),
            Event::TextCancelled => self.cancel_text(),
            Event::TextDeleted => self.delete_text(),
            Event::TextDoubleClicked { id } => self.edit_text(id),
            Event::DoubleClicked { x, y } => self.double_click(Point::new(x, y)),
            Event::ClearRequested => self.clear(),
            Event::ToolbarDragStart { panel, x, y } => {
                self.panel_mut(panel).start(Point::new(x, y));
            }
            Event::ToolbarDragMove { panel, x, y } => {
                self.panel_mut(panel).drag_to(Point::new(x, y));
            }
            Event::ToolbarDragEnd { panel } => self.panel_mut(panel).end(),
            Event::ViewportResized { width, height } => {
                if let Err(e) = self.resize(Size::new(width, height)) {
                    log::warn!("Ignoring viewport resize: {}", e);
                }
            }
        }
    }

    /// Resolve per-frame work. Call once before each redraw.
    ///
    /// Spot-erase hover feedback is computed here rather than on every
    /// pointer move, so its cost is bounded by the frame rate.
    pub fn begin_frame(&mut self) -> Option<ElementId> {
        if self.tool == ToolMode::SpotErase {
            self.hover.resolve(&self.document, self.config.hit_tolerance)
        } else {
            None
        }
    }

    /// Switch tools.
    ///
    /// Cancels the text draft and discards an unfinished stroke or shape
    /// instead of committing it.
    pub fn select_tool(&mut self, tool: ToolMode) {
        if let Some(element) = self.document.discard_in_progress() {
            log::debug!(
                "Discarding unfinished {} {} on tool switch",
                element.kind(),
                element.id()
            );
        }
        self.drawing = DrawingState::Idle;
        self.draft.close(self.config.text);
        self.hover.reset();
        self.tool = tool;
        log::debug!("Tool selected: {:?}", tool);
    }

    /// Pointer button pressed at `point`.
    pub fn pointer_down(&mut self, point: Point) {
        match self.tool {
            ToolMode::Pen => {
                self.finish_gesture();
                let id = self
                    .document
                    .create_stroke(self.pen_color, self.pen_thickness, point);
                self.drawing = DrawingState::Stroke(id);
                log::debug!("Stroke {} started at {:?}", id, point);
            }
            ToolMode::Circle | ToolMode::Rectangle => {
                let Some(kind) = self.tool.shape_kind() else {
                    return;
                };
                self.finish_gesture();
                let id = self
                    .document
                    .create_shape(kind, self.pen_color, self.pen_thickness, point);
                self.drawing = DrawingState::Shape(id);
                log::debug!("{:?} {} anchored at {:?}", kind, id, point);
            }
            ToolMode::Text => {
                self.draft.open_creating(point, self.config.text);
                self.popover.place(point);
                log::debug!("Text draft opened at {:?}", point);
            }
            ToolMode::SpotErase => self.spot_erase(point),
            ToolMode::Select => {}
        }
    }

    /// Pointer moved to `point`. Every sample is applied, in order.
    pub fn pointer_move(&mut self, point: Point) {
        let result = match self.drawing {
            DrawingState::Stroke(id) => self.document.append_point(id, point),
            DrawingState::Shape(id) => self.document.update_shape_extent(id, point),
            DrawingState::Idle => {
                if self.tool == ToolMode::SpotErase {
                    self.hover.track(point);
                }
                Ok(())
            }
        };
        if let Err(e) = result {
            log::warn!("Dropping stale drawing gesture: {}", e);
            self.drawing = DrawingState::Idle;
        }
    }

    /// Pointer button released; the element being drawn is committed.
    pub fn pointer_up(&mut self) {
        self.finish_gesture();
    }

    fn finish_gesture(&mut self) {
        if let Some(id) = self.document.finalize() {
            log::debug!("Element {} finalized", id);
        }
        self.drawing = DrawingState::Idle;
    }

    fn spot_erase(&mut self, point: Point) {
        match hit_test::hit_test(&self.document, point, self.config.hit_tolerance) {
            Some(id) => {
                self.document.remove(id);
                self.forget_element(id);
                // Re-probe so the element below gets hover feedback next frame
                self.hover.track(point);
                log::debug!("Spot-erased element {}", id);
            }
            None => log::debug!("Spot-erase missed at {:?}", point),
        }
    }

    /// Drop transient references to a removed element.
    fn forget_element(&mut self, id: ElementId) {
        self.hover.forget(id);
        if self.draft.target() == DraftTarget::Editing(id) {
            self.draft.close(self.config.text);
        }
    }

    /// Set the pen color from CSS hex.
    pub fn set_pen_color(&mut self, hex: &str) -> BoardResult<()> {
        self.pen_color = RgbaColor::from_hex(hex)?;
        Ok(())
    }

    /// Set the pen thickness; values below the configured minimum are rejected.
    pub fn set_pen_thickness(&mut self, thickness: f64) -> BoardResult<()> {
        if !thickness.is_finite() || thickness < self.config.min_thickness {
            return Err(BoardError::InvalidThickness(thickness));
        }
        self.pen_thickness = thickness;
        Ok(())
    }

    fn change_text_field(&mut self, field: TextField) {
        if !self.draft.is_open() {
            log::debug!("Text field change with no open draft");
            return;
        }
        if let Err(e) = self.draft.set_field(field) {
            log::warn!("Ignoring text field change: {}", e);
        }
    }

    fn submit_text(&mut self) {
        if !self.draft.is_open() {
            log::debug!("Text submit with no open draft");
            return;
        }
        let style = self.draft.style();
        match self.draft.target() {
            DraftTarget::Creating => {
                if self.draft.body().is_empty() {
                    log::debug!("Empty text submit; draft stays open");
                    return;
                }
                let id = self.document.create_text(
                    self.draft.anchor(),
                    self.draft.body().to_string(),
                    style.color,
                    style.font_size,
                    style.font_family,
                );
                log::debug!("Text label {} created", id);
            }
            DraftTarget::Editing(id) => {
                match self.document.update_text(
                    id,
                    self.draft.body().to_string(),
                    style.color,
                    style.font_size,
                    style.font_family,
                ) {
                    Ok(()) => log::debug!("Text label {} updated", id),
                    Err(e) => log::warn!("Text edit could not be applied: {}", e),
                }
            }
        }
        self.draft.close(self.config.text);
    }

    fn cancel_text(&mut self) {
        self.draft.close(self.config.text);
    }

    fn delete_text(&mut self) {
        if let DraftTarget::Editing(id) = self.draft.target() {
            if self.document.remove(id).is_some() {
                self.hover.forget(id);
                log::debug!("Text label {} deleted", id);
            }
        }
        self.draft.close(self.config.text);
    }

    /// Open the text popover on an existing label.
    pub fn edit_text(&mut self, id: ElementId) {
        match self.document.get(id) {
            Some(Element::Text(label)) => {
                self.draft.open_editing(label);
                self.popover.place(label.position);
                log::debug!("Editing text label {}", id);
            }
            Some(other) => log::debug!("Element {} is a {}, not text", id, other.kind()),
            None => log::debug!("No element {} to edit", id),
        }
    }

    /// Edit the topmost text label under `point`, looking through any
    /// strokes or shapes stacked above it.
    fn double_click(&mut self, point: Point) {
        let label = hit_test::hits_at(&self.document, point, self.config.hit_tolerance)
            .into_iter()
            .find(|&id| self.document.get(id).and_then(Element::as_text).is_some());
        match label {
            Some(id) => self.edit_text(id),
            None => log::debug!("Double click at {:?} found no text label", point),
        }
    }

    /// Remove every element. Tool, pen and panels are untouched.
    pub fn clear(&mut self) {
        self.document.clear();
        self.drawing = DrawingState::Idle;
        self.hover.reset();
        if matches!(self.draft.target(), DraftTarget::Editing(_)) {
            self.draft.close(self.config.text);
        }
        log::debug!("Board cleared");
    }

    /// Store the surface size reported by the host.
    pub fn resize(&mut self, viewport: Size) -> BoardResult<()> {
        config::validate_viewport(viewport)?;
        self.viewport = viewport;
        Ok(())
    }

    fn panel_mut(&mut self, panel: Panel) -> &mut DragController {
        match panel {
            Panel::Toolbar => &mut self.toolbar,
            Panel::TextPopover => &mut self.popover,
        }
    }

    /// Topmost element under `point`.
    pub fn hit_test(&self, point: Point) -> Option<ElementId> {
        hit_test::hit_test(&self.document, point, self.config.hit_tolerance)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Elements in z-order (back to front).
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.document.elements()
    }

    /// Owned copy of the elements in z-order.
    pub fn snapshot(&self) -> Vec<Element> {
        self.document.snapshot()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn drawing(&self) -> DrawingState {
        self.drawing
    }

    pub fn draft(&self) -> &TextDraft {
        &self.draft
    }

    pub fn panel_position(&self, panel: Panel) -> Point {
        match panel {
            Panel::Toolbar => self.toolbar.position(),
            Panel::TextPopover => self.popover.position(),
        }
    }

    pub fn hovered(&self) -> Option<ElementId> {
        self.hover.hovered()
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn pen_color(&self) -> RgbaColor {
        self.pen_color
    }

    pub fn pen_thickness(&self) -> f64 {
        self.pen_thickness
    }

    /// Cursor for the current tool and pointer situation.
    pub fn cursor(&self) -> Cursor {
        if self.toolbar.is_dragging() || self.popover.is_dragging() {
            return Cursor::Grabbing;
        }
        match self.tool {
            ToolMode::Select => Cursor::Default,
            ToolMode::Pen | ToolMode::Circle | ToolMode::Rectangle => Cursor::Crosshair,
            ToolMode::Text => Cursor::Text,
            ToolMode::SpotErase if self.hover.hovered().is_some() => Cursor::Pointer,
            ToolMode::SpotErase => Cursor::Crosshair,
        }
    }

    /// Snapshot of the interaction state for the UI.
    pub fn interaction(&self) -> InteractionView {
        InteractionView {
            tool: self.tool,
            drawing: self.drawing,
            draft: self.draft.is_open().then(|| self.draft.clone()),
            toolbar_position: self.toolbar.position(),
            popover_position: self.popover.position(),
            hovered: self.hover.hovered(),
            cursor: self.cursor(),
            viewport: self.viewport,
            pen_color: self.pen_color,
            pen_thickness: self.pen_thickness,
        }
    }
}
