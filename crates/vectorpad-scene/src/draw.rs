//! Free-draw sessions.
//!
//! A session drafts one shape at a time on a private overlay that shares
//! the base transform. Two-point tools anchor on the first press and finish
//! on the second; the polygon tool collects vertices until the finish key.
//! A finished shape moves into the base engine as selectable content and
//! the session starts over with the same tool.

use std::fmt;

use tracing::{debug, info};
use vectorpad_core::{
    Point, PointerAction, PointerButton, RectPos, Rgba, SceneResult, SessionKeys,
};

use crate::draw_state::DrawState;
use crate::model::{IdGenerator, Shape, ShapeId};
use crate::viewport::{Viewport, ViewportId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawTool {
    Line,
    Rect,
    Circle,
    Polygon,
}

impl fmt::Display for DrawTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Line => "line",
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Polygon => "polygon",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Still drafting.
    Pending,
    /// The shape was added to the base engine.
    Finished(ShapeId),
    /// The abort key ended the session.
    Cancelled,
    /// The draft was discarded; the same tool is ready again.
    Restarted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOptions {
    pub stroke: Rgba,
    pub keys: SessionKeys,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            stroke: Rgba::BLACK,
            keys: SessionKeys::default(),
        }
    }
}

#[derive(Debug)]
pub struct DrawSession {
    tool: DrawTool,
    overlay: ViewportId,
    preview_id: ShapeId,
    anchor: Option<Point>,
    vertices: Vec<Point>,
    options: DrawOptions,
}

impl DrawSession {
    pub fn begin(
        base: &mut Viewport,
        tool: DrawTool,
        ids: &mut IdGenerator,
        options: DrawOptions,
    ) -> SceneResult<Self> {
        let overlay = base.clone_overlay()?;
        let session = Self {
            tool,
            overlay: overlay.id(),
            preview_id: ids.next_id(),
            anchor: None,
            vertices: Vec::new(),
            options,
        };
        base.append_viewport(overlay);
        info!("Drawing {}", tool);
        Ok(session)
    }

    pub fn tool(&self) -> DrawTool {
        self.tool
    }

    pub fn overlay_id(&self) -> ViewportId {
        self.overlay
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn handle_pointer(
        &mut self,
        base: &mut Viewport,
        ids: &mut IdGenerator,
        device: Point,
        action: PointerAction,
        button: PointerButton,
    ) -> SceneResult<DrawOutcome> {
        let overlay = base.overlay_mut(self.overlay)?;
        let p = overlay.to_scene(device);

        if self.tool == DrawTool::Polygon {
            match (action, button) {
                (PointerAction::Down, PointerButton::Primary) => {
                    self.vertices.push(p);
                    self.preview(overlay, p);
                }
                (PointerAction::Down, PointerButton::Secondary) => {
                    if self.vertices.len() > 1 {
                        self.vertices.pop();
                    }
                    self.preview(overlay, p);
                }
                (PointerAction::Move, _) => self.preview(overlay, p),
                _ => {}
            }
            return Ok(DrawOutcome::Pending);
        }

        match (action, button, self.anchor) {
            (PointerAction::Down, PointerButton::Primary, None) => {
                self.anchor = Some(p);
                self.preview(overlay, p);
            }
            (PointerAction::Down, PointerButton::Primary, Some(anchor)) => {
                let shape = self.two_point_shape(ids.next_id(), anchor, p);
                return Ok(self.finish(base, shape));
            }
            (PointerAction::Move, _, Some(_)) => self.preview(overlay, p),
            _ => {}
        }
        Ok(DrawOutcome::Pending)
    }

    /// Session keys; `None` when `code` means nothing to this session.
    pub fn key(
        &mut self,
        base: &mut Viewport,
        ids: &mut IdGenerator,
        code: u32,
    ) -> SceneResult<Option<DrawOutcome>> {
        let keys = self.options.keys;
        if code == keys.cancel {
            self.reset(base)?;
            debug!("Discarded {} draft", self.tool);
            return Ok(Some(DrawOutcome::Restarted));
        }
        if self.tool != DrawTool::Polygon {
            return Ok(None);
        }
        if code == keys.finish_polygon {
            if self.vertices.len() < 3 {
                debug!("Polygon needs 3 vertices, have {}", self.vertices.len());
                return Ok(Some(DrawOutcome::Pending));
            }
            let shape = self.styled(Shape::polygon(ids.next_id(), self.vertices.clone()));
            return Ok(Some(self.finish(base, shape)));
        }
        if code == keys.abort_polygon {
            self.reset(base)?;
            return Ok(Some(DrawOutcome::Cancelled));
        }
        Ok(None)
    }

    /// Drops the drafting overlay.
    pub fn end(self, base: &mut Viewport) {
        base.remove_all_viewports();
        base.render(true);
    }

    fn styled(&self, shape: Shape) -> Shape {
        shape.with_draw_state(DrawState::stroked(self.options.stroke))
    }

    fn two_point_shape(&self, id: ShapeId, anchor: Point, p: Point) -> Shape {
        let shape = match self.tool {
            DrawTool::Rect => Shape::rect(id, RectPos::from_corners(anchor, p)),
            DrawTool::Circle => Shape::circle(id, anchor, anchor.distance_to(&p)),
            DrawTool::Line | DrawTool::Polygon => Shape::line(id, anchor, p),
        };
        self.styled(shape)
    }

    fn preview(&self, overlay: &mut Viewport, cursor: Point) {
        let shape = match (self.tool, self.anchor) {
            (DrawTool::Polygon, _) => {
                if self.vertices.is_empty() {
                    return;
                }
                let mut points = self.vertices.clone();
                points.push(cursor);
                self.styled(Shape::polygon(self.preview_id, points))
            }
            (_, Some(anchor)) => self.two_point_shape(self.preview_id, anchor, cursor),
            (_, None) => return,
        };
        overlay.engine_mut().remove(self.preview_id);
        overlay.engine_mut().add(shape);
        overlay.render(true);
    }

    fn reset(&mut self, base: &mut Viewport) -> SceneResult<()> {
        self.anchor = None;
        self.vertices.clear();
        let overlay = base.overlay_mut(self.overlay)?;
        overlay.engine_mut().remove(self.preview_id);
        overlay.render(true);
        Ok(())
    }

    fn finish(&mut self, base: &mut Viewport, shape: Shape) -> DrawOutcome {
        let id = base.engine_mut().add(shape.selectable());
        self.anchor = None;
        self.vertices.clear();
        if let Ok(overlay) = base.overlay_mut(self.overlay) {
            overlay.engine_mut().remove(self.preview_id);
        }
        base.render(true);
        info!("Finished {} {}", self.tool, id);
        DrawOutcome::Finished(id)
    }
}
