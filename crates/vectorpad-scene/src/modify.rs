//! In-place shape editing.
//!
//! Selecting a shape lifts it out of the base engine into a fresh overlay
//! viewport, highlights it, and surrounds it with affordances: one control
//! point per vertex, or in transform mode two scale handles, a rotate
//! handle and a guide polyline. Pointer input then drives an explicit drag
//! state until a press on empty space commits the shape back.
//!
//! ```text
//! Unselected --down on shape--> Selected(Idle)
//! Selected(Idle) --down on control point--> Dragging vertex
//! Selected(Idle) --down on shape body----> Dragging whole shape
//! Selected(Idle) --down on handle--------> Dragging handle (transform mode)
//! Dragging * --up / leave / out--> Selected(Idle)
//! Selected --toggle key--> Selected in the other mode
//! Selected --down on nothing--> Unselected (committed)
//! ```

use tracing::{debug, info, warn};
use vectorpad_core::constants::{CONTROL_POINT_SIZE, HANDLE_PADDING};
use vectorpad_core::{
    bounding_box, AffineTransform, Point, PointerAction, PointerEvent, RectPos, Rgba, SceneError,
    SceneResult,
};

use crate::draw_state::DrawState;
use crate::handler::{ControlPointHandler, Effect};
use crate::model::{Capabilities, HandleKind, IdGenerator, Shape, ShapeId, ShapeRole};
use crate::viewport::{Viewport, ViewportId};

/// Smallest width or height a scale handle may shrink a shape to.
const MIN_SCALED_EXTENT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifyOptions {
    pub control_point_size: f64,
    pub handle_padding: f64,
    pub selection_stroke: Rgba,
}

impl Default for ModifyOptions {
    fn default() -> Self {
        Self {
            control_point_size: CONTROL_POINT_SIZE,
            handle_padding: HANDLE_PADDING,
            selection_stroke: Rgba::RED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifyMode {
    /// One control point per vertex.
    Vertices,
    /// Scale and rotate handles around the bounding box.
    Transform,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    /// `vertex` is where the dragged vertex currently sits.
    Vertex {
        path_index: usize,
        vertex: Point,
        last: Point,
    },
    Whole { last: Point },
    Handle { kind: HandleKind, last: Point },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifyOutcome {
    /// Set when this event ended the session; the shape is back in the base.
    pub deselected: Option<ShapeId>,
    pub effects: Vec<Effect>,
}

#[derive(Debug)]
pub struct ModifySession {
    target: ShapeId,
    overlay: ViewportId,
    mode: ModifyMode,
    drag: DragState,
    /// Shape value at the press that started a vertex drag.
    pinned: Vec<Point>,
    capabilities: Capabilities,
    original_draw_state: Option<DrawState>,
    affordances: Vec<ShapeId>,
    options: ModifyOptions,
}

impl ModifySession {
    /// Moves `target` from the base engine into a new overlay and spawns
    /// its control points.
    pub fn begin(
        base: &mut Viewport,
        target: ShapeId,
        ids: &mut IdGenerator,
        options: ModifyOptions,
    ) -> SceneResult<Self> {
        let mut overlay = base.clone_overlay()?;
        let mut shape = base
            .engine_mut()
            .remove(target)
            .ok_or_else(|| SceneError::not_found(target))?;

        let capabilities = shape.capabilities;
        let original_draw_state = shape.draw_state.clone();
        let mut highlight = original_draw_state.clone().unwrap_or_default();
        highlight.stroke = Some(options.selection_stroke);
        shape.draw_state = Some(highlight);
        overlay.engine_mut().add(shape);

        let mut session = Self {
            target,
            overlay: overlay.id(),
            mode: ModifyMode::Vertices,
            drag: DragState::Idle,
            pinned: Vec::new(),
            capabilities,
            original_draw_state,
            affordances: Vec::new(),
            options,
        };
        session.spawn_affordances(&mut overlay, ids)?;
        base.append_viewport(overlay);
        base.render(true);

        info!(
            "Selected shape {} ({} affordances)",
            target,
            session.affordances.len()
        );
        Ok(session)
    }

    pub fn target(&self) -> ShapeId {
        self.target
    }

    pub fn overlay_id(&self) -> ViewportId {
        self.overlay
    }

    pub fn mode(&self) -> ModifyMode {
        self.mode
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn affordances(&self) -> &[ShapeId] {
        &self.affordances
    }

    /// Feeds one device-space pointer event into the session.
    pub fn handle_pointer(
        &mut self,
        base: &mut Viewport,
        ids: &mut IdGenerator,
        device: Point,
        action: PointerAction,
    ) -> SceneResult<ModifyOutcome> {
        let overlay = base.overlay_mut(self.overlay)?;
        let p = overlay.to_scene(device);

        if action == PointerAction::Down {
            let hits = overlay.engine().hit_test(p);
            if hits.is_empty() {
                let deselected = self.commit_in_place(base);
                return Ok(ModifyOutcome {
                    deselected,
                    effects: Vec::new(),
                });
            }
            self.start_drag(overlay, &hits, p);
            debug!("Modify drag started: {:?}", self.drag);
        }

        let mut outcome = ModifyOutcome::default();
        let triggered = overlay.engine_mut().trigger(&PointerEvent::new(p, action));
        outcome.effects = triggered
            .effects
            .into_iter()
            .filter(|e| matches!(e, Effect::SetCursor(_)))
            .collect();

        match action {
            PointerAction::Move => self.drag_to(overlay, ids, p)?,
            PointerAction::Up | PointerAction::Leave | PointerAction::Out => {
                self.drag = DragState::Idle;
            }
            _ => {}
        }
        Ok(outcome)
    }

    /// Swaps vertex control points for transform handles or back.
    pub fn toggle_mode(
        &mut self,
        base: &mut Viewport,
        ids: &mut IdGenerator,
    ) -> SceneResult<ModifyMode> {
        let overlay = base.overlay_mut(self.overlay)?;
        self.clear_affordances(overlay);
        self.drag = DragState::Idle;
        self.mode = match self.mode {
            ModifyMode::Vertices => ModifyMode::Transform,
            ModifyMode::Transform => ModifyMode::Vertices,
        };
        self.spawn_affordances(overlay, ids)?;
        overlay.render(true);
        info!("Shape {} now in {:?} mode", self.target, self.mode);
        Ok(self.mode)
    }

    /// Ends the session: restores the original draw state, puts the shape
    /// back into the base engine and drops every overlay.
    ///
    /// Returns `None` if the shape vanished from the overlay meanwhile.
    pub fn commit(mut self, base: &mut Viewport) -> Option<ShapeId> {
        self.commit_in_place(base)
    }

    /// Ends the session and discards the shape.
    pub fn delete(self, base: &mut Viewport) -> Option<Shape> {
        let removed = match base.overlay_mut(self.overlay) {
            Ok(overlay) => overlay.engine_mut().remove(self.target),
            Err(e) => {
                warn!("Deleting shape {}: {}", self.target, e);
                None
            }
        };
        base.remove_all_viewports();
        base.render(true);
        info!("Deleted shape {}", self.target);
        removed
    }

    fn commit_in_place(&mut self, base: &mut Viewport) -> Option<ShapeId> {
        let shape = match base.overlay_mut(self.overlay) {
            Ok(overlay) => overlay.engine_mut().remove(self.target),
            Err(e) => {
                warn!("Committing shape {}: {}", self.target, e);
                None
            }
        };
        base.remove_all_viewports();
        self.affordances.clear();
        self.drag = DragState::Idle;

        let restored = shape.map(|mut shape| {
            shape.draw_state = self.original_draw_state.take();
            base.engine_mut().add(shape)
        });
        base.render(true);
        match restored {
            Some(id) => info!("Committed shape {}", id),
            None => warn!("Shape {} vanished before commit", self.target),
        }
        restored
    }

    /// Picks the drag a press on `hits` begins. Vertex and handle drags
    /// need a modifiable target, whole-shape drags a movable one.
    fn start_drag(&mut self, overlay: &Viewport, hits: &[ShapeId], p: Point) {
        self.pinned.clear();
        self.drag = DragState::Idle;
        for id in hits {
            // an affordance may have been removed since the hit test
            let Ok(shape) = overlay.engine().get_shape(*id) else {
                continue;
            };
            match shape.role {
                ShapeRole::ControlPoint { path_index, .. } if self.capabilities.modifiable => {
                    let Ok(target) = overlay.engine().get_shape(self.target) else {
                        continue;
                    };
                    self.pinned = target.value();
                    let Some(vertex) = self.pinned.get(path_index).copied() else {
                        continue;
                    };
                    self.drag = DragState::Vertex {
                        path_index,
                        vertex,
                        last: p,
                    };
                    return;
                }
                ShapeRole::Handle { kind, .. } if self.capabilities.modifiable => {
                    self.drag = DragState::Handle { kind, last: p };
                    return;
                }
                _ => {}
            }
        }
        if self.capabilities.movable {
            self.drag = DragState::Whole { last: p };
        }
    }

    fn drag_to(
        &mut self,
        overlay: &mut Viewport,
        ids: &mut IdGenerator,
        p: Point,
    ) -> SceneResult<()> {
        let target = self.target;
        match self.drag {
            DragState::Idle => return Ok(()),
            DragState::Vertex {
                path_index,
                vertex,
                last,
            } => {
                // rebuild from the press-time value so normalizing
                // geometries cannot shift the other vertices
                let (dx, dy) = p.delta_from(&last);
                let vertex = vertex.offset(dx, dy);
                let mut value = self.pinned.clone();
                if let Some(v) = value.get_mut(path_index) {
                    *v = vertex;
                    overlay
                        .engine_mut()
                        .get_shape_mut(target)?
                        .set_value(&value)?;
                }
                self.drag = DragState::Vertex {
                    path_index,
                    vertex,
                    last: p,
                };
            }
            DragState::Whole { last } => {
                let (dx, dy) = p.delta_from(&last);
                overlay.engine_mut().get_shape_mut(target)?.translate(dx, dy);
                self.drag = DragState::Whole { last: p };
            }
            DragState::Handle { kind, last } => {
                let shape = overlay.engine_mut().get_shape_mut(target)?;
                apply_handle(shape, kind, last, p)?;
                self.drag = DragState::Handle { kind, last: p };
            }
        }
        self.clear_affordances(overlay);
        self.spawn_affordances(overlay, ids)?;
        overlay.render(true);
        Ok(())
    }

    fn clear_affordances(&mut self, overlay: &mut Viewport) {
        for id in self.affordances.drain(..) {
            if overlay.engine_mut().remove(id).is_none() {
                debug!("Affordance {} already gone", id);
            }
        }
    }

    fn spawn_affordances(
        &mut self,
        overlay: &mut Viewport,
        ids: &mut IdGenerator,
    ) -> SceneResult<()> {
        if !self.capabilities.modifiable {
            return Ok(());
        }
        let target = overlay.engine().get_shape(self.target)?;
        let value = target.value();
        let rotatable = target.geometry().is_rotatable();
        let shapes = match self.mode {
            ModifyMode::Vertices => self.control_points(&value, ids),
            ModifyMode::Transform => self.transform_handles(&value, rotatable, ids),
        };
        self.affordances = overlay.engine_mut().add_some(shapes);
        Ok(())
    }

    fn control_points(&self, value: &[Point], ids: &mut IdGenerator) -> Vec<Shape> {
        value
            .iter()
            .enumerate()
            .map(|(path_index, v)| {
                Shape::rect(
                    ids.next_id(),
                    RectPos::centered(*v, self.options.control_point_size),
                )
                .with_role(ShapeRole::ControlPoint {
                    parent: self.target,
                    path_index,
                })
                .with_handler(ControlPointHandler)
            })
            .collect()
    }

    fn transform_handles(
        &self,
        value: &[Point],
        rotatable: bool,
        ids: &mut IdGenerator,
    ) -> Vec<Shape> {
        let b = bounding_box(value);
        let pad = self.options.handle_padding;
        let anchors = [
            (HandleKind::ScaleX, Point::new(b.right(), b.y - pad)),
            (HandleKind::ScaleY, Point::new(b.x - pad, b.bottom())),
            (HandleKind::Rotate, Point::new(b.right() + pad, b.bottom() + pad)),
        ];
        let mut shapes: Vec<Shape> = anchors
            .into_iter()
            .filter(|(kind, _)| rotatable || *kind != HandleKind::Rotate)
            .map(|(kind, at)| {
                Shape::rect(
                    ids.next_id(),
                    RectPos::centered(at, self.options.control_point_size),
                )
                .with_role(ShapeRole::Handle {
                    parent: self.target,
                    kind,
                })
                .with_handler(ControlPointHandler)
            })
            .collect();

        let guide = vec![
            Point::new(b.right(), b.y - pad),
            Point::new(b.x - pad, b.y - pad),
            Point::new(b.x - pad, b.bottom()),
        ];
        shapes.push(
            Shape::path(ids.next_id(), guide)
                .with_role(ShapeRole::Guide {
                    parent: self.target,
                })
                .with_capabilities(Capabilities::decoration())
                .with_draw_state(DrawState::stroked(self.options.selection_stroke)),
        );
        shapes
    }
}

/// Applies one handle drag sample from `last` to `p` to the shape's value.
fn apply_handle(shape: &mut Shape, kind: HandleKind, last: Point, p: Point) -> SceneResult<()> {
    let value = shape.value();
    let b = bounding_box(&value);
    let (dx, dy) = p.delta_from(&last);
    let m = match kind {
        HandleKind::ScaleX => {
            if b.w < MIN_SCALED_EXTENT || b.w + dx < MIN_SCALED_EXTENT {
                return Ok(());
            }
            AffineTransform::identity()
                .translate(b.x, 0.0)
                .scale((b.w + dx) / b.w, 1.0)
                .translate(-b.x, 0.0)
        }
        HandleKind::ScaleY => {
            if b.h < MIN_SCALED_EXTENT || b.h + dy < MIN_SCALED_EXTENT {
                return Ok(());
            }
            AffineTransform::identity()
                .translate(0.0, b.y)
                .scale(1.0, (b.h + dy) / b.h)
                .translate(0.0, -b.y)
        }
        HandleKind::Rotate => {
            if !shape.geometry().is_rotatable() {
                return Ok(());
            }
            let c = b.center();
            let from = (last.y - c.y).atan2(last.x - c.x);
            let to = (p.y - c.y).atan2(p.x - c.x);
            AffineTransform::identity()
                .translate(c.x, c.y)
                .rotate(to - from)
                .translate(-c.x, -c.y)
        }
    };
    shape.set_value(&m.apply_path(&value))?;
    Ok(())
}
