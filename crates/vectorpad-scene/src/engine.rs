//! Scene engine.
//!
//! Owns an ordered shape collection and one drawing surface. Collection
//! order is paint order (later shapes on top) and hit-test precedence.
//! Shapes know which engine owns them only by [`EngineId`]; ownership is
//! membership in `shapes`.

use std::fmt;

use tracing::debug;
use uuid::Uuid;
use vectorpad_core::{Point, PointerAction, PointerEvent, SceneError, SceneResult};

use crate::handler::{Effect, PointerContext};
use crate::model::{Shape, ShapeId};
use crate::surface::RenderSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineId(Uuid);

impl EngineId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EngineId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of routing one event through the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriggerOutcome {
    /// `(shape, action)` pairs in the order handlers ran.
    pub dispatched: Vec<(ShapeId, PointerAction)>,
    pub effects: Vec<Effect>,
    /// A handler stopped propagation.
    pub consumed: bool,
}

pub struct Engine {
    id: EngineId,
    shapes: Vec<Shape>,
    surface: Box<dyn RenderSurface>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("id", &self.id)
            .field("shapes", &self.shapes.len())
            .finish()
    }
}

impl Engine {
    pub fn new(surface: Box<dyn RenderSurface>) -> Self {
        Self {
            id: EngineId::new(),
            shapes: Vec::new(),
            surface,
        }
    }

    pub fn id(&self) -> EngineId {
        self.id
    }

    pub fn add(&mut self, mut shape: Shape) -> ShapeId {
        let id = shape.id();
        shape.set_owner(Some(self.id));
        shape.set_inside(false);
        self.shapes.push(shape);
        id
    }

    pub fn add_some(&mut self, shapes: impl IntoIterator<Item = Shape>) -> Vec<ShapeId> {
        shapes.into_iter().map(|s| self.add(s)).collect()
    }

    /// Removes and returns the shape; `None` if it is not a member.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        let mut shape = self.shapes.remove(index);
        shape.set_owner(None);
        Some(shape)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.iter().any(|s| s.id() == id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn ids(&self) -> Vec<ShapeId> {
        self.shapes.iter().map(Shape::id).collect()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get_shape(&self, id: ShapeId) -> SceneResult<&Shape> {
        self.shapes
            .iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| SceneError::not_found(id))
    }

    pub fn get_shape_mut(&mut self, id: ShapeId) -> SceneResult<&mut Shape> {
        self.shapes
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| SceneError::not_found(id))
    }

    pub fn surface(&self) -> &dyn RenderSurface {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> &mut dyn RenderSurface {
        self.surface.as_mut()
    }

    pub fn clear_all(&mut self) {
        self.surface.clear();
    }

    /// Paints every visible shape in collection order.
    pub fn render(&mut self, clear: bool) {
        if clear {
            self.clear_all();
        }
        for shape in self.shapes.iter().filter(|s| s.visible) {
            shape.render(self.surface.as_mut());
        }
    }

    /// Every shape containing `p`, in collection order.
    pub fn hit_test(&self, p: Point) -> Vec<ShapeId> {
        let hits: Vec<ShapeId> = self
            .shapes
            .iter()
            .filter(|s| s.in_region(p))
            .map(Shape::id)
            .collect();
        debug!("hit_test ({:.1}, {:.1}) -> {:?}", p.x, p.y, hits);
        hits
    }

    /// Routes one event to the shapes containing its point.
    ///
    /// Matching shapes receive the action in collection order until one
    /// stops propagation. A `Move` first tells every shape the pointer just
    /// left that it left, then delivers `Enter` to shapes the pointer just
    /// reached and `Move` to shapes it was already inside.
    pub fn trigger(&mut self, event: &PointerEvent) -> TriggerOutcome {
        let mut outcome = TriggerOutcome::default();
        let p = event.point;

        if event.action == PointerAction::Move {
            for shape in self.shapes.iter_mut() {
                if shape.is_inside() && !shape.in_region(p) {
                    shape.set_inside(false);
                    let response = shape.dispatch(&PointerContext {
                        shape: shape.id(),
                        point: p,
                        action: PointerAction::Leave,
                    });
                    outcome.dispatched.push((shape.id(), PointerAction::Leave));
                    outcome.effects.extend(response.effect);
                }
            }
        }

        for shape in self.shapes.iter_mut() {
            if !shape.in_region(p) {
                continue;
            }
            let action = match event.action {
                PointerAction::Move if !shape.is_inside() => {
                    shape.set_inside(true);
                    PointerAction::Enter
                }
                other => other,
            };
            let response = shape.dispatch(&PointerContext {
                shape: shape.id(),
                point: p,
                action,
            });
            outcome.dispatched.push((shape.id(), action));
            outcome.effects.extend(response.effect);
            if response.is_stop() {
                outcome.consumed = true;
                break;
            }
        }

        debug!(
            "{} at ({:.1}, {:.1}) dispatched to {} shape(s)",
            event.action,
            p.x,
            p.y,
            outcome.dispatched.len()
        );
        outcome
    }
}
