//! Pointer handlers attached to shapes.
//!
//! Each shape carries one handler strategy. The engine dispatches the
//! canonical action to the matching method; the returned [`Response`]
//! decides whether the event keeps travelling to shapes below and may ask
//! the owner of the engine to do something through an [`Effect`].

use vectorpad_core::{Point, PointerAction};

use crate::model::ShapeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Move,
}

/// Side effects requested by a handler, applied by whoever owns the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start editing this shape.
    Select(ShapeId),
    SetCursor(CursorStyle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub propagation: Propagation,
    pub effect: Option<Effect>,
}

impl Response {
    pub fn pass() -> Self {
        Self {
            propagation: Propagation::Continue,
            effect: None,
        }
    }

    pub fn stop() -> Self {
        Self {
            propagation: Propagation::Stop,
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn is_stop(&self) -> bool {
        self.propagation == Propagation::Stop
    }
}

/// What a handler sees of the event it is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerContext {
    pub shape: ShapeId,
    pub point: Point,
    pub action: PointerAction,
}

pub trait PointerHandler {
    fn on_down(&mut self, _ctx: &PointerContext) -> Response {
        Response::pass()
    }
    fn on_enter(&mut self, _ctx: &PointerContext) -> Response {
        Response::pass()
    }
    fn on_leave(&mut self, _ctx: &PointerContext) -> Response {
        Response::pass()
    }
    fn on_move(&mut self, _ctx: &PointerContext) -> Response {
        Response::pass()
    }
    fn on_out(&mut self, _ctx: &PointerContext) -> Response {
        Response::pass()
    }
    fn on_over(&mut self, _ctx: &PointerContext) -> Response {
        Response::pass()
    }
    fn on_up(&mut self, _ctx: &PointerContext) -> Response {
        Response::pass()
    }
    fn on_wheel(&mut self, _ctx: &PointerContext) -> Response {
        Response::pass()
    }

    fn dispatch(&mut self, ctx: &PointerContext) -> Response {
        match ctx.action {
            PointerAction::Down => self.on_down(ctx),
            PointerAction::Enter => self.on_enter(ctx),
            PointerAction::Leave => self.on_leave(ctx),
            PointerAction::Move => self.on_move(ctx),
            PointerAction::Out => self.on_out(ctx),
            PointerAction::Over => self.on_over(ctx),
            PointerAction::Up => self.on_up(ctx),
            PointerAction::Wheel => self.on_wheel(ctx),
        }
    }
}

/// Lets every event through.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassiveHandler;

impl PointerHandler for PassiveHandler {}

/// Consumes a press and asks for the shape to be selected.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectableHandler;

impl PointerHandler for SelectableHandler {
    fn on_down(&mut self, ctx: &PointerContext) -> Response {
        Response::stop().with_effect(Effect::Select(ctx.shape))
    }
}

/// Switches the cursor while hovering a control point or handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct ControlPointHandler;

impl PointerHandler for ControlPointHandler {
    fn on_enter(&mut self, _ctx: &PointerContext) -> Response {
        Response::stop().with_effect(Effect::SetCursor(CursorStyle::Move))
    }

    fn on_leave(&mut self, _ctx: &PointerContext) -> Response {
        Response::stop().with_effect(Effect::SetCursor(CursorStyle::Default))
    }
}
