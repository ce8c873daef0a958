//! Pointer router.
//!
//! Turns raw platform pointer events into canonical actions in surface
//! coordinates and forwards them to an [`Editor`].

use tracing::trace;
use vectorpad_core::{Point, PointerAction, PointerButton, SceneError, SceneResult};

use crate::editor::{Editor, PointerInput};

/// Pointer event as the host delivers it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPointerEvent {
    pub kind: String,
    pub offset_x: f64,
    pub offset_y: f64,
    pub button: i16,
}

impl RawPointerEvent {
    pub fn new(kind: impl Into<String>, offset_x: f64, offset_y: f64) -> Self {
        Self {
            kind: kind.into(),
            offset_x,
            offset_y,
            button: 0,
        }
    }

    pub fn with_button(mut self, button: i16) -> Self {
        self.button = button;
        self
    }
}

/// Maps a raw event name onto a canonical action and the button it implies.
///
/// A context-menu request is a secondary-button press.
pub fn classify(kind: &str, button: i16) -> SceneResult<(PointerAction, PointerButton)> {
    let action = match kind {
        "mousedown" => PointerAction::Down,
        "mouseenter" => PointerAction::Enter,
        "mouseleave" => PointerAction::Leave,
        "mousemove" => PointerAction::Move,
        "mouseout" => PointerAction::Out,
        "mouseover" => PointerAction::Over,
        "mouseup" => PointerAction::Up,
        "wheel" => PointerAction::Wheel,
        "contextmenu" => return Ok((PointerAction::Down, PointerButton::Secondary)),
        other => {
            return Err(SceneError::UnknownAction {
                name: other.to_string(),
            })
        }
    };
    Ok((action, PointerButton::from_code(button)))
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerRouter {
    /// Position of the drawing surface inside the host's coordinate space.
    pub surface_offset: Point,
}

impl PointerRouter {
    pub fn new(surface_offset: Point) -> Self {
        Self { surface_offset }
    }

    pub fn normalize(&self, raw: &RawPointerEvent) -> SceneResult<PointerInput> {
        let (action, button) = classify(&raw.kind, raw.button)?;
        let point = Point::new(
            raw.offset_x - self.surface_offset.x,
            raw.offset_y - self.surface_offset.y,
        );
        Ok(PointerInput {
            point,
            action,
            button,
        })
    }

    pub fn route(&self, editor: &mut Editor, raw: &RawPointerEvent) -> SceneResult<()> {
        let input = self.normalize(raw)?;
        trace!("{} -> {:?}", raw.kind, input);
        editor.pointer(input)
    }
}
