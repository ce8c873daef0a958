//! Canonical pointer vocabulary.
//!
//! Every pointer interaction reaching an engine is one of eight actions.
//! Raw device event names are classified by the scene router; the names
//! accepted here are the canonical ones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerAction {
    Down,
    Enter,
    Leave,
    Move,
    Out,
    Over,
    Up,
    Wheel,
}

impl PointerAction {
    pub const ALL: [PointerAction; 8] = [
        Self::Down,
        Self::Enter,
        Self::Leave,
        Self::Move,
        Self::Out,
        Self::Over,
        Self::Up,
        Self::Wheel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Enter => "enter",
            Self::Leave => "leave",
            Self::Move => "move",
            Self::Out => "out",
            Self::Over => "over",
            Self::Up => "up",
            Self::Wheel => "wheel",
        }
    }
}

impl fmt::Display for PointerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PointerAction {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| SceneError::UnknownAction {
                name: s.to_string(),
            })
    }
}

/// Which button produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
    None,
}

impl PointerButton {
    /// Maps a DOM-style button number.
    pub fn from_code(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::None,
        }
    }
}

/// A pointer event already resolved into scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub point: Point,
    pub action: PointerAction,
}

impl PointerEvent {
    pub fn new(point: Point, action: PointerAction) -> Self {
        Self { point, action }
    }
}
