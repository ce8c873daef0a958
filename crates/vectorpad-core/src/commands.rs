//! Keyboard command surface.
//!
//! Global key codes map to named editor commands. A second, smaller table
//! holds the keys an active drawing or editing session listens for.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorCommand {
    DrawLine,
    Select,
    DrawRect,
    DrawCircle,
    DeleteSelected,
    DrawPolygon,
}

impl fmt::Display for EditorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DrawLine => "draw-line",
            Self::Select => "select",
            Self::DrawRect => "draw-rect",
            Self::DrawCircle => "draw-circle",
            Self::DeleteSelected => "delete-selected",
            Self::DrawPolygon => "draw-polygon",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub code: u32,
    pub command: EditorCommand,
}

/// Keys consumed by an in-progress session before the global table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionKeys {
    /// Discards the shape being drawn and restarts the tool.
    pub cancel: u32,
    /// Switches a selected shape between vertex and transform editing.
    pub toggle_transform: u32,
    pub finish_polygon: u32,
    pub abort_polygon: u32,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self {
            cancel: 27,
            toggle_transform: 90,
            finish_polygon: 115,
            abort_polygon: 113,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub commands: Vec<KeyBinding>,
    pub session: SessionKeys,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let table = [
            (76, EditorCommand::DrawLine),
            (83, EditorCommand::Select),
            (82, EditorCommand::DrawRect),
            (67, EditorCommand::DrawCircle),
            (8, EditorCommand::DeleteSelected),
            (80, EditorCommand::DrawPolygon),
        ];
        Self {
            commands: table
                .into_iter()
                .map(|(code, command)| KeyBinding { code, command })
                .collect(),
            session: SessionKeys::default(),
        }
    }
}

impl KeyBindings {
    /// First command bound to `code`.
    pub fn command_for(&self, code: u32) -> Option<EditorCommand> {
        self.commands
            .iter()
            .find(|binding| binding.code == code)
            .map(|binding| binding.command)
    }

    /// Codes bound to more than one command.
    pub fn conflicts(&self) -> Vec<u32> {
        let mut seen = Vec::new();
        let mut dup = Vec::new();
        for binding in &self.commands {
            if seen.contains(&binding.code) {
                if !dup.contains(&binding.code) {
                    dup.push(binding.code);
                }
            } else {
                seen.push(binding.code);
            }
        }
        dup
    }
}
