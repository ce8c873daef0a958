//! Editor session
//!
//! Owns the base viewport, the shape id generator and whichever editing
//! session is active. Keys go to the active session first and then to the
//! global command table; pointer input goes to the active session or, when
//! none is running, to the base engine whose handler effects the editor
//! then applies.

use std::rc::Rc;

use image::RgbaImage;
use tracing::{debug, info};
use vectorpad_core::constants::{
    CONTROL_POINT_SIZE, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, HANDLE_PADDING,
};
use vectorpad_core::{
    AffineTransform, EditorCommand, KeyBindings, Point, PointerAction, PointerButton, Rgba,
    SceneResult,
};

use crate::draw::{DrawOptions, DrawOutcome, DrawSession, DrawTool};
use crate::handler::{CursorStyle, Effect};
use crate::model::{IdGenerator, Shape, ShapeId};
use crate::modify::{ModifyOptions, ModifySession};
use crate::surface::SurfaceProvider;
use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    pub width: u32,
    pub height: u32,
    pub control_point_size: f64,
    pub handle_padding: f64,
    pub selection_stroke: Rgba,
    pub default_stroke: Rgba,
    pub keys: KeyBindings,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
            control_point_size: CONTROL_POINT_SIZE,
            handle_padding: HANDLE_PADDING,
            selection_stroke: Rgba::RED,
            default_stroke: Rgba::BLACK,
            keys: KeyBindings::default(),
        }
    }
}

impl EditorOptions {
    fn modify_options(&self) -> ModifyOptions {
        ModifyOptions {
            control_point_size: self.control_point_size,
            handle_padding: self.handle_padding,
            selection_stroke: self.selection_stroke,
        }
    }

    fn draw_options(&self) -> DrawOptions {
        DrawOptions {
            stroke: self.default_stroke,
            keys: self.keys.session,
        }
    }
}

/// One pointer sample in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub point: Point,
    pub action: PointerAction,
    pub button: PointerButton,
}

impl PointerInput {
    pub fn new(point: Point, action: PointerAction) -> Self {
        Self {
            point,
            action,
            button: PointerButton::Primary,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Idle,
    Select,
    Draw(DrawTool),
}

#[derive(Debug)]
pub struct Editor {
    viewport: Viewport,
    ids: IdGenerator,
    options: EditorOptions,
    mode: EditorMode,
    modify: Option<ModifySession>,
    draw: Option<DrawSession>,
    cursor: CursorStyle,
}

impl Editor {
    pub fn new(options: EditorOptions, provider: Rc<dyn SurfaceProvider>) -> SceneResult<Self> {
        let viewport = Viewport::new(
            options.width,
            options.height,
            AffineTransform::identity(),
            provider,
        )?;
        info!(
            "Editor ready: {}x{} viewport",
            options.width, options.height
        );
        Ok(Self {
            viewport,
            ids: IdGenerator::new(),
            options,
            mode: EditorMode::Idle,
            modify: None,
            draw: None,
            cursor: CursorStyle::Default,
        })
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    /// Shape currently lifted into the modify overlay.
    pub fn selected(&self) -> Option<ShapeId> {
        self.modify.as_ref().map(ModifySession::target)
    }

    pub fn modify_session(&self) -> Option<&ModifySession> {
        self.modify.as_ref()
    }

    pub fn draw_session(&self) -> Option<&DrawSession> {
        self.draw.as_ref()
    }

    pub fn next_id(&mut self) -> ShapeId {
        self.ids.next_id()
    }

    /// Adds scene content to the base engine and repaints.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = self.viewport.engine_mut().add(shape);
        self.viewport.render(true);
        id
    }

    pub fn render(&mut self) {
        self.viewport.render(true);
    }

    pub fn composite(&self) -> RgbaImage {
        self.viewport.composite()
    }

    pub fn command(&mut self, command: EditorCommand) -> SceneResult<()> {
        debug!("Command {}", command);
        match command {
            EditorCommand::Select => {
                self.end_sessions();
                self.mode = EditorMode::Select;
            }
            EditorCommand::DrawLine => self.start_draw(DrawTool::Line)?,
            EditorCommand::DrawRect => self.start_draw(DrawTool::Rect)?,
            EditorCommand::DrawCircle => self.start_draw(DrawTool::Circle)?,
            EditorCommand::DrawPolygon => self.start_draw(DrawTool::Polygon)?,
            EditorCommand::DeleteSelected => match self.modify.take() {
                Some(session) => {
                    session.delete(&mut self.viewport);
                    self.cursor = CursorStyle::Default;
                }
                None => debug!("Nothing selected to delete"),
            },
        }
        Ok(())
    }

    /// Returns whether the key meant anything.
    pub fn key(&mut self, code: u32) -> SceneResult<bool> {
        if let Some(session) = self.modify.as_mut() {
            if code == self.options.keys.session.toggle_transform {
                session.toggle_mode(&mut self.viewport, &mut self.ids)?;
                return Ok(true);
            }
        }
        if let Some(session) = self.draw.as_mut() {
            match session.key(&mut self.viewport, &mut self.ids, code)? {
                Some(DrawOutcome::Cancelled) => {
                    self.end_sessions();
                    self.mode = EditorMode::Idle;
                    return Ok(true);
                }
                Some(_) => return Ok(true),
                None => {}
            }
        }
        match self.options.keys.command_for(code) {
            Some(command) => {
                self.command(command)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn pointer(&mut self, input: PointerInput) -> SceneResult<()> {
        if let Some(session) = self.draw.as_mut() {
            session.handle_pointer(
                &mut self.viewport,
                &mut self.ids,
                input.point,
                input.action,
                input.button,
            )?;
            return Ok(());
        }

        if let Some(session) = self.modify.as_mut() {
            let outcome =
                session.handle_pointer(&mut self.viewport, &mut self.ids, input.point, input.action)?;
            self.apply_cursor_effects(&outcome.effects);
            if outcome.deselected.is_some() {
                self.modify = None;
                self.cursor = CursorStyle::Default;
            }
            return Ok(());
        }

        let outcome = self.viewport.trigger(input.point, input.action);
        self.apply_cursor_effects(&outcome.effects);
        if self.mode == EditorMode::Select {
            let engine = self.viewport.engine();
            let selected = outcome.effects.iter().find_map(|e| match e {
                Effect::Select(id) => Some(*id),
                Effect::SetCursor(_) => None,
            });
            let selected = selected.filter(|id| {
                let selectable = engine
                    .get_shape(*id)
                    .map(|s| s.capabilities.selectable)
                    .unwrap_or(false);
                if !selectable {
                    debug!("Shape {} is not selectable", id);
                }
                selectable
            });
            if let Some(id) = selected {
                self.modify = Some(ModifySession::begin(
                    &mut self.viewport,
                    id,
                    &mut self.ids,
                    self.options.modify_options(),
                )?);
            }
        }
        Ok(())
    }

    fn apply_cursor_effects(&mut self, effects: &[Effect]) {
        for effect in effects {
            if let Effect::SetCursor(style) = effect {
                self.cursor = *style;
            }
        }
    }

    fn start_draw(&mut self, tool: DrawTool) -> SceneResult<()> {
        self.end_sessions();
        self.draw = Some(DrawSession::begin(
            &mut self.viewport,
            tool,
            &mut self.ids,
            self.options.draw_options(),
        )?);
        self.mode = EditorMode::Draw(tool);
        Ok(())
    }

    fn end_sessions(&mut self) {
        if let Some(session) = self.modify.take() {
            session.commit(&mut self.viewport);
        }
        if let Some(session) = self.draw.take() {
            session.end(&mut self.viewport);
        }
        self.cursor = CursorStyle::Default;
    }
}
