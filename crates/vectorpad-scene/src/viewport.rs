//! Viewport: an engine plus the device-to-scene transform.
//!
//! A viewport and every overlay cloned from it hold the same
//! [`Shared<AffineTransform>`], so changing the transform on one moves all
//! layers together. Overlays are kept in a flat list that is only appended
//! to or emptied as a whole.

use std::fmt;
use std::rc::Rc;

use image::RgbaImage;
use tracing::{debug, warn};
use uuid::Uuid;
use vectorpad_core::{
    shared, AffineTransform, Point, PointerAction, PointerEvent, SceneError, SceneResult, Shared,
};

use crate::engine::{Engine, TriggerOutcome};
use crate::surface::SurfaceProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewportId(Uuid);

impl fmt::Display for ViewportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct Viewport {
    id: ViewportId,
    width: u32,
    height: u32,
    transform: Shared<AffineTransform>,
    engine: Engine,
    overlays: Vec<Viewport>,
    provider: Rc<dyn SurfaceProvider>,
}

impl fmt::Debug for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("engine", &self.engine)
            .field("overlays", &self.overlays.len())
            .finish()
    }
}

impl Viewport {
    pub fn new(
        width: u32,
        height: u32,
        transform: AffineTransform,
        provider: Rc<dyn SurfaceProvider>,
    ) -> SceneResult<Self> {
        Self::with_shared_transform(width, height, shared(transform), provider)
    }

    fn with_shared_transform(
        width: u32,
        height: u32,
        transform: Shared<AffineTransform>,
        provider: Rc<dyn SurfaceProvider>,
    ) -> SceneResult<Self> {
        let surface = provider.create(width, height)?;
        Ok(Self {
            id: ViewportId(Uuid::new_v4()),
            width,
            height,
            transform,
            engine: Engine::new(surface),
            overlays: Vec::new(),
            provider,
        })
    }

    pub fn id(&self) -> ViewportId {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Records a new logical size. The surface is not reallocated.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn transform(&self) -> Shared<AffineTransform> {
        Rc::clone(&self.transform)
    }

    pub fn current_transform(&self) -> AffineTransform {
        *self.transform.borrow()
    }

    /// Replaces the shared transform with `f(current)`; every overlay sees
    /// the change.
    pub fn update_transform(&self, f: impl FnOnce(&AffineTransform) -> AffineTransform) {
        let next = f(&self.transform.borrow());
        *self.transform.borrow_mut() = next;
    }

    pub fn shares_transform_with(&self, other: &Viewport) -> bool {
        Rc::ptr_eq(&self.transform, &other.transform)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Maps a device point into scene space.
    pub fn to_scene(&self, device: Point) -> Point {
        self.transform.borrow().apply(device)
    }

    pub fn transform_event(&self, action: PointerAction, device: Point) -> PointerEvent {
        PointerEvent::new(self.to_scene(device), action)
    }

    pub fn trigger(&mut self, device: Point, action: PointerAction) -> TriggerOutcome {
        let event = self.transform_event(action, device);
        self.engine.trigger(&event)
    }

    /// Same size, same transform object, fresh surface and empty engine.
    pub fn clone_overlay(&self) -> SceneResult<Viewport> {
        let overlay = Self::with_shared_transform(
            self.width,
            self.height,
            Rc::clone(&self.transform),
            Rc::clone(&self.provider),
        )?;
        debug!("Cloned overlay {} from viewport {}", overlay.id, self.id);
        Ok(overlay)
    }

    pub fn append_viewport(&mut self, overlay: Viewport) {
        self.overlays.push(overlay);
    }

    /// Drops every overlay and returns how many there were.
    pub fn remove_all_viewports(&mut self) -> usize {
        let n = self.overlays.len();
        self.overlays.clear();
        n
    }

    pub fn overlays(&self) -> &[Viewport] {
        &self.overlays
    }

    pub fn overlay(&self, id: ViewportId) -> SceneResult<&Viewport> {
        self.overlays
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| SceneError::ViewportNotFound { id: id.to_string() })
    }

    pub fn overlay_mut(&mut self, id: ViewportId) -> SceneResult<&mut Viewport> {
        self.overlays
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| SceneError::ViewportNotFound { id: id.to_string() })
    }

    /// Renders this layer through the scene-to-device transform, then every
    /// overlay. A singular transform falls back to identity.
    pub fn render(&mut self, clear: bool) {
        let to_device = match self.transform.borrow().try_inverse() {
            Ok(inverse) => inverse,
            Err(e) => {
                warn!("Viewport {} rendering with identity: {}", self.id, e);
                AffineTransform::identity()
            }
        };
        self.engine.surface_mut().set_transform(&to_device);
        self.engine.render(clear);
        for overlay in &mut self.overlays {
            overlay.render(clear);
        }
    }

    /// Flattens this layer and its overlays, bottom to top.
    pub fn composite(&self) -> RgbaImage {
        let mut base = self.engine.surface().snapshot();
        for overlay in &self.overlays {
            image::imageops::overlay(&mut base, &overlay.composite(), 0, 0);
        }
        base
    }
}
