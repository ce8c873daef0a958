use std::fmt;

use image::RgbaImage;
use vectorpad_core::{GeometryError, Point, RectPos};

use crate::draw_state::DrawState;
use crate::engine::EngineId;
use crate::handler::{PassiveHandler, PointerContext, PointerHandler, Response, SelectableHandler};
use crate::surface::RenderSurface;

mod circle;
mod image_shape;
mod line;
mod path;
mod polygon;
mod rect;

pub use circle::CircleShape;
pub use image_shape::ImageShape;
pub use line::LineShape;
pub use path::PathShape;
pub use polygon::PolygonShape;
pub use rect::RectShape;

/// Stable shape handle, independent of collection position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ShapeId> for u64 {
    fn from(id: ShapeId) -> Self {
        id.0
    }
}

/// Monotonic id source owned by an editing session.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ShapeId {
        self.last += 1;
        ShapeId(self.last)
    }
}

fn expect_len(value: &[Point], len: usize) -> Result<(), GeometryError> {
    if value.len() != len {
        return Err(GeometryError::MismatchedLength {
            left: len,
            right: value.len(),
        });
    }
    Ok(())
}

/// Behaviour shared by every geometry variant.
///
/// `value` is the variant's editable point list; writing it back through
/// `set_value` re-derives any cached fields.
pub trait ShapeGeometry {
    fn value(&self) -> Vec<Point>;
    fn set_value(&mut self, value: &[Point]) -> Result<(), GeometryError>;
    fn in_region(&self, p: Point) -> bool;
    fn render(&self, surface: &mut dyn RenderSurface);

    fn translate(&mut self, dx: f64, dy: f64) {
        let moved: Vec<Point> = self.value().iter().map(|p| p.offset(dx, dy)).collect();
        // same length as the current value, so this cannot fail
        let _ = self.set_value(&moved);
    }
}

#[derive(Debug, Clone)]
pub enum Geometry {
    Line(LineShape),
    Path(PathShape),
    Polygon(PolygonShape),
    Circle(CircleShape),
    Rect(RectShape),
    Image(ImageShape),
}

impl Geometry {
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Line(_) => "line",
            Geometry::Path(_) => "path",
            Geometry::Polygon(_) => "polygon",
            Geometry::Circle(_) => "circle",
            Geometry::Rect(_) => "rect",
            Geometry::Image(_) => "image",
        }
    }

    /// Boxes are stored as an axis-aligned diagonal, so turning their
    /// value points cannot express a rotation.
    pub fn is_rotatable(&self) -> bool {
        !matches!(self, Geometry::Rect(_) | Geometry::Image(_))
    }

    fn inner(&self) -> &dyn ShapeGeometry {
        match self {
            Geometry::Line(g) => g,
            Geometry::Path(g) => g,
            Geometry::Polygon(g) => g,
            Geometry::Circle(g) => g,
            Geometry::Rect(g) => g,
            Geometry::Image(g) => g,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ShapeGeometry {
        match self {
            Geometry::Line(g) => g,
            Geometry::Path(g) => g,
            Geometry::Polygon(g) => g,
            Geometry::Circle(g) => g,
            Geometry::Rect(g) => g,
            Geometry::Image(g) => g,
        }
    }
}

impl ShapeGeometry for Geometry {
    fn value(&self) -> Vec<Point> {
        self.inner().value()
    }

    fn set_value(&mut self, value: &[Point]) -> Result<(), GeometryError> {
        self.inner_mut().set_value(value)
    }

    fn in_region(&self, p: Point) -> bool {
        self.inner().in_region(p)
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        self.inner().render(surface)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.inner_mut().translate(dx, dy)
    }
}

/// What the editor may do with a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Takes part in hit tests.
    pub hittable: bool,
    /// Can be dragged as a whole while selected.
    pub movable: bool,
    /// A press in Select mode lifts it into a modify session.
    pub selectable: bool,
    /// Gets control points and transform handles while selected.
    pub modifiable: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            hittable: true,
            movable: false,
            selectable: false,
            modifiable: false,
        }
    }
}

impl Capabilities {
    /// Everything on: content the user can pick up and reshape.
    pub fn editable() -> Self {
        Self {
            hittable: true,
            movable: true,
            selectable: true,
            modifiable: true,
        }
    }

    /// Drawn but never hit.
    pub fn decoration() -> Self {
        Self {
            hittable: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    ScaleX,
    ScaleY,
    Rotate,
}

/// What a shape is for. Anything but `Content` is an editing affordance
/// and never part of the scene proper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeRole {
    #[default]
    Content,
    ControlPoint {
        parent: ShapeId,
        path_index: usize,
    },
    Handle {
        parent: ShapeId,
        kind: HandleKind,
    },
    Guide {
        parent: ShapeId,
    },
}

impl ShapeRole {
    pub fn is_affordance(&self) -> bool {
        !matches!(self, ShapeRole::Content)
    }
}

pub struct Shape {
    id: ShapeId,
    pub visible: bool,
    pub draw_state: Option<DrawState>,
    pub capabilities: Capabilities,
    pub role: ShapeRole,
    geometry: Geometry,
    handler: Box<dyn PointerHandler>,
    owner: Option<EngineId>,
    inside: bool,
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("id", &self.id)
            .field("kind", &self.geometry.kind())
            .field("visible", &self.visible)
            .field("role", &self.role)
            .field("owner", &self.owner)
            .finish()
    }
}

impl Shape {
    pub fn new(id: ShapeId, geometry: Geometry) -> Self {
        Self {
            id,
            visible: true,
            draw_state: None,
            capabilities: Capabilities::default(),
            role: ShapeRole::Content,
            geometry,
            handler: Box::new(PassiveHandler),
            owner: None,
            inside: false,
        }
    }

    pub fn line(id: ShapeId, start: Point, end: Point) -> Self {
        Self::new(id, Geometry::Line(LineShape::new(start, end)))
    }

    pub fn path(id: ShapeId, points: Vec<Point>) -> Self {
        Self::new(id, Geometry::Path(PathShape::new(points)))
    }

    pub fn polygon(id: ShapeId, points: Vec<Point>) -> Self {
        Self::new(id, Geometry::Polygon(PolygonShape::new(points)))
    }

    pub fn circle(id: ShapeId, center: Point, radius: f64) -> Self {
        Self::new(id, Geometry::Circle(CircleShape::new(center, radius)))
    }

    pub fn rect(id: ShapeId, rect: RectPos) -> Self {
        Self::new(id, Geometry::Rect(RectShape::new(rect)))
    }

    pub fn image(id: ShapeId, image: RgbaImage, rect: RectPos) -> Self {
        Self::new(id, Geometry::Image(ImageShape::new(image, rect)))
    }

    pub fn with_draw_state(mut self, draw_state: DrawState) -> Self {
        self.draw_state = Some(draw_state);
        self
    }

    pub fn with_handler(mut self, handler: impl PointerHandler + 'static) -> Self {
        self.handler = Box::new(handler);
        self
    }

    pub fn with_role(mut self, role: ShapeRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Makes the shape pick-up-able: a press selects it for editing.
    pub fn selectable(self) -> Self {
        self.with_capabilities(Capabilities::editable())
            .with_handler(SelectableHandler)
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut Geometry {
        &mut self.geometry
    }

    pub fn kind(&self) -> &'static str {
        self.geometry.kind()
    }

    pub fn owner(&self) -> Option<EngineId> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: Option<EngineId>) {
        self.owner = owner;
    }

    pub fn value(&self) -> Vec<Point> {
        self.geometry.value()
    }

    pub fn set_value(&mut self, value: &[Point]) -> Result<(), GeometryError> {
        self.geometry.set_value(value)
    }

    /// Hit test; non-hittable shapes never match.
    pub fn in_region(&self, p: Point) -> bool {
        self.capabilities.hittable && self.geometry.in_region(p)
    }

    /// Paints the geometry inside a save/restore pair so the draw state
    /// cannot leak into later shapes.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        surface.save();
        if let Some(state) = &self.draw_state {
            state.apply_to(surface.style_mut());
        }
        self.geometry.render(surface);
        surface.restore();
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.geometry.translate(dx, dy);
    }

    pub fn move_up(&mut self, n: f64) {
        self.translate(0.0, -n);
    }

    pub fn move_down(&mut self, n: f64) {
        self.translate(0.0, n);
    }

    pub fn move_left(&mut self, n: f64) {
        self.translate(-n, 0.0);
    }

    pub fn move_right(&mut self, n: f64) {
        self.translate(n, 0.0);
    }

    pub(crate) fn is_inside(&self) -> bool {
        self.inside
    }

    pub(crate) fn set_inside(&mut self, inside: bool) {
        self.inside = inside;
    }

    pub(crate) fn dispatch(&mut self, ctx: &PointerContext) -> Response {
        self.handler.dispatch(ctx)
    }
}
