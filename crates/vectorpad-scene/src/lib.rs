//! # VectorPad Scene
//!
//! Shape model, scene engine, layered viewports and the interactive
//! editing sessions built on them. Includes the rendering surface,
//! image loading and raster utilities the scene draws with.

pub mod draw;
pub mod draw_state;
pub mod editor;
pub mod engine;
pub mod handler;
pub mod image_loader;
pub mod model;
pub mod modify;
pub mod raster;
pub mod router;
pub mod surface;
pub mod viewport;

pub use draw::{DrawOptions, DrawOutcome, DrawSession, DrawTool};
pub use draw_state::{
    CompositeMode, DrawState, LineCap, LineJoin, StyleState, TextAlign, TextBaseline,
    TextDirection,
};
pub use editor::{Editor, EditorMode, EditorOptions, PointerInput};
pub use engine::{Engine, EngineId, TriggerOutcome};
pub use handler::{
    ControlPointHandler, CursorStyle, Effect, PassiveHandler, PointerContext, PointerHandler,
    Propagation, Response, SelectableHandler,
};
pub use image_loader::{FileImageLoader, ImageLoader, LoadedImage};
pub use model::{
    Capabilities, CircleShape, Geometry, HandleKind, IdGenerator, ImageShape, LineShape,
    PathShape, PolygonShape, RectShape, Shape, ShapeGeometry, ShapeId, ShapeRole,
};
pub use modify::{DragState, ModifyMode, ModifyOptions, ModifyOutcome, ModifySession};
pub use raster::{
    auto_crop, binarize, bresenham_line, content_bounds, grayscale, index_to_pos, pos_to_index,
    rotate_right_index, CompressedChannel, ContentBounds,
};
pub use router::{classify, PointerRouter, RawPointerEvent};
pub use surface::{PixmapProvider, PixmapSurface, RenderSurface, SurfaceProvider};
pub use viewport::{Viewport, ViewportId};
