//! # VectorPad Core
//!
//! Core types shared by every VectorPad crate: the planar geometry kernel,
//! affine transforms between device and scene space, the canonical pointer
//! vocabulary, the keyboard command table and the error taxonomy.

pub mod color;
pub mod commands;
pub mod constants;
pub mod error;
pub mod event;
pub mod geometry;
pub mod transform;
pub mod types;

pub use color::Rgba;
pub use commands::{EditorCommand, KeyBinding, KeyBindings, SessionKeys};
pub use error::{Error, GeometryError, RasterError, Result, SceneError, SceneResult};
pub use event::{PointerAction, PointerButton, PointerEvent};
pub use geometry::{
    all_same_side, bounding_box, copy_path, distance, first_rect_containing, is_convex,
    paths_equal, point_in_convex_polygon, point_in_rect, point_in_triangle, point_line_sign,
    point_on_segment, same_side, two_point_line, Line, Point, RectPos,
};
pub use transform::{transform_path, transform_point, AffineTransform, TransformDelta};
pub use types::{shared, Shared};
