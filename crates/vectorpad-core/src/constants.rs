//! Shared numeric defaults.

/// Side length of a vertex control point, in scene units.
pub const CONTROL_POINT_SIZE: f64 = 4.0;

/// Distance between a shape's bounding box and its transform handles.
pub const HANDLE_PADDING: f64 = 10.0;

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1024;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 768;

/// Relative tolerance for point-on-segment hit tests.
pub const LINE_HIT_EPSILON: f64 = 1e-9;

/// Tolerance used when comparing paths produced by transforms.
pub const PATH_EPSILON: f64 = 1e-6;
