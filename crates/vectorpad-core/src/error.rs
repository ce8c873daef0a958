//! Error handling for VectorPad
//!
//! Provides error types for every layer of the drawing surface:
//! - Geometry errors (mismatched paths, singular matrices)
//! - Scene errors (missing shapes, unknown pointer actions, surface failures)
//! - Raster errors (sized channel construction and indexing)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised by the geometry kernel when inputs cannot be combined.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Two paths or point lists that must match in length do not
    #[error("Mismatched lengths: {left} vs {right}")]
    MismatchedLength {
        /// Length of the left-hand operand.
        left: usize,
        /// Length of the right-hand operand.
        right: usize,
    },

    /// Matrix has no inverse
    #[error("Transform matrix is not invertible")]
    NonInvertible,
}

/// Scene error type
///
/// Represents failures inside the engine, viewports and editing sessions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// No shape with the given id lives in the engine
    #[error("Shape {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// An overlay viewport could not be located
    #[error("Viewport {id} not found")]
    ViewportNotFound {
        /// The viewport identifier.
        id: String,
    },

    /// Pointer action outside the canonical vocabulary
    #[error("Unknown pointer action: {name}")]
    UnknownAction {
        /// The name that failed to parse.
        name: String,
    },

    /// A drawing surface cannot be created with these dimensions
    #[error("Invalid surface dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Image could not be loaded or decoded
    #[error("Failed to load image '{location}': {reason}")]
    Load {
        /// Where the image was requested from.
        location: String,
        /// Why loading failed.
        reason: String,
    },

    /// Geometry operation failed while editing a shape
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

/// Raster error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RasterError {
    /// Zero-sized raster buffers are rejected at construction
    #[error("Invalid raster dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Index outside the raster buffer
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The buffer length.
        len: usize,
    },
}

/// Main error type for VectorPad
///
/// Aggregates all error types into a single enum for unified error handling.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Scene error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Raster error
    #[error(transparent)]
    Raster(#[from] RasterError),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new generic error with a custom message
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// True when the error is a missing-shape lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Scene(SceneError::NotFound { .. }))
    }
}

impl SceneError {
    /// Shorthand for a missing shape
    pub fn not_found(id: impl Into<u64>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

/// Result type alias for VectorPad operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for scene operations
pub type SceneResult<T> = std::result::Result<T, SceneError>;
