//! # VectorPad
//!
//! An interactive 2D vector-drawing surface:
//! - Lines, paths, polygons, circles, rectangles and images
//! - Geometric hit-testing with enter/leave tracking
//! - Layered viewports sharing one device-to-scene transform
//! - In-place editing through control points and transform handles
//!
//! ## Architecture
//!
//! VectorPad is organized as a workspace with multiple crates:
//!
//! 1. **vectorpad-core** - Geometry kernel, affine transforms, pointer vocabulary, errors
//! 2. **vectorpad-scene** - Shapes, engine, viewports, editing sessions, rendering
//! 3. **vectorpad-settings** - Editor configuration files
//! 4. **vectorpad** - Headless binary that wires the crates together

pub mod demo;

pub use vectorpad_core::{
    AffineTransform, EditorCommand, Error, GeometryError, KeyBindings, Point, PointerAction,
    PointerButton, RectPos, Result, Rgba, SceneError, SceneResult,
};
pub use vectorpad_scene::{
    Editor, EditorMode, EditorOptions, Engine, FileImageLoader, ImageLoader, ImageShape,
    PixmapProvider, PointerInput, PointerRouter, RawPointerEvent, Shape, ShapeId, Viewport,
};
pub use vectorpad_settings::{EditorConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Maps a loaded configuration onto the options the editor is built with.
pub fn editor_options(config: &EditorConfig) -> EditorOptions {
    EditorOptions {
        width: config.viewport.width,
        height: config.viewport.height,
        control_point_size: config.editing.control_point_size,
        handle_padding: config.editing.transform_handle_padding,
        selection_stroke: config.editing.selection_stroke,
        default_stroke: config.editing.default_stroke,
        keys: config.keys.clone(),
    }
}
