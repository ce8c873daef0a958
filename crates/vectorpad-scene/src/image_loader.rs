//! Image loading interface
//!
//! Decodes raster images for placement as image shapes.

use std::path::PathBuf;

use async_trait::async_trait;
use image::RgbaImage;
use tracing::{debug, warn};
use vectorpad_core::{SceneError, SceneResult};

/// A decoded raster with its intrinsic size.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub image: RgbaImage,
    pub width: u32,
    pub height: u32,
}

impl LoadedImage {
    pub fn new(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            image,
            width,
            height,
        }
    }
}

/// Loader trait for image sources
///
/// Implement this trait to fetch and decode images from a location
#[async_trait]
pub trait ImageLoader: Send + Sync {
    /// Loads and decodes the image at `location`
    async fn load(&self, location: &str) -> SceneResult<LoadedImage>;
}

/// Reads images from the local filesystem, optionally below a root
/// directory.
#[derive(Debug, Clone, Default)]
pub struct FileImageLoader {
    root: Option<PathBuf>,
}

impl FileImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, location: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(location),
            None => PathBuf::from(location),
        }
    }
}

fn load_error(location: &str, reason: impl ToString) -> SceneError {
    SceneError::Load {
        location: location.to_string(),
        reason: reason.to_string(),
    }
}

#[async_trait]
impl ImageLoader for FileImageLoader {
    async fn load(&self, location: &str) -> SceneResult<LoadedImage> {
        let path = self.resolve(location);
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            warn!("Failed to read image {}: {}", path.display(), e);
            load_error(location, e)
        })?;
        let decoded = image::load_from_memory(&bytes).map_err(|e| load_error(location, e))?;
        let loaded = LoadedImage::new(decoded.to_rgba8());
        debug!(
            "Loaded image {} ({}x{})",
            path.display(),
            loaded.width,
            loaded.height
        );
        Ok(loaded)
    }
}
