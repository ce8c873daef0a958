use std::fmt;

use image::RgbaImage;
use vectorpad_core::{GeometryError, Point, RectPos, Rgba};

use super::{expect_len, ShapeGeometry};
use crate::image_loader::LoadedImage;
use crate::raster;
use crate::surface::RenderSurface;

/// Bitmap placed into a scene rectangle.
#[derive(Clone)]
pub struct ImageShape {
    pub image: RgbaImage,
    pub rect: RectPos,
}

impl fmt::Debug for ImageShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageShape")
            .field("size", &self.image.dimensions())
            .field("rect", &self.rect)
            .finish()
    }
}

impl ImageShape {
    pub fn new(image: RgbaImage, rect: RectPos) -> Self {
        Self { image, rect }
    }

    /// Places a loaded image at the origin at its intrinsic size.
    pub fn from_loaded(loaded: LoadedImage) -> Self {
        let rect = RectPos::new(0.0, 0.0, loaded.width as f64, loaded.height as f64);
        Self::new(loaded.image, rect)
    }

    /// Crops away the `background` border before placing the image at the
    /// origin. `None` if the image holds nothing but background.
    pub fn auto_cropped(loaded: &LoadedImage, background: Rgba) -> Option<Self> {
        let cropped = raster::auto_crop(&loaded.image, background)?;
        let rect = RectPos::new(0.0, 0.0, cropped.width() as f64, cropped.height() as f64);
        Some(Self::new(cropped, rect))
    }
}

impl ShapeGeometry for ImageShape {
    fn value(&self) -> Vec<Point> {
        vec![self.rect.top_left(), self.rect.bottom_right()]
    }

    fn set_value(&mut self, value: &[Point]) -> Result<(), GeometryError> {
        expect_len(value, 2)?;
        self.rect = RectPos::from_corners(value[0], value[1]);
        Ok(())
    }

    fn in_region(&self, p: Point) -> bool {
        self.rect.contains(p)
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        surface.draw_image(&self.image, self.rect);
    }
}
