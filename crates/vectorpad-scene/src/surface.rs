//! Drawing surfaces.
//!
//! The engine only needs "render this polyline/circle/image now"; how the
//! pixels are produced is up to the [`RenderSurface`] implementation. The
//! default backend rasterizes with tiny-skia into an RGBA pixmap.
//!
//! Features:
//! - Canvas-style save/restore of the style context
//! - Scene-to-device transform applied to every primitive
//! - Offset shadows for stroked and filled paths
//! - Snapshot into an `image::RgbaImage`

use image::RgbaImage;
use tiny_skia::{
    Color, ColorU8, FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};
use tracing::warn;
use vectorpad_core::{AffineTransform, Point, RectPos, Rgba, SceneError, SceneResult};

use crate::draw_state::{LineCap, LineJoin, StyleState};

pub trait RenderSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Pushes the style context and transform.
    fn save(&mut self);
    /// Pops the most recent [`save`](Self::save); a no-op on an empty stack.
    fn restore(&mut self);

    fn style(&self) -> &StyleState;
    fn style_mut(&mut self) -> &mut StyleState;

    /// Scene-to-device transform for subsequent primitives.
    fn set_transform(&mut self, transform: &AffineTransform);

    fn clear(&mut self);
    fn stroke_polyline(&mut self, points: &[Point], closed: bool);
    fn fill_polyline(&mut self, points: &[Point]);
    fn stroke_circle(&mut self, center: Point, radius: f64);
    fn fill_circle(&mut self, center: Point, radius: f64);
    fn draw_image(&mut self, image: &RgbaImage, rect: RectPos);

    /// Copies the current pixels out, un-premultiplied.
    fn snapshot(&self) -> RgbaImage;
}

/// Mount collaborator: hands out fresh surfaces of a given size.
pub trait SurfaceProvider {
    fn create(&self, width: u32, height: u32) -> SceneResult<Box<dyn RenderSurface>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PixmapProvider;

impl SurfaceProvider for PixmapProvider {
    fn create(&self, width: u32, height: u32) -> SceneResult<Box<dyn RenderSurface>> {
        Ok(Box::new(PixmapSurface::new(width, height)?))
    }
}

pub struct PixmapSurface {
    pixmap: Pixmap,
    style: StyleState,
    transform: Transform,
    stack: Vec<(StyleState, Transform)>,
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("depth", &self.stack.len())
            .finish()
    }
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> SceneResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(SceneError::InvalidDimensions { width, height })?;
        Ok(Self {
            pixmap,
            style: StyleState::default(),
            transform: Transform::identity(),
            stack: Vec::new(),
        })
    }

    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    fn paint(&self, color: Rgba) -> Paint<'static> {
        let mut paint = Paint::default();
        let alpha = (color.a as f32 * self.style.global_alpha.clamp(0.0, 1.0)).round() as u8;
        paint.set_color_rgba8(color.r, color.g, color.b, alpha);
        paint.anti_alias = false;
        paint.blend_mode = self.style.composite.blend_mode();
        paint
    }

    fn stroke(&self) -> Stroke {
        Stroke {
            width: self.style.line_width,
            miter_limit: self.style.miter_limit,
            line_cap: match self.style.line_cap {
                LineCap::Butt => tiny_skia::LineCap::Butt,
                LineCap::Round => tiny_skia::LineCap::Round,
                LineCap::Square => tiny_skia::LineCap::Square,
            },
            line_join: match self.style.line_join {
                LineJoin::Miter => tiny_skia::LineJoin::Miter,
                LineJoin::Round => tiny_skia::LineJoin::Round,
                LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
            },
            dash: None,
        }
    }

    fn shadow_transform(&self) -> Transform {
        self.transform
            .post_translate(self.style.shadow_offset_x, self.style.shadow_offset_y)
    }

    fn stroke_path(&mut self, path: &tiny_skia::Path) {
        let stroke = self.stroke();
        if self.style.has_shadow() {
            let shadow = self.paint(self.style.shadow_color);
            let t = self.shadow_transform();
            self.pixmap.stroke_path(path, &shadow, &stroke, t, None);
        }
        let paint = self.paint(self.style.stroke);
        self.pixmap
            .stroke_path(path, &paint, &stroke, self.transform, None);
    }

    fn fill_path(&mut self, path: &tiny_skia::Path) {
        if self.style.has_shadow() {
            let shadow = self.paint(self.style.shadow_color);
            let t = self.shadow_transform();
            self.pixmap
                .fill_path(path, &shadow, FillRule::Winding, t, None);
        }
        let paint = self.paint(self.style.fill);
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, self.transform, None);
    }
}

fn polyline_path(points: &[Point], closed: bool) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

impl RenderSurface for PixmapSurface {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn save(&mut self) {
        self.stack.push((self.style.clone(), self.transform));
    }

    fn restore(&mut self) {
        if let Some((style, transform)) = self.stack.pop() {
            self.style = style;
            self.transform = transform;
        }
    }

    fn style(&self) -> &StyleState {
        &self.style
    }

    fn style_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    fn set_transform(&mut self, transform: &AffineTransform) {
        let [sx, ky, kx, sy, tx, ty] = transform.to_row();
        self.transform = Transform::from_row(sx, ky, kx, sy, tx, ty);
    }

    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn stroke_polyline(&mut self, points: &[Point], closed: bool) {
        if let Some(path) = polyline_path(points, closed) {
            self.stroke_path(&path);
        }
    }

    fn fill_polyline(&mut self, points: &[Point]) {
        if let Some(path) = polyline_path(points, true) {
            self.fill_path(&path);
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f64) {
        if let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
        {
            self.stroke_path(&path);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        if let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
        {
            self.fill_path(&path);
        }
    }

    fn draw_image(&mut self, image: &RgbaImage, rect: RectPos) {
        let (w, h) = image.dimensions();
        let Some(mut src) = Pixmap::new(w, h) else {
            warn!("Skipping empty image {}x{}", w, h);
            return;
        };
        for (dst, px) in src.pixels_mut().iter_mut().zip(image.pixels()) {
            let [r, g, b, a] = px.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        let transform = self
            .transform
            .pre_translate(rect.x as f32, rect.y as f32)
            .pre_scale(rect.w as f32 / w as f32, rect.h as f32 / h as f32);
        let paint = PixmapPaint {
            opacity: self.style.global_alpha.clamp(0.0, 1.0),
            blend_mode: self.style.composite.blend_mode(),
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, src.as_ref(), &paint, transform, None);
    }

    fn snapshot(&self) -> RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            image::Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }
}
