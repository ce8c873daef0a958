use vectorpad_core::{GeometryError, Point, RectPos};

use super::{expect_len, ShapeGeometry};
use crate::surface::RenderSurface;

/// Axis-aligned rectangle; value is the `[top-left, bottom-right]` diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub rect: RectPos,
    pub filled: bool,
}

impl RectShape {
    pub fn new(rect: RectPos) -> Self {
        Self {
            rect,
            filled: false,
        }
    }

    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }
}

impl ShapeGeometry for RectShape {
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
        let corners = self.rect.corners();
        if self.filled {
            surface.fill_polyline(&corners);
        }
        surface.stroke_polyline(&corners, true);
    }
}
