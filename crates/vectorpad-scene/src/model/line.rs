use vectorpad_core::{point_on_segment, GeometryError, Point};

use super::{expect_len, ShapeGeometry};
use crate::surface::RenderSurface;

#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub start: Point,
    pub end: Point,
}

impl LineShape {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

impl ShapeGeometry for LineShape {
    fn value(&self) -> Vec<Point> {
        vec![self.start, self.end]
    }

    fn set_value(&mut self, value: &[Point]) -> Result<(), GeometryError> {
        expect_len(value, 2)?;
        self.start = value[0];
        self.end = value[1];
        Ok(())
    }

    fn in_region(&self, p: Point) -> bool {
        point_on_segment(self.start, self.end, p)
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        surface.stroke_polyline(&[self.start, self.end], false);
    }
}
