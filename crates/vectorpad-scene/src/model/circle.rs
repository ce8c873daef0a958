use vectorpad_core::{GeometryError, Point};

use super::{expect_len, ShapeGeometry};
use crate::surface::RenderSurface;

/// Circle stored as centre and radius.
///
/// Its value is `[center, rim]` where `rim` sits on the positive x axis;
/// writing a value back re-derives the radius from the two points.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub center: Point,
    pub radius: f64,
    pub filled: bool,
}

impl CircleShape {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            filled: false,
        }
    }

    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }
}

impl ShapeGeometry for CircleShape {
    fn value(&self) -> Vec<Point> {
        vec![self.center, self.center.offset(self.radius, 0.0)]
    }

    fn set_value(&mut self, value: &[Point]) -> Result<(), GeometryError> {
        expect_len(value, 2)?;
        self.center = value[0];
        self.radius = value[0].distance_to(&value[1]);
        Ok(())
    }

    fn in_region(&self, p: Point) -> bool {
        self.center.distance_to(&p) <= self.radius
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        if self.filled {
            surface.fill_circle(self.center, self.radius);
        }
        surface.stroke_circle(self.center, self.radius);
    }
}
