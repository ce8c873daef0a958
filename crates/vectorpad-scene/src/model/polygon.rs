use vectorpad_core::{point_in_convex_polygon, GeometryError, Point};

use super::ShapeGeometry;
use crate::surface::RenderSurface;

/// Closed outline. Hit-testing assumes the outline is convex.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub points: Vec<Point>,
    pub filled: bool,
}

impl PolygonShape {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            filled: false,
        }
    }

    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }
}

impl ShapeGeometry for PolygonShape {
    fn value(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn set_value(&mut self, value: &[Point]) -> Result<(), GeometryError> {
        self.points = value.to_vec();
        Ok(())
    }

    fn in_region(&self, p: Point) -> bool {
        point_in_convex_polygon(&self.points, p)
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        if self.filled {
            surface.fill_polyline(&self.points);
        }
        surface.stroke_polyline(&self.points, true);
    }
}
