use vectorpad_core::{point_on_segment, GeometryError, Point};

use super::ShapeGeometry;
use crate::surface::RenderSurface;

/// Open polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PathShape {
    pub points: Vec<Point>,
}

impl PathShape {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl ShapeGeometry for PathShape {
    fn value(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn set_value(&mut self, value: &[Point]) -> Result<(), GeometryError> {
        self.points = value.to_vec();
        Ok(())
    }

    fn in_region(&self, p: Point) -> bool {
        self.points
            .windows(2)
            .any(|seg| point_on_segment(seg[0], seg[1], p))
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        surface.stroke_polyline(&self.points, false);
    }
}
