//! Planar geometry kernel.
//!
//! Points, general-form lines, side tests, triangle/polygon containment,
//! convexity and axis-aligned boxes. Everything here is pure and works on
//! scene-space `f64` coordinates.

use serde::{Deserialize, Serialize};

use crate::constants::LINE_HIT_EPSILON;
use crate::error::GeometryError;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Vector from `other` to `self`.
    pub fn delta_from(&self, other: &Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Line in general form `a·x + b·y + c = 0`.
///
/// Coefficients are not normalized, so two lines built from different
/// segments of the same infinite line compare equal only up to scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Line through two points: `(y2 - y1, x1 - x2, x2·y1 - x1·y2)`.
    pub fn through(p1: Point, p2: Point) -> Self {
        Self {
            a: p2.y - p1.y,
            b: p1.x - p2.x,
            c: p2.x * p1.y - p1.x * p2.y,
        }
    }

    /// Evaluates `a·x + b·y + c`. The sign tells which side `p` is on.
    pub fn evaluate(&self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// True when both points are on the same side. Touching counts.
    pub fn same_side(&self, p1: Point, p2: Point) -> bool {
        self.evaluate(p1) * self.evaluate(p2) >= 0.0
    }

    /// True when every point is on the side of the first point that does
    /// not lie on the line. Trivially true if no such reference exists.
    pub fn all_same_side(&self, points: &[Point]) -> bool {
        let Some(reference) = points.iter().copied().find(|p| self.evaluate(*p) != 0.0) else {
            return true;
        };
        points.iter().all(|p| self.same_side(reference, *p))
    }
}

pub fn two_point_line(p1: Point, p2: Point) -> Line {
    Line::through(p1, p2)
}

pub fn point_line_sign(line: &Line, p: Point) -> f64 {
    line.evaluate(p)
}

pub fn same_side(line: &Line, p1: Point, p2: Point) -> bool {
    line.same_side(p1, p2)
}

pub fn all_same_side(line: &Line, points: &[Point]) -> bool {
    line.all_same_side(points)
}

/// Point-in-triangle test; points on an edge are inside.
pub fn point_in_triangle(triangle: &[Point; 3], p: Point) -> bool {
    // (edge start, edge end, opposite vertex)
    const EDGES: [(usize, usize, usize); 3] = [(0, 1, 2), (0, 2, 1), (2, 1, 0)];
    EDGES.iter().all(|&(i, j, k)| {
        Line::through(triangle[i], triangle[j]).same_side(p, triangle[k])
    })
}

/// Fan-triangulates from vertex 0 and reports whether `p` is in any fan
/// triangle.
///
/// Only correct for convex polygons. For a concave outline the answer
/// depends on where vertex 0 sits: a fan triangle may span a notch, so a
/// point in the notch can be reported inside.
pub fn point_in_convex_polygon(polygon: &[Point], p: Point) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let anchor = polygon[0];
    polygon
        .windows(2)
        .skip(1)
        .any(|pair| point_in_triangle(&[anchor, pair[0], pair[1]], p))
}

/// Every vertex must lie on one side of every edge's line.
pub fn is_convex(polygon: &[Point]) -> bool {
    if polygon.len() == 3 {
        return true;
    }
    let n = polygon.len();
    (0..n).all(|i| Line::through(polygon[i], polygon[(i + 1) % n]).all_same_side(polygon))
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectPos {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectPos {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Normalized rectangle spanning two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Square of side `size` centered on `p`.
    pub fn centered(p: Point, size: f64) -> Self {
        let half = size / 2.0;
        Self::new(p.x - half, p.y - half, size, size)
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Inclusive containment.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Corners clockwise from top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }
}

/// Tight axis-aligned bounding box with a true-minimum origin.
pub fn bounding_box(points: &[Point]) -> RectPos {
    let Some(first) = points.first() else {
        return RectPos::default();
    };
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    RectPos::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

pub fn point_in_rect(rect: &RectPos, p: Point) -> bool {
    rect.contains(p)
}

/// Index of the first rectangle containing `p`, by list order.
pub fn first_rect_containing(rects: &[RectPos], p: Point) -> Option<usize> {
    rects.iter().position(|r| r.contains(p))
}

pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance_to(&p2)
}

/// True when `p` lies on segment `a`-`b`: the two sub-distances sum to the
/// segment length within a length-relative epsilon.
pub fn point_on_segment(a: Point, b: Point, p: Point) -> bool {
    let length = a.distance_to(&b);
    let sum = p.distance_to(&a) + p.distance_to(&b);
    (sum - length).abs() <= LINE_HIT_EPSILON * length.max(1.0)
}

/// Deep copy of a path; the copy shares nothing with `src`.
pub fn copy_path(src: &[Point]) -> Vec<Point> {
    src.to_vec()
}

/// Element-wise comparison within `epsilon`. Paths of different length are
/// an error rather than unequal.
pub fn paths_equal(a: &[Point], b: &[Point], epsilon: f64) -> Result<bool, GeometryError> {
    if a.len() != b.len() {
        return Err(GeometryError::MismatchedLength {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a
        .iter()
        .zip(b)
        .all(|(p, q)| (p.x - q.x).abs() <= epsilon && (p.y - q.y).abs() <= epsilon))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn test_two_point_line_coefficients() {
        let line = two_point_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert_eq!(line, Line { a: 1.0, b: -1.0, c: 0.0 });
        // Same scale from a shifted unit segment on the same line
        let other = two_point_line(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        assert_eq!(line, other);
    }

    #[test]
    fn test_same_side_rejects_opposite_points() {
        let line = Line { a: 1.0, b: 1.0, c: 1.0 };
        assert!(!same_side(&line, Point::new(-2.0, -2.0), Point::new(0.0, 0.0)));
        assert!(same_side(&line, Point::new(1.0, 1.0), Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_all_same_side_uses_first_off_line_point() {
        let line = two_point_line(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let on_line = pts(&[(0.0, 0.0), (5.0, 0.0)]);
        assert!(all_same_side(&line, &on_line));
        assert!(all_same_side(&line, &[]));
        let mixed = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 3.0)]);
        assert!(all_same_side(&line, &mixed));
        let split = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, -3.0)]);
        assert!(!all_same_side(&line, &split));
    }

    #[test]
    fn test_point_in_triangle_edges_count() {
        let tri = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
        ];
        assert!(point_in_triangle(&tri, Point::new(1.0, 1.0)));
        assert!(point_in_triangle(&tri, Point::new(2.0, 0.0)));
        assert!(point_in_triangle(&tri, Point::new(0.0, 0.0)));
        assert!(!point_in_triangle(&tri, Point::new(3.0, 3.0)));
    }

    #[test]
    fn test_concave_notch_depends_on_fan_anchor() {
        // square with a V cut into its top edge
        let anchored_at_corner = pts(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (5.0, 3.0),
            (0.0, 10.0),
        ]);
        let anchored_on_cut = pts(&[
            (0.0, 10.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (5.0, 3.0),
        ]);
        let notch = Point::new(5.0, 6.0);
        let body = Point::new(5.0, 1.0);

        assert!(!point_in_convex_polygon(&anchored_at_corner, notch));
        assert!(point_in_convex_polygon(&anchored_on_cut, notch));
        assert!(point_in_convex_polygon(&anchored_at_corner, body));
        assert!(point_in_convex_polygon(&anchored_on_cut, body));
    }

    #[test]
    fn test_point_in_polygon_fan() {
        let quad = pts(&[(0.0, 0.0), (0.0, 2.0), (2.0, 0.0), (2.0, -2.0)]);
        assert!(!point_in_convex_polygon(&quad, Point::new(0.0, -2.0)));

        let pentagon = pts(&[(0.0, 0.0), (0.0, 2.0), (2.0, 0.0), (2.0, -2.0), (0.0, -2.0)]);
        assert!(point_in_convex_polygon(&pentagon, Point::new(0.0, -2.0)));
    }

    #[test]
    fn test_point_in_polygon_degenerate() {
        assert!(!point_in_convex_polygon(&[], Point::new(0.0, 0.0)));
        let seg = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        assert!(!point_in_convex_polygon(&seg, Point::new(0.5, 0.5)));
    }

    #[test]
    fn test_is_convex() {
        let tri = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert!(is_convex(&tri));

        let bent = pts(&[(0.0, 0.0), (0.0, 2.0), (2.0, 0.0), (2.0, -2.0), (0.0, 2.0)]);
        assert!(!is_convex(&bent));

        let pentagon = pts(&[(0.0, 0.0), (0.0, 2.0), (2.0, 0.0), (2.0, -2.0), (0.0, -2.0)]);
        assert!(is_convex(&pentagon));

        let square = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert!(is_convex(&square));

        let arrow = pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 1.0), (4.0, 4.0), (0.0, 4.0)]);
        assert!(!is_convex(&arrow));
    }

    #[test]
    fn test_bounding_box_uses_true_minimum() {
        assert_eq!(bounding_box(&[]), RectPos::default());
        assert_eq!(
            bounding_box(&[Point::new(3.0, 4.0)]),
            RectPos::new(3.0, 4.0, 0.0, 0.0)
        );
        let b = bounding_box(&pts(&[(10.0, 20.0), (30.0, 5.0), (15.0, 40.0)]));
        assert_eq!(b, RectPos::new(10.0, 5.0, 20.0, 35.0));
    }

    #[test]
    fn test_first_rect_containing() {
        let rects = [
            RectPos::new(0.0, 0.0, 10.0, 10.0),
            RectPos::new(5.0, 5.0, 10.0, 10.0),
        ];
        assert_eq!(first_rect_containing(&rects, Point::new(6.0, 6.0)), Some(0));
        assert_eq!(first_rect_containing(&rects, Point::new(12.0, 12.0)), Some(1));
        assert_eq!(first_rect_containing(&rects, Point::new(10.0, 10.0)), Some(0));
        assert_eq!(first_rect_containing(&rects, Point::new(20.0, 0.0)), None);
    }

    #[test]
    fn test_point_on_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 10.0);
        assert!(point_on_segment(a, b, Point::new(5.0, 5.0)));
        assert!(point_on_segment(a, b, a));
        assert!(!point_on_segment(a, b, Point::new(5.0, 6.0)));
        assert!(!point_on_segment(a, b, Point::new(11.0, 11.0)));
    }

    #[test]
    fn test_copy_path_is_deep() {
        let src = pts(&[(1.0, 2.0), (3.0, 4.0)]);
        let mut copy = copy_path(&src);
        assert_eq!(copy, src);
        copy[0].x = 99.0;
        assert_eq!(src[0].x, 1.0);
    }

    #[test]
    fn test_paths_equal_rejects_length_mismatch() {
        let a = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        let b = pts(&[(0.0, 0.0)]);
        assert_eq!(
            paths_equal(&a, &b, 1e-9),
            Err(GeometryError::MismatchedLength { left: 2, right: 1 })
        );
        assert_eq!(paths_equal(&a, &a, 1e-9), Ok(true));
        let c = pts(&[(0.0, 0.0), (1.0, 1.5)]);
        assert_eq!(paths_equal(&a, &c, 1e-9), Ok(false));
    }
}
