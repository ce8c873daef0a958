//! Affine transforms over homogeneous 2D coordinates.
//!
//! The matrix maps device pixels to scene space. Composition is
//! existing-matrix-first: `m.translate(..)` yields `m · delta`, so the delta
//! applies to points before `m` does.

use nalgebra::{Matrix3, Vector3};

use crate::error::GeometryError;
use crate::geometry::Point;

/// Per-axis amounts for [`AffineTransform::translate_by`] and
/// [`AffineTransform::scale_by`].
///
/// The default is all zeros. For translation that is a no-op, but a zero
/// scale delta collapses every point onto the origin; use
/// [`TransformDelta::unit_scale`] for an identity-preserving scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformDelta {
    pub x: f64,
    pub y: f64,
}

impl TransformDelta {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn unit_scale() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    matrix: Matrix3<f64>,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    pub fn from_matrix(matrix: Matrix3<f64>) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        self.translate_by(TransformDelta::new(dx, dy))
    }

    pub fn translate_by(&self, delta: TransformDelta) -> Self {
        let mut d = Matrix3::identity();
        d[(0, 2)] += delta.x;
        d[(1, 2)] += delta.y;
        self.multiply(&Self::from_matrix(d))
    }

    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        self.scale_by(TransformDelta::new(sx, sy))
    }

    /// Sets the delta's diagonal to the given factors, so an all-zero delta
    /// is degenerate rather than a no-op.
    pub fn scale_by(&self, delta: TransformDelta) -> Self {
        let mut d = Matrix3::identity();
        d[(0, 0)] = delta.x;
        d[(1, 1)] = delta.y;
        self.multiply(&Self::from_matrix(d))
    }

    /// Counter-clockwise rotation by `angle` radians in a y-up frame.
    /// With scene y growing downwards it turns clockwise on screen.
    pub fn rotate(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let d = Matrix3::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0);
        self.multiply(&Self::from_matrix(d))
    }

    /// Matrix product `self · other`.
    pub fn multiply(&self, other: &AffineTransform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        let v = self.matrix * Vector3::new(p.x, p.y, 1.0);
        Point::new(v.x, v.y)
    }

    pub fn apply_path(&self, path: &[Point]) -> Vec<Point> {
        path.iter().map(|p| self.apply(*p)).collect()
    }

    pub fn try_inverse(&self) -> Result<Self, GeometryError> {
        self.matrix
            .try_inverse()
            .map(Self::from_matrix)
            .ok_or(GeometryError::NonInvertible)
    }

    /// Row-major affine coefficients `(sx, ky, kx, sy, tx, ty)` as used by
    /// raster backends.
    pub fn to_row(&self) -> [f32; 6] {
        let m = &self.matrix;
        [
            m[(0, 0)] as f32,
            m[(1, 0)] as f32,
            m[(0, 1)] as f32,
            m[(1, 1)] as f32,
            m[(0, 2)] as f32,
            m[(1, 2)] as f32,
        ]
    }
}

pub fn transform_point(matrix: &AffineTransform, p: Point) -> Point {
    matrix.apply(p)
}

pub fn transform_path(matrix: &AffineTransform, path: &[Point]) -> Vec<Point> {
    matrix.apply_path(path)
}
