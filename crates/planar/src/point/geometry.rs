//! Closed-form Euclidean operations on `Point`.
//!
//! Lines are given by two points `(p, q)`. Nothing here checks for a
//! degenerate line (`p == q`) or a zero vector; those cases produce inf/NaN.

use super::types::Point;

impl Point {
    /// Euclidean magnitude `sqrt(x² + y²)`.
    #[inline]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// `self / self.norm()`. NaN components for the zero vector.
    #[inline]
    pub fn normalize(&self) -> Point {
        *self / self.norm()
    }

    #[inline]
    pub fn dot(&self, p: Point) -> f64 {
        self.x * p.x + self.y * p.y
    }

    /// Signed 2D cross product `x·p.y − y·p.x` (z of the 3D cross).
    /// Positive when `p` lies counterclockwise of `self`.
    #[inline]
    pub fn cross(&self, p: Point) -> f64 {
        self.x * p.y - self.y * p.x
    }

    /// Distance to another point.
    #[inline]
    pub fn dist(&self, p: Point) -> f64 {
        (*self - p).norm()
    }

    /// Perpendicular distance from `self` to the line through `p` and `q`.
    #[inline]
    pub fn dist_to_line(&self, p: Point, q: Point) -> f64 {
        (p - q).cross(*self - q).abs() / (p - q).norm()
    }

    /// Rotation about the origin by `theta` radians, counterclockwise for
    /// positive `theta`.
    #[inline]
    pub fn rotate(&self, theta: f64) -> Point {
        let (sin, cos) = theta.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Orthogonal projection onto the line through `p` and `q`.
    #[inline]
    pub fn project(&self, p: Point, q: Point) -> Point {
        let d = q - p;
        p + d * ((*self - p).dot(d) / d.dot(d))
    }

    /// Mirror image across the line through `p` and `q`.
    #[inline]
    pub fn reflect(&self, p: Point, q: Point) -> Point {
        *self + (self.project(p, q) - *self) * 2.0
    }

    #[inline]
    pub fn mid_point(&self, p: Point) -> Point {
        (*self + p) / 2.0
    }
}
