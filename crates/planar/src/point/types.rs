//! The `Point` struct, its tolerance, accessors and conversions.

use nalgebra::Vector2;

/// Absolute tolerance used by `==` on points.
///
/// Absolute, not relative: it stops being meaningful for coordinates far from
/// unit scale.
pub const EPS: f64 = 1e-6;

/// A 2D point (or vector) with `f64` coordinates.
///
/// Any finite or non-finite values are allowed. `==` compares within [`EPS`]
/// per coordinate, while `<`, `>`, `<=`, `>=` compare `x` exactly and fall back
/// to `y` only on bit-equal `x`. Two points can therefore be `==` and `<` at
/// the same time; `Point` is neither `Eq` nor `Hash`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub(super) x: f64,
    pub(super) y: f64,
}

impl Point {
    /// Creates a point with the given coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0).
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point> for [f64; 2] {
    #[inline]
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

// nalgebra interop, so points can feed matrix code directly.

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}
