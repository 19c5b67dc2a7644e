//! Operator overloads, approximate equality and lexicographic order.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::types::{Point, EPS};

impl Point {
    /// Per-coordinate absolute comparison: `|dx| < eps && |dy| < eps`.
    ///
    /// `==` is `approx_eq(EPS)`. Any NaN coordinate makes this false.
    #[inline]
    pub fn approx_eq(&self, other: &Point, eps: f64) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, c: f64) -> Point {
        Point::new(self.x * c, self.y * c)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;
    #[inline]
    fn mul(self, p: Point) -> Point {
        p * self
    }
}

/// Division by zero yields infinities/NaN, never a panic.
impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, c: f64) -> Point {
        Point::new(self.x / c, self.y / c)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Point) -> bool {
        self.approx_eq(other, EPS)
    }
}

// Exact on `x`, falling back to `y` only when the `x` bits compare equal.
// Not consistent with the tolerant `eq` above; callers relying on
// `a <= b` meaning `a < b || a == b` will be surprised near EPS.
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Point) -> Option<Ordering> {
        if self.x != other.x {
            self.x.partial_cmp(&other.x)
        } else {
            self.y.partial_cmp(&other.y)
        }
    }

    #[inline]
    fn lt(&self, other: &Point) -> bool {
        if self.x != other.x {
            self.x < other.x
        } else {
            self.y < other.y
        }
    }

    #[inline]
    fn le(&self, other: &Point) -> bool {
        if self.x != other.x {
            self.x < other.x
        } else {
            self.y <= other.y
        }
    }

    #[inline]
    fn gt(&self, other: &Point) -> bool {
        if self.x != other.x {
            self.x > other.x
        } else {
            self.y > other.y
        }
    }

    #[inline]
    fn ge(&self, other: &Point) -> bool {
        if self.x != other.x {
            self.x > other.x
        } else {
            self.y >= other.y
        }
    }
}
