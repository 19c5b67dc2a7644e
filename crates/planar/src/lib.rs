//! Planar point geometry.
//!
//! A single `Copy` value type, `Point`, with closed-form Euclidean operations
//! (arithmetic, norm, dot/cross, distances, projection, reflection, rotation)
//! and a plain-text representation.
//!
//! Numerics
//! - No input validation: degenerate arguments (zero vectors, coincident line
//!   points, division by zero) propagate as IEEE-754 infinities/NaN.
//! - Equality is approximate with the absolute tolerance [`EPS`]; ordering is
//!   exact-lexicographic. The two are intentionally not consistent, see
//!   [`Point`].

pub mod point;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use point::{read_points, Axis, ParsePointError, Point, EPS};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::point::{read_points, ParsePointError, Point, EPS};
    pub use nalgebra::Vector2 as Vec2;
}
