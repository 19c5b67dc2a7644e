//! 2D point/vector value type.
//!
//! Purpose
//! - One small aggregate `Point { x, y }` used both as a position and as a
//!   displacement vector; no separate vector type.
//! - Operators follow `std::ops`; geometric helpers are inherent methods.
//!
//! Layout
//! - `types`: the struct, `EPS`, accessors and conversions.
//! - `ops`: arithmetic operators, approximate equality, lexicographic order.
//! - `geometry`: norm, dot/cross, distances, rotate, project, reflect.
//! - `text`: `Display`, `FromStr`, token-stream reading and `ParsePointError`.

mod geometry;
mod ops;
mod text;
mod types;

pub use text::{read_points, Axis, ParsePointError};
pub use types::{Point, EPS};
