//! Text form of a point.
//!
//! - Output: `"(x, y)"` with Rust's default float formatting, or a fixed
//!   number of decimals when the formatter carries a precision.
//! - Input: two whitespace-separated numbers. `FromStr` also takes the
//!   output form back, so `p.to_string().parse()` round-trips.

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use super::types::Point;

/// Coordinate named in a parse error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePointError {
    #[error("missing {0} coordinate")]
    Missing(Axis),

    #[error("invalid {axis} coordinate {token:?}")]
    InvalidCoordinate {
        axis: Axis,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("unexpected trailing input {0:?}")]
    Trailing(String),
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(prec) => write!(f, "({:.*}, {:.*})", prec, self.x, prec, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

impl Point {
    /// Read `x` then `y` from the next two tokens.
    ///
    /// Each coordinate is stored as soon as it parses, so a failure on `y`
    /// leaves the new `x` in place. Tokens consumed before the failure stay
    /// consumed; there is no recovery.
    pub fn read_from<'a, I>(&mut self, tokens: &mut I) -> Result<(), ParsePointError>
    where
        I: Iterator<Item = &'a str>,
    {
        self.x = next_coord(tokens, Axis::X)?;
        self.y = next_coord(tokens, Axis::Y)?;
        Ok(())
    }
}

fn next_coord<'a, I>(tokens: &mut I, axis: Axis) -> Result<f64, ParsePointError>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or(ParsePointError::Missing(axis))?;
    token
        .parse::<f64>()
        .map_err(|source| ParsePointError::InvalidCoordinate {
            axis,
            token: token.to_owned(),
            source,
        })
}

fn parse_exact<'a, I>(mut tokens: I) -> Result<Point, ParsePointError>
where
    I: Iterator<Item = &'a str>,
{
    let mut p = Point::origin();
    p.read_from(&mut tokens)?;
    match tokens.next() {
        Some(rest) => Err(ParsePointError::Trailing(rest.to_owned())),
        None => Ok(p),
    }
}

/// Accepts `"x y"` (any whitespace) or the display form `"(x, y)"`.
impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
            Some(inner) => parse_exact(inner.split(',').map(str::trim)),
            None => parse_exact(s.split_whitespace()),
        }
    }
}

/// Read consecutive points from whitespace-separated text until it runs out.
///
/// Line breaks carry no meaning; an odd number of tokens ends in
/// `Missing(Axis::Y)`.
pub fn read_points(text: &str) -> Result<Vec<Point>, ParsePointError> {
    let mut tokens = text.split_whitespace().peekable();
    let mut points = Vec::new();
    while tokens.peek().is_some() {
        let mut p = Point::origin();
        p.read_from(&mut tokens)?;
        points.push(p);
    }
    Ok(points)
}
