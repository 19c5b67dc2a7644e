//! Demonstration driver: runs each point operation once and prints
//! `label :value` lines for eyeballing. No assertions.

use anyhow::Result;
use planar::Point;
use std::f64::consts::PI;
use std::io::Write;

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    tracing::info!("demo");
    let p0 = Point::default();
    let p1 = Point::new(1.0, 1.0);
    let mut p2 = Point::new(1.0, 7.0);
    let p3 = p1;

    writeln!(out, "Hello, World!")?;
    writeln!(out, "p0 :{p0}")?;
    writeln!(out, "p1 :{p1}")?;
    writeln!(out, "p2 :{p2}")?;
    writeln!(out, "p2.x() :{}", p2.x())?;
    writeln!(out, "p2.y() :{}", p2.y())?;
    p2.set_x(2.0);
    writeln!(out, "p2.set_x(2) :{p2}")?;
    p2.set_y(3.0);
    writeln!(out, "p2.set_y(3) :{p2}")?;

    tracing::debug!(%p1, %p2, "arithmetic");
    writeln!(out, "p1 + p2 :{}", p1 + p2)?;
    writeln!(out, "p1 - p2 :{}", p1 - p2)?;
    writeln!(out, "p1 * 2 :{}", p1 * 2.0)?;
    writeln!(out, "p1 / 2 :{}", p1 / 2.0)?;
    writeln!(out, "p2.norm() :{}", p2.norm())?;
    writeln!(out, "p3 = p1 :{p3}")?;
    writeln!(out, "p3 == p1 :{}", p3 == p1)?;
    let copy = p2;
    writeln!(out, "copy of p2 :{copy}")?;
    writeln!(out, "p2.normalize() :{}", p2.normalize())?;
    writeln!(out, "p2 :{p2}")?;
    writeln!(out, "p1.dot(p2) :{}", p1.dot(p2))?;
    writeln!(out, "p1.cross(p2) :{}", p1.cross(p2))?;

    tracing::debug!(%p0, "geometry");
    writeln!(out, "p0.dist(p2) :{}", p0.dist(p2))?;
    writeln!(out, "p0.dist_to_line(p2, p1) :{}", p0.dist_to_line(p2, p1))?;
    writeln!(out, "p0.project(p2, p1) :{}", p0.project(p2, p1))?;
    writeln!(out, "p0.reflect(p2, p1) :{}", p0.reflect(p2, p1))?;
    writeln!(out, "p1.rotate(PI) :{}", p1.rotate(PI))?;
    writeln!(out, "p0.mid_point(p2) :{}", p0.mid_point(p2))?;

    writeln!(out, "p1 < p2 :{}", p1 < p2)?;
    writeln!(out, "p1 > p2 :{}", p1 > p2)?;
    writeln!(out, "p1 <= p3 :{}", p1 <= p3)?;
    Ok(())
}
