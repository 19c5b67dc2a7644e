//! `read` subcommand: parse coordinate pairs from a file or stdin and echo
//! them in point form.

use anyhow::{Context, Result};
use planar::{read_points, Point};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

pub fn run<W: Write>(input: Option<&Path>, precision: Option<usize>, out: &mut W) -> Result<()> {
    let (source, text) = load(input)?;
    let points = read_points(&text).with_context(|| format!("parsing points from {source}"))?;
    tracing::info!(count = points.len(), source = %source, "read");
    write_points(&points, precision, out)
}

fn load(input: Option<&Path>) -> Result<(String, String)> {
    match input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(("stdin".to_string(), text))
        }
    }
}

fn write_points<W: Write>(points: &[Point], precision: Option<usize>, out: &mut W) -> Result<()> {
    for p in points {
        match precision {
            Some(prec) => writeln!(out, "{:.*}", prec, p)?,
            None => writeln!(out, "{p}")?,
        }
    }
    Ok(())
}
