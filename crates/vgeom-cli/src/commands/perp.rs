//! Perp command - vector perpendicular to two vectors

use anyhow::{Context, Result};
use crate::{PerpArgs, commands::{format_vector, parse_vector}};
use vgeom_math::{try_perpendicular, Vec3};

pub fn run(args: PerpArgs, precision: usize) -> Result<String> {
    let vec1 = parse_vector("first", &args.vec1)?;
    let vec2 = parse_vector("second", &args.vec2)?;

    let result = try_perpendicular(vec1, vec2).context("Perpendicular computation failed")?;
    if result == Vec3::ZERO {
        tracing::warn!(%vec1, %vec2, "inputs are parallel, perpendicular is the zero vector");
    }

    Ok(format_vector(result, precision))
}
