//! Rotate command - rotate a vector about an axis

use anyhow::{Context, Result};
use crate::{RotateArgs, commands::{format_vector, parse_vector}};
use vgeom_math::{try_rotate, Vec3};

pub fn run(args: RotateArgs, precision: usize) -> Result<String> {
    let result = compute(&args)?;
    Ok(format_vector(result, precision))
}

fn compute(args: &RotateArgs) -> Result<Vec3> {
    let vector = parse_vector("input", &args.vector)?;
    let axis = parse_vector("axis", &args.axis)?;
    let angle = if args.degrees { args.angle.to_radians() } else { args.angle };

    tracing::debug!(%vector, %axis, angle, "rotating");

    try_rotate(vector, angle, axis).context("Rotation failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn args(vector: &str, angle: f64, axis: &str, degrees: bool) -> RotateArgs {
        RotateArgs {
            vector: vector.into(),
            angle,
            axis: axis.into(),
            degrees,
        }
    }

    #[test]
    fn test_rotate_degrees() {
        let v = compute(&args("1,0,0", 90.0, "0,0,2", true)).unwrap();
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_output() {
        let out = run(args("[1, 0, 0]", std::f64::consts::PI, "0,0,1", false), 3).unwrap();
        assert_eq!(out, "[-1.000, 0.000, 0.000]");
    }

    #[test]
    fn test_rotate_zero_axis_fails() {
        let err = compute(&args("1,0,0", 1.0, "0,0,0", false)).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Rotation failed"));
        assert!(chain.contains("zero length"));
    }

    #[test]
    fn test_rotate_overflowing_axis_fails() {
        let err = compute(&args("0,1,0", 1.0, "1e200,0,0", false)).unwrap_err();
        assert!(format!("{:#}", err).contains("`axis` overflows"));
    }
}
