//! Angle command - angle between two vectors

use anyhow::{Context, Result};
use crate::{AngleArgs, commands::parse_vector};
use vgeom_math::try_angle_between;

pub fn run(args: AngleArgs, precision: usize) -> Result<String> {
    let angle = compute(&args)?;
    Ok(format!("{:.*}", precision, angle))
}

fn compute(args: &AngleArgs) -> Result<f64> {
    let vec1 = parse_vector("first", &args.vec1)?;
    let vec2 = parse_vector("second", &args.vec2)?;

    let radians = try_angle_between(vec1, vec2).context("Angle computation failed")?;
    tracing::debug!(%vec1, %vec2, radians, "angle between");

    Ok(if args.degrees { radians.to_degrees() } else { radians })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(vec1: &str, vec2: &str, degrees: bool) -> AngleArgs {
        AngleArgs {
            vec1: vec1.into(),
            vec2: vec2.into(),
            degrees,
        }
    }

    #[test]
    fn test_angle_output() {
        assert_eq!(run(args("1,0,0", "0,1,0", true), 2).unwrap(), "90.00");
        assert_eq!(run(args("1,0,0", "-1,0,0", false), 5).unwrap(), "3.14159");
        assert_eq!(run(args("1,0,0", "3,0,0", false), 1).unwrap(), "0.0");
    }

    #[test]
    fn test_angle_zero_vector_fails() {
        let err = compute(&args("0,0,0", "1,0,0", false)).unwrap_err();
        assert!(format!("{:#}", err).contains("`vec1` has zero length"));
    }

    #[test]
    fn test_angle_overflowing_norm_fails() {
        let err = run(args("1e200,0,0", "1e200,0,0", false), 6).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Angle computation failed"));
        assert!(chain.contains("`vec1` overflows"));
    }

    #[test]
    fn test_angle_bad_vector() {
        let err = compute(&args("1,0,0", "1;0;0", false)).unwrap_err();
        assert!(err.to_string().contains("Invalid second vector"));
    }
}
