//! CLI command implementations

pub mod angle;
pub mod perp;
pub mod rotate;

use anyhow::{Context, Result};
use vgeom_math::Vec3;

/// Parse a command-line vector argument like "1,0,0" or "[1, 0, 0]"
pub fn parse_vector(name: &str, s: &str) -> Result<Vec3> {
    s.parse::<Vec3>()
        .with_context(|| format!("Invalid {} vector", name))
}

/// Format a vector result with fixed decimals
pub fn format_vector(v: Vec3, precision: usize) -> String {
    format!("{:.*}", precision, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector() {
        assert_eq!(parse_vector("axis", "0, 0, 1").unwrap(), Vec3::Z);
        let err = parse_vector("axis", "0,1").unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.starts_with("Invalid axis vector"));
        assert!(chain.contains("expected 3 components"));
    }

    #[test]
    fn test_format_vector() {
        assert_eq!(format_vector(Vec3::new(0.5, -1.0, 2.0), 2), "[0.50, -1.00, 2.00]");
    }
}
