//! Integration tests for vgeom crates.
//!
//! Properties are checked over a fixed grid of sample vectors, axes and
//! angles rather than random input, so failures reproduce exactly.

use vgeom_math::Vec3;

/// Sample vectors: basis, diagonals, mixed signs and magnitudes.
pub fn sample_vectors() -> Vec<Vec3> {
    vec![
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
        -Vec3::X,
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, -2.0, 3.0),
        Vec3::new(-0.25, 0.5, -4.0),
        Vec3::new(1e-3, 2e-3, -5e-4),
        Vec3::new(120.0, -80.0, 33.0),
        Vec3::new(0.0, 7.0, -7.0),
    ]
}

/// Sample angles in radians, including negative and multi-turn values.
pub fn sample_angles() -> Vec<f64> {
    use std::f64::consts::{FRAC_PI_2, PI, TAU};
    vec![0.0, 0.1, -0.7, FRAC_PI_2, PI, -PI, 2.5, TAU, 3.0 * TAU + 0.4]
}
