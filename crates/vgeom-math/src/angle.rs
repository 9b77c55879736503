//! Angle between two vectors.

use crate::check;
use crate::Vec3;
use vgeom_core::Result;

/// Returns the angle between `vec1` and `vec2` in radians, in `[0, π]`.
///
/// Computes `acos((vec1 · vec2) / (‖vec1‖·‖vec2‖))`. The cosine is clamped
/// to `[-1, 1]` first, since rounding can push it slightly past the domain
/// of `acos` for (anti-)parallel inputs.
///
/// If either vector has zero length the ratio is `0 / 0` and the result is
/// NaN. Use [`try_angle_between`] to get an error instead.
///
/// # Example
///
/// ```rust
/// use std::f64::consts::PI;
/// use vgeom_math::{angle_between, Vec3};
///
/// assert_eq!(angle_between(Vec3::X, Vec3::X), 0.0);
/// assert_eq!(angle_between(Vec3::X, -Vec3::X), PI);
/// assert!(angle_between(Vec3::X, Vec3::ZERO).is_nan());
/// ```
#[inline]
pub fn angle_between(vec1: Vec3, vec2: Vec3) -> f64 {
    let cos = vec1.dot(vec2) / (vec1.length() * vec2.length());
    // f64::clamp keeps NaN as NaN
    cos.clamp(-1.0, 1.0).acos()
}

/// Checked version of [`angle_between`].
///
/// # Errors
///
/// - [`Error::NonFinite`](vgeom_core::Error::NonFinite) if either input
///   contains NaN or infinity
/// - [`Error::DegenerateInput`](vgeom_core::Error::DegenerateInput) if
///   either input has zero length
/// - [`Error::Overflow`](vgeom_core::Error::Overflow) if either norm, or
///   their product, overflows `f64`
pub fn try_angle_between(vec1: Vec3, vec2: Vec3) -> Result<f64> {
    check::finite_vec("angle_between", "vec1", vec1)?;
    check::finite_vec("angle_between", "vec2", vec2)?;
    check::normalizable("angle_between", "vec1", vec1)?;
    check::normalizable("angle_between", "vec2", vec2)?;
    check::finite_result_scalar("angle_between", angle_between(vec1, vec2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    use vgeom_core::Error;

    #[test]
    fn test_basis_angles() {
        assert_eq!(angle_between(Vec3::X, Vec3::X), 0.0);
        assert_abs_diff_eq!(angle_between(Vec3::X, -Vec3::X), PI, epsilon = 1e-15);
        assert_abs_diff_eq!(angle_between(Vec3::X, Vec3::Y), FRAC_PI_2, epsilon = 1e-15);
        assert_abs_diff_eq!(angle_between(Vec3::Z, Vec3::Y), FRAC_PI_2, epsilon = 1e-15);
    }

    #[test]
    fn test_magnitude_irrelevant() {
        let a = Vec3::new(1.0, 1.0, 0.0);
        assert_abs_diff_eq!(angle_between(a, Vec3::X), FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(angle_between(a * 1e6, Vec3::X * 1e-3), FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetric() {
        let a = Vec3::new(0.2, -1.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 0.1);
        assert_eq!(angle_between(a, b), angle_between(b, a));
    }

    #[test]
    fn test_clamp_near_parallel() {
        // Rounding can put the unclamped cosine just above 1
        let a = Vec3::new(0.1, 0.2, 0.3);
        let b = a * 3.0;
        let angle = angle_between(a, b);
        assert!(!angle.is_nan());
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-7);

        let angle = angle_between(a, -b);
        assert!(!angle.is_nan());
        assert_abs_diff_eq!(angle, PI, epsilon = 1e-7);
    }

    #[test]
    fn test_zero_vector_is_nan() {
        assert!(angle_between(Vec3::ZERO, Vec3::X).is_nan());
        assert!(angle_between(Vec3::Y, Vec3::ZERO).is_nan());
        assert!(angle_between(Vec3::ZERO, Vec3::ZERO).is_nan());
    }

    #[test]
    fn test_try_angle_between() {
        assert_abs_diff_eq!(
            try_angle_between(Vec3::X, Vec3::Z).unwrap(),
            FRAC_PI_2,
            epsilon = 1e-15
        );
        assert_eq!(
            try_angle_between(Vec3::ZERO, Vec3::X),
            Err(Error::degenerate("angle_between", "vec1"))
        );
        assert_eq!(
            try_angle_between(Vec3::X, Vec3::ZERO),
            Err(Error::degenerate("angle_between", "vec2"))
        );
        assert_eq!(
            try_angle_between(Vec3::X, Vec3::new(f64::NAN, 1.0, 0.0)),
            Err(Error::non_finite("angle_between", "vec2"))
        );
    }

    #[test]
    fn test_try_angle_between_overflow() {
        let big = Vec3::new(1e200, 0.0, 0.0);
        assert!(angle_between(big, big).is_nan());
        assert_eq!(
            try_angle_between(big, big),
            Err(Error::overflow("angle_between", "vec1"))
        );
        assert_eq!(
            try_angle_between(Vec3::X, big),
            Err(Error::overflow("angle_between", "vec2"))
        );

        // Squaring underflows, so the norm of this non-zero vector is 0
        let tiny = Vec3::new(1e-200, 0.0, 0.0);
        assert_eq!(
            try_angle_between(tiny, Vec3::X),
            Err(Error::degenerate("angle_between", "vec1"))
        );
    }
}
