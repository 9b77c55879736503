//! Vector perpendicular to two others.

use crate::check;
use crate::Vec3;
use vgeom_core::Result;

/// Returns a vector perpendicular to both `vec1` and `vec2`.
///
/// This is the cross product `vec1 × vec2`, oriented by the right-hand
/// rule. Its length is `‖vec1‖·‖vec2‖·sin(θ)`, so the result is the zero
/// vector exactly when the inputs are parallel or either one is zero.
/// Parallel input is not an error; NaN or infinite input propagates into
/// the result. Use [`try_perpendicular`] to reject it.
///
/// # Example
///
/// ```rust
/// use vgeom_math::{perpendicular, Vec3};
///
/// assert_eq!(perpendicular(Vec3::X, Vec3::Y), Vec3::Z);
/// assert_eq!(perpendicular(Vec3::X, Vec3::new(2.0, 0.0, 0.0)), Vec3::ZERO);
/// ```
#[inline]
pub fn perpendicular(vec1: Vec3, vec2: Vec3) -> Vec3 {
    vec1.cross(vec2)
}

/// Checked version of [`perpendicular`].
///
/// Parallel inputs still succeed with the zero vector.
///
/// # Errors
///
/// - [`Error::NonFinite`](vgeom_core::Error::NonFinite) if either input
///   contains NaN or infinity
/// - [`Error::Overflow`](vgeom_core::Error::Overflow) if the cross product
///   overflows `f64`
pub fn try_perpendicular(vec1: Vec3, vec2: Vec3) -> Result<Vec3> {
    check::finite_vec("perpendicular", "vec1", vec1)?;
    check::finite_vec("perpendicular", "vec2", vec2)?;
    check::finite_result("perpendicular", perpendicular(vec1, vec2))
}
