//! Rotation of a vector about an arbitrary axis.
//!
//! Uses Rodrigues' rotation formula with a unit axis `k`:
//!
//! ```text
//! v_rot = cos(θ)·v + sin(θ)·(k × v) + (1 − cos(θ))·(k · v)·k
//! ```
//!
//! Positive angles turn counter-clockwise when looking down the axis
//! toward the origin (right-hand rule).

use crate::check;
use crate::Vec3;
use vgeom_core::Result;

/// Rotates `vector` by `angle` radians about `axis`.
///
/// The axis is normalized by dividing by its length, so any non-zero
/// length works. The length of `vector` is preserved and the zero vector
/// maps to itself.
///
/// A zero `axis` is not guarded against: the normalization divides by
/// zero and every component of the result is NaN. Use [`try_rotate`] to
/// get an error instead.
///
/// # Example
///
/// ```rust
/// use std::f64::consts::FRAC_PI_2;
/// use vgeom_math::{rotate, Vec3};
///
/// let v = rotate(Vec3::X, FRAC_PI_2, Vec3::new(0.0, 0.0, 5.0));
/// assert!((v - Vec3::Y).length() < 1e-12);
///
/// assert!(rotate(Vec3::X, 1.0, Vec3::ZERO).is_nan());
/// ```
#[inline]
pub fn rotate(vector: Vec3, angle: f64, axis: Vec3) -> Vec3 {
    let k = axis / axis.length();
    let (sin, cos) = angle.sin_cos();
    vector * cos + k.cross(vector) * sin + k * ((1.0 - cos) * k.dot(vector))
}

/// Checked version of [`rotate`].
///
/// # Errors
///
/// - [`Error::NonFinite`](vgeom_core::Error::NonFinite) if `vector`,
///   `angle` or `axis` contains NaN or infinity
/// - [`Error::DegenerateInput`](vgeom_core::Error::DegenerateInput) if
///   `axis` has zero length
/// - [`Error::Overflow`](vgeom_core::Error::Overflow) if the norm of
///   `axis` or any component of the result overflows `f64`
///
/// # Example
///
/// ```rust
/// use vgeom_math::{try_rotate, Vec3};
///
/// assert!(try_rotate(Vec3::X, 0.5, Vec3::Z).is_ok());
/// assert!(try_rotate(Vec3::X, 0.5, Vec3::ZERO).is_err());
/// ```
pub fn try_rotate(vector: Vec3, angle: f64, axis: Vec3) -> Result<Vec3> {
    check::finite_vec("rotate", "vector", vector)?;
    check::finite_scalar("rotate", "angle", angle)?;
    check::finite_vec("rotate", "axis", axis)?;
    check::normalizable("rotate", "axis", axis)?;
    check::finite_result("rotate", rotate(vector, angle, axis))
}
