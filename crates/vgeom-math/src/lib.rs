//! # vgeom-math
//!
//! 3D vector geometry helpers.
//!
//! This crate provides a small set of pure functions on [`Vec3`]:
//!
//! - [`rotate`] - rotate a vector about an arbitrary axis (Rodrigues' formula)
//! - [`angle_between`] - angle between two vectors, in `[0, π]`
//! - [`perpendicular`] - vector perpendicular to two others (cross product)
//!
//! # Degenerate input
//!
//! [`rotate`] normalizes its axis and [`angle_between`] divides by both
//! norms. A zero-length vector in those positions yields NaN, exactly as
//! the arithmetic dictates, and so does a finite vector whose norm
//! overflows. [`try_rotate`], [`try_angle_between`] and
//! [`try_perpendicular`] check their input and result and return
//! [`vgeom_core::Error`] instead, so an `Ok` value is always finite.
//!
//! # Usage
//!
//! ```rust
//! use std::f64::consts::FRAC_PI_2;
//! use vgeom_math::{angle_between, perpendicular, rotate, Vec3};
//!
//! // Quarter turn about +Z takes +X to +Y
//! let v = rotate(Vec3::X, FRAC_PI_2, Vec3::Z);
//! assert!((v - Vec3::Y).length() < 1e-12);
//!
//! assert!((angle_between(Vec3::X, Vec3::Y) - FRAC_PI_2).abs() < 1e-12);
//! assert_eq!(perpendicular(Vec3::X, Vec3::Y), Vec3::Z);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - `DVec3` interop
//! - [`tracing`] - debug events when checked operations reject input
//! - `vgeom-core` - Error types
//!
//! # Feature Flags
//!
//! - `approx` - `approx::AbsDiffEq` and `approx::RelativeEq` for [`Vec3`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod angle;
mod check;
mod perp;
mod rotate;
mod vec3;

#[cfg(any(test, feature = "approx"))]
mod approx_impl;

pub use angle::*;
pub use perp::*;
pub use rotate::*;
pub use vec3::*;

pub use vgeom_core::{Error, Result};

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::DVec3 as GlamDVec3;
}
