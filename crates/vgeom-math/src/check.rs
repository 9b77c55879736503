//! Input validation shared by the checked operations.

use crate::Vec3;
use vgeom_core::{Error, Result};

/// Rejects vectors with NaN or infinite components.
pub(crate) fn finite_vec(operation: &'static str, argument: &'static str, v: Vec3) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        tracing::debug!(operation, argument, value = %v, "rejected non-finite vector");
        Err(Error::non_finite(operation, argument))
    }
}

/// Rejects NaN or infinite scalars.
pub(crate) fn finite_scalar(operation: &'static str, argument: &'static str, s: f64) -> Result<()> {
    if s.is_finite() {
        Ok(())
    } else {
        tracing::debug!(operation, argument, value = s, "rejected non-finite scalar");
        Err(Error::non_finite(operation, argument))
    }
}

/// Rejects vectors a normalization cannot divide by: zero norm, or a
/// norm that overflows to infinity even though every component is finite.
pub(crate) fn normalizable(operation: &'static str, argument: &'static str, v: Vec3) -> Result<()> {
    let norm = v.length();
    if norm == 0.0 {
        tracing::debug!(operation, argument, "rejected zero-length vector");
        Err(Error::degenerate(operation, argument))
    } else if !norm.is_finite() {
        tracing::debug!(operation, argument, value = %v, "rejected vector with overflowing norm");
        Err(Error::overflow(operation, argument))
    } else {
        Ok(())
    }
}

/// Rejects a computed vector that overflowed or went NaN.
pub(crate) fn finite_result(operation: &'static str, v: Vec3) -> Result<Vec3> {
    if v.is_finite() {
        Ok(v)
    } else {
        tracing::debug!(operation, value = %v, "result not finite");
        Err(Error::overflow(operation, "result"))
    }
}

/// Scalar counterpart of [`finite_result`].
pub(crate) fn finite_result_scalar(operation: &'static str, s: f64) -> Result<f64> {
    if s.is_finite() {
        Ok(s)
    } else {
        tracing::debug!(operation, value = s, "result not finite");
        Err(Error::overflow(operation, "result"))
    }
}
