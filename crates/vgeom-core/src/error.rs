//! Error types for vgeom operations.
//!
//! The plain geometry functions never fail: degenerate input propagates as
//! NaN. The checked variants (`try_rotate`, `try_angle_between`) and the
//! textual vector parser report failures through [`Error`] instead.
//!
//! # Usage
//!
//! ```rust
//! use vgeom_core::{Error, Result};
//!
//! fn normalize_len(len: f64) -> Result<f64> {
//!     if len == 0.0 {
//!         return Err(Error::degenerate("rotate", "axis"));
//!     }
//!     Ok(1.0 / len)
//! }
//!
//! assert!(normalize_len(0.0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by checked geometry operations and vector parsing.
///
/// # Categories
///
/// - **Input errors**: [`DegenerateInput`](Error::DegenerateInput), [`NonFinite`](Error::NonFinite),
///   [`Overflow`](Error::Overflow)
/// - **Parse errors**: [`Parse`](Error::Parse)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A vector that must be normalized has zero length.
    ///
    /// Returned by `try_rotate` for a zero axis and by `try_angle_between`
    /// when either input is the zero vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vgeom_core::Error;
    ///
    /// let err = Error::degenerate("rotate", "axis");
    /// assert_eq!(err.to_string(), "rotate: argument `axis` has zero length");
    /// ```
    #[error("{operation}: argument `{argument}` has zero length")]
    DegenerateInput {
        /// Operation that rejected the input
        operation: &'static str,
        /// Name of the offending argument
        argument: &'static str,
    },

    /// An input contains NaN or an infinite component.
    #[error("{operation}: argument `{argument}` is not finite")]
    NonFinite {
        /// Operation that rejected the input
        operation: &'static str,
        /// Name of the offending argument
        argument: &'static str,
    },

    /// Finite input whose length or result does not fit in `f64`.
    ///
    /// `argument` is `"result"` when the inputs were fine on their own but
    /// the computed value overflowed.
    #[error("{operation}: `{argument}` overflows the f64 range")]
    Overflow {
        /// Operation that rejected the input
        operation: &'static str,
        /// Name of the offending argument, or `result`
        argument: &'static str,
    },

    /// Text could not be parsed as a vector or scalar.
    #[error("cannot parse `{input}`: {reason}")]
    Parse {
        /// The text that failed to parse
        input: String,
        /// Why parsing failed
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::DegenerateInput`] error.
    #[inline]
    pub fn degenerate(operation: &'static str, argument: &'static str) -> Self {
        Self::DegenerateInput {
            operation,
            argument,
        }
    }

    /// Creates an [`Error::NonFinite`] error.
    #[inline]
    pub fn non_finite(operation: &'static str, argument: &'static str) -> Self {
        Self::NonFinite {
            operation,
            argument,
        }
    }

    /// Creates an [`Error::Overflow`] error.
    #[inline]
    pub fn overflow(operation: &'static str, argument: &'static str) -> Self {
        Self::Overflow {
            operation,
            argument,
        }
    }

    /// Creates an [`Error::Parse`] error.
    #[inline]
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the input was rejected as degenerate, non-finite
    /// or overflowing.
    #[inline]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::DegenerateInput { .. } | Self::NonFinite { .. } | Self::Overflow { .. }
        )
    }

    /// Returns `true` if this is a parse error.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate() {
        let err = Error::degenerate("angle_between", "vec2");
        let msg = err.to_string();
        assert!(msg.contains("angle_between"));
        assert!(msg.contains("vec2"));
        assert!(err.is_input_error());
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_non_finite() {
        let err = Error::non_finite("rotate", "angle");
        assert_eq!(err.to_string(), "rotate: argument `angle` is not finite");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_overflow() {
        let err = Error::overflow("angle_between", "result");
        assert_eq!(err.to_string(), "angle_between: `result` overflows the f64 range");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_parse() {
        let err = Error::parse("1,2", "expected 3 components, got 2");
        let msg = err.to_string();
        assert!(msg.contains("`1,2`"));
        assert!(msg.contains("got 2"));
        assert!(err.is_parse_error());
    }
}
