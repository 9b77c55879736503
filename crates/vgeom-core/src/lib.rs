//! # vgeom-core
//!
//! Core types shared by the vgeom crates.
//!
//! At the moment this is the error taxonomy: [`Error`] and the [`Result`]
//! alias. The math crate reports degenerate or non-finite input through it
//! from its checked operations, and the CLI reports vector parse failures.
//!
//! ## Crate Structure
//!
//! ```text
//! vgeom-core (this crate)
//!    ^
//!    |
//!    +-- vgeom-math (Vec3, rotate, angle_between, perpendicular)
//!    +-- vgeom-cli (vgeom binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use vgeom_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
}
