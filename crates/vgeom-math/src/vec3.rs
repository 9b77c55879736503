//! 3D vector type for points and directions.
//!
//! [`Vec3`] is a plain `(x, y, z)` triple of `f64`. Every operation returns
//! a new value; nothing in this crate mutates its inputs.
//!
//! # Usage
//!
//! ```rust
//! use vgeom_math::Vec3;
//!
//! let v = Vec3::new(1.0, 2.0, 2.0);
//! assert_eq!(v.length(), 3.0);
//!
//! let parsed: Vec3 = "[1, 2, 2]".parse().unwrap();
//! assert_eq!(parsed, v);
//! ```

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};
use std::str::FromStr;

use vgeom_core::Error;

/// A 3D vector: a point or direction in Euclidean space.
///
/// Has no identity beyond its components. Two vectors are equal when all
/// three components compare equal.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use vgeom_math::Vec3;
///
/// let a = Vec3::new(1.0, 0.0, 0.0);
/// assert_eq!(a.x, 1.0);
/// assert_eq!(a[0], 1.0);
///
/// let n = a.cross(Vec3::Y);
/// assert_eq!(n, Vec3::Z);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vgeom_math::Vec3;
    ///
    /// let v = Vec3::new(1.0, 2.0, 3.0);
    /// ```
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product with another vector.
    ///
    /// ```rust
    /// use vgeom_math::Vec3;
    ///
    /// let a = Vec3::new(1.0, 2.0, 3.0);
    /// let b = Vec3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(b), 32.0);
    /// ```
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-hand rule).
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Length (Euclidean norm) of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam DVec3.
    #[inline]
    pub fn to_glam(self) -> ::glam::DVec3 {
        ::glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam DVec3.
    #[inline]
    pub fn from_glam(v: ::glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

// Indexing
impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

// Vec3 + Vec3
impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vec3 - Vec3
impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// -Vec3
impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Vec3 * f64
impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f64 * Vec3
impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

// Vec3 / f64
impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Prints as `[x, y, z]`, honoring the formatter precision.
///
/// ```rust
/// use vgeom_math::Vec3;
///
/// assert_eq!(format!("{:.2}", Vec3::new(1.0, 0.5, -2.0)), "[1.00, 0.50, -2.00]");
/// ```
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "[{:.*}, {:.*}, {:.*}]", p, self.x, p, self.y, p, self.z),
            None => write!(f, "[{}, {}, {}]", self.x, self.y, self.z),
        }
    }
}

/// Parses `x,y,z`, optionally wrapped in `[...]` or `(...)`.
///
/// Whitespace around components is ignored.
impl FromStr for Vec3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .or_else(|| trimmed.strip_prefix('(').and_then(|t| t.strip_suffix(')')))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(Error::parse(
                s,
                format!("expected 3 components, got {}", parts.len()),
            ));
        }

        let mut out = [0.0; 3];
        for (slot, part) in out.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .map_err(|e| Error::parse(s, format!("component `{}`: {}", part, e)))?;
        }
        Ok(Self::from_array(out))
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

impl From<::glam::DVec3> for Vec3 {
    #[inline]
    fn from(v: ::glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for ::glam::DVec3 {
    #[inline]
    fn from(v: Vec3) -> ::glam::DVec3 {
        v.to_glam()
    }
}
