//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix values.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Trait for types that can be stored as matrix values
///
/// All element types must be cheap to copy, comparable, and closed
/// under the four arithmetic operations plus negation (negation is
/// what gives `subtract` its missing-from-left semantics, so unsigned
/// integers are deliberately excluded).
pub trait MatrixElement:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity, used as the implicit fill of unstored entries
    fn zero() -> Self;

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(self) -> f64;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Whether this value compares equal to the additive identity
    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

// Implement MatrixElement for standard signed numeric types

impl MatrixElement for f32 {
    fn zero() -> Self {
        0.0
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for f64 {
    fn zero() -> Self {
        0.0
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl MatrixElement for i32 {
    fn zero() -> Self {
        0
    }

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for i64 {
    fn zero() -> Self {
        0
    }

    fn from_f64(value: f64) -> Self {
        value as i64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}
