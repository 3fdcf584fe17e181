//! Error types for COO matrix operations

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CooError {
    /// An index is too large for its axis
    IndexOutOfBounds { index: usize, axis_len: usize },
    /// Two-dimensional shapes disagree
    ShapeMismatch { a: (usize, usize), b: (usize, usize) },
    /// Parallel arrays or a vector operand have inconsistent lengths
    LengthMismatch { expected: usize, got: usize },
    /// The matrix extent does not fit the linear id domain
    ShapeOverflow { n_row: usize, n_column: usize },
    /// Selection indices must be strictly ascending
    UnsortedIndices,
}

impl core::fmt::Display for CooError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CooError::IndexOutOfBounds { index, axis_len } => {
                write!(f, "index {index} too large for axis with length {axis_len}")
            }
            CooError::ShapeMismatch { a, b } => {
                write!(
                    f,
                    "shape ({}, {}) does not match shape ({}, {})",
                    a.0, a.1, b.0, b.1
                )
            }
            CooError::LengthMismatch { expected, got } => {
                write!(f, "expected length {expected}, got {got}")
            }
            CooError::ShapeOverflow { n_row, n_column } => {
                write!(f, "extent {n_row} x {n_column} overflows the linear id domain")
            }
            CooError::UnsortedIndices => {
                write!(f, "selection indices must be strictly ascending")
            }
        }
    }
}

impl core::error::Error for CooError {}

/// Result type for COO matrix operations
pub type Result<T> = core::result::Result<T, CooError>;
