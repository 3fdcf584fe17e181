//! Core matrix abstraction traits
//!
//! This module defines the fundamental traits that all matrix
//! implementations must satisfy. These are pure interfaces with no
//! concrete implementations.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::MatrixElement;

/// Core sparse matrix trait for format-agnostic access
///
/// This trait provides the minimal interface that all sparse matrix
/// implementations must provide, regardless of how entries are stored.
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the entry is not stored or if the position is
    /// out of bounds. A stored entry may legitimately hold a zero value,
    /// in which case `Some(zero)` is returned.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored entries
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column operations (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// Get all stored entries in a row
    ///
    /// Returns the stored values of the specified row in column order.
    fn get_row(&self, row_index: usize) -> Vec<Self::Element>;

    /// Get all stored entries in a column
    ///
    /// Returns the stored values of the specified column in row order.
    fn get_col(&self, col_index: usize) -> Vec<Self::Element>;
}
