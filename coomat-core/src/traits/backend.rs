//! Accelerated dot product backend trait
//!
//! This module defines the abstract interface for compiled or otherwise
//! accelerated sparse-dense dot product implementations. It is a pure
//! interface with no implementations.

extern crate alloc;
use alloc::vec::Vec;

use super::element::MatrixElement;

/// Trait for backends that compute a sparse matrix times dense vector product
///
/// A backend is handed the raw COO triplet of an id-sorted matrix and must
/// return the dense length-`n_row` result. Implementations carry no
/// semantics of their own: they exist purely for performance and must
/// reproduce the segmented-reduction reference result exactly, including
/// the all-zero output for a matrix with no stored entries.
pub trait DotBackend<T: MatrixElement> {
    /// Compute `matrix * v` for a row-major-sorted COO triplet
    ///
    /// `values`, `row`, and `column` are parallel arrays; `v` has one
    /// entry per matrix column.
    fn dot(&self, values: &[T], row: &[usize], column: &[usize], v: &[T], n_row: usize) -> Vec<T>;
}
