//! COOMAT - Coordinate-Format Sparse Matrix Library
//!
//! This library provides an immutable COO sparse matrix with merge-join
//! element-wise arithmetic, segmented-reduction dot products, and
//! sub-matrix selection, all without ever materializing a dense array.
//!
//! ## Architecture
//!
//! COOMAT follows a clean definition/implementation separation:
//!
//! - **coomat-core**: Traits, errors, validation, and sorted-array
//!   primitives (no_std)
//! - **coomat**: The concrete matrix container and its algorithms
//!
//! ## Quick Start
//!
//! ```rust
//! use coomat::{CooMatrix, Index};
//!
//! fn example() -> coomat::Result<()> {
//!     // 2.0 at (0, 0), 3.0 at (1, 1)
//!     let a = CooMatrix::from_triplet(vec![2.0, 3.0], vec![0, 1], vec![0, 1], (2, 2))?;
//!     let b = CooMatrix::from_triplet(vec![5.0, 7.0], vec![0, 1], vec![0, 0], (2, 2))?;
//!
//!     // union-mode sum, intersection-mode product
//!     let sum = a.add(&b)?;
//!     let product = a.multiply(&b)?;
//!     assert_eq!(product.values(), &[10.0]);
//!
//!     // sparse matrix times dense vector
//!     let y = a.dot_dense(&[1.0, 1.0])?;
//!     assert_eq!(y, vec![2.0, 3.0]);
//!
//!     // sub-matrix selection
//!     let rows = sum.select(&Index::List(vec![0]), &Index::Full)?;
//!     assert_eq!(rows.shape(), (1, 2));
//!     Ok(())
//! }
//! example().unwrap();
//! ```
//!
//! ## Representation
//!
//! Stored entries are kept in three parallel arrays sorted by the linear
//! id `row * n_column + column`. The strict ascent of the id array gives
//! row-major order and forbids duplicate coordinates, and every algorithm
//! in the crate is a fixed sequence of vectorizable passes over it: merge
//! joins and binary searches for arithmetic and lookup, prefix sums for
//! the dot product, and rank remapping for selection.

// Re-export core abstractions
pub use coomat_core::{
    // Core traits
    DotBackend, MatrixElement, MatrixOperations, SparseMatrix,
    // Error handling
    CooError, Result,
    // Validation utilities
    is_strictly_ascending, validate_indices, validate_shape, validate_triplet,
};

// Implementation modules
pub mod dot;
pub mod elementwise;
pub mod matrix;
pub mod select;

// Public exports
pub use dot::SegmentedDot;
pub use elementwise::FillPolicy;
pub use matrix::CooMatrix;
pub use select::{normalize_indices, Index};
