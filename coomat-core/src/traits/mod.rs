//! Abstract interfaces for the COO matrix ecosystem
//!
//! This module defines all trait abstractions used by the implementation
//! crates. Traits are pure interfaces - no concrete implementations.

#[cfg(feature = "alloc")]
pub mod backend;
pub mod element;
pub mod matrix;

#[cfg(feature = "alloc")]
pub use backend::DotBackend;
pub use element::MatrixElement;
pub use matrix::SparseMatrix;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
