//! Validation utilities for COO matrix inputs
//!
//! This module validates coordinate triplets and index arrays before they
//! enter the algorithms. Validation is pure computation - no I/O.

pub mod bounds;

pub use bounds::{is_strictly_ascending, validate_indices, validate_shape, validate_triplet};
