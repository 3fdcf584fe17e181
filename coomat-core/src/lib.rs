#![no_std]

//! Coomat Core - COO Sparse Matrix Definitions
//!
//! This crate provides the core traits, error types, validation routines,
//! and sorted-array primitives for coordinate-format sparse matrices

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
#[cfg(feature = "alloc")]
pub mod sorted;
pub mod traits;
pub mod validation;

pub use error::*;
pub use traits::*;
pub use validation::*;
