//! Coordinate and index bounds validation
//!
//! This module provides pure mathematical validation functions for
//! coordinate triplets and index arrays with no I/O dependencies.

use crate::{CooError, Result};

/// Validate that a matrix extent fits the linear id domain
///
/// Linear ids are `row * n_column + column` computed in u64, so the
/// product of the two extents must itself fit a u64. Returns the extent,
/// the exclusive upper bound of the id domain.
pub const fn validate_shape(n_row: usize, n_column: usize) -> Result<u64> {
    match (n_row as u64).checked_mul(n_column as u64) {
        Some(extent) => Ok(extent),
        None => Err(CooError::ShapeOverflow { n_row, n_column }),
    }
}

/// Validate that every index is within its axis
///
/// On failure reports the smallest out-of-range value together with the
/// axis length, matching the error contract of index normalization.
pub fn validate_indices(indices: &[usize], axis_len: usize) -> Result<()> {
    let mut offending: Option<usize> = None;
    for &index in indices {
        if index >= axis_len {
            offending = Some(match offending {
                Some(current) => current.min(index),
                None => index,
            });
        }
    }
    match offending {
        Some(index) => Err(CooError::IndexOutOfBounds { index, axis_len }),
        None => Ok(()),
    }
}

/// Validate a COO triplet against a shape
///
/// Checks that the three parallel arrays agree in length and that every
/// coordinate is within the shape. Does not check ordering or duplicate
/// coordinates; those are establishment concerns of the constructor.
pub fn validate_triplet(
    values_len: usize,
    row: &[usize],
    column: &[usize],
    shape: (usize, usize),
) -> Result<()> {
    if row.len() != values_len {
        return Err(CooError::LengthMismatch {
            expected: values_len,
            got: row.len(),
        });
    }
    if column.len() != values_len {
        return Err(CooError::LengthMismatch {
            expected: values_len,
            got: column.len(),
        });
    }
    validate_indices(row, shape.0)?;
    validate_indices(column, shape.1)
}

/// Whether an index array is strictly ascending
///
/// Row and column selection require their index arguments in strictly
/// ascending order; this is the caller-contract check.
pub fn is_strictly_ascending(indices: &[usize]) -> bool {
    indices.windows(2).all(|w| w[0] < w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_shape() {
        assert_eq!(validate_shape(3, 4), Ok(12));
        assert_eq!(validate_shape(0, 10), Ok(0));
        assert_eq!(
            validate_shape(usize::MAX, 2),
            Err(CooError::ShapeOverflow {
                n_row: usize::MAX,
                n_column: 2
            })
        );
    }

    #[test]
    fn test_validate_indices_reports_smallest_offender() {
        assert_eq!(validate_indices(&[0, 2, 1], 3), Ok(()));
        assert_eq!(
            validate_indices(&[9, 1, 5], 5),
            Err(CooError::IndexOutOfBounds {
                index: 5,
                axis_len: 5
            })
        );
        assert_eq!(validate_indices(&[], 0), Ok(()));
    }

    #[test]
    fn test_validate_triplet() {
        assert_eq!(validate_triplet(2, &[0, 1], &[1, 0], (2, 2)), Ok(()));
        assert_eq!(
            validate_triplet(2, &[0], &[1, 0], (2, 2)),
            Err(CooError::LengthMismatch {
                expected: 2,
                got: 1
            })
        );
        assert_eq!(
            validate_triplet(2, &[0, 3], &[1, 0], (2, 2)),
            Err(CooError::IndexOutOfBounds {
                index: 3,
                axis_len: 2
            })
        );
    }

    #[test]
    fn test_is_strictly_ascending() {
        assert!(is_strictly_ascending(&[]));
        assert!(is_strictly_ascending(&[4]));
        assert!(is_strictly_ascending(&[1, 2, 7]));
        assert!(!is_strictly_ascending(&[1, 1, 2]));
        assert!(!is_strictly_ascending(&[2, 1]));
    }
}
