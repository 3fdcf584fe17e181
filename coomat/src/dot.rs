//! Sparse matrix times dense vector products
//!
//! The reference algorithm is a segmented reduction: gather each stored
//! value's matching vector element, prefix-sum the products, and difference
//! the prefix sums at row boundaries. Entries are id-sorted and therefore
//! row-major, so each row's entries form one contiguous run and the whole
//! product costs O(nnz).
//!
//! An accelerated implementation can be substituted through the
//! [`DotBackend`] trait; it must agree with the reference exactly.

use coomat_core::{CooError, DotBackend, MatrixElement, Result};

use crate::matrix::CooMatrix;

/// Per-row sums of `values[k] * v[column[k]]` over contiguous row runs
///
/// Returns the sums and their row labels, covering exactly the rows that
/// have at least one stored entry.
fn segmented_row_sums<T: MatrixElement>(
    values: &[T],
    row: &[usize],
    column: &[usize],
    v: &[T],
) -> (Vec<T>, Vec<usize>) {
    let nnz = values.len();
    if nnz == 0 {
        return (Vec::new(), Vec::new());
    }

    // gather phase: product of each stored entry with its vector element
    let product: Vec<T> = (0..nnz).map(|k| values[k] * v[column[k]]).collect();

    // prefix[k] holds the sum of product[..k]
    let mut prefix = Vec::with_capacity(nnz + 1);
    let mut acc = T::zero();
    prefix.push(acc);
    for &p in &product {
        acc = acc + p;
        prefix.push(acc);
    }

    // boundaries at the start, every row change, and the end
    let mut bounds = vec![0];
    for k in 1..nnz {
        if row[k] != row[k - 1] {
            bounds.push(k);
        }
    }
    bounds.push(nnz);

    let sums = bounds
        .windows(2)
        .map(|w| prefix[w[1]] - prefix[w[0]])
        .collect();
    let rows = bounds[..bounds.len() - 1].iter().map(|&b| row[b]).collect();
    (sums, rows)
}

/// Reference [`DotBackend`] built on the segmented-reduction algorithm
///
/// This is the implementation every accelerated backend is validated
/// against.
#[derive(Debug, Default, Clone, Copy)]
pub struct SegmentedDot;

impl<T: MatrixElement> DotBackend<T> for SegmentedDot {
    fn dot(&self, values: &[T], row: &[usize], column: &[usize], v: &[T], n_row: usize) -> Vec<T> {
        let (sums, rows) = segmented_row_sums(values, row, column, v);
        let mut out = vec![T::zero(); n_row];
        for (sum, r) in sums.into_iter().zip(rows) {
            out[r] = sum;
        }
        out
    }
}

impl<T: MatrixElement> CooMatrix<T> {
    fn check_vector(&self, v: &[T]) -> Result<()> {
        if v.len() != self.n_column() {
            return Err(CooError::LengthMismatch {
                expected: self.n_column(),
                got: v.len(),
            });
        }
        Ok(())
    }

    /// Sparse-result dot product: a one-column matrix of shape (n_row, 1)
    ///
    /// Stored rows of the result are exactly the rows with at least one
    /// stored entry; rows without stored entries are implicitly zero and
    /// omitted.
    ///
    /// # Errors
    ///
    /// Returns a length error when `v.len() != n_column`.
    pub fn dot_sparse(&self, v: &[T]) -> Result<CooMatrix<T>> {
        self.check_vector(v)?;
        let (values, row) = segmented_row_sums(self.values(), self.row(), self.column(), v);
        let column = vec![0; values.len()];
        Ok(CooMatrix::from_sorted_triplet(
            values,
            row,
            column,
            (self.n_row(), 1),
        ))
    }

    /// Dense-result dot product: a length-`n_row` vector
    ///
    /// Rows absent from the sparse result report zero.
    ///
    /// # Errors
    ///
    /// Returns a length error when `v.len() != n_column`.
    pub fn dot_dense(&self, v: &[T]) -> Result<Vec<T>> {
        self.dot_with(v, &SegmentedDot)
    }

    /// Dense-result dot product through a caller-supplied backend
    ///
    /// # Errors
    ///
    /// Returns a length error when `v.len() != n_column`.
    pub fn dot_with<B: DotBackend<T>>(&self, v: &[T], backend: &B) -> Result<Vec<T>> {
        self.check_vector(v)?;
        Ok(backend.dot(self.values(), self.row(), self.column(), v, self.n_row()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coomat_core::SparseMatrix;

    #[test]
    fn test_dot_dense_reference_case() {
        let m = CooMatrix::from_triplet(
            vec![1.0f64, 2.0, 3.0],
            vec![0, 0, 1],
            vec![0, 1, 1],
            (2, 2),
        )
        .unwrap();

        assert_eq!(m.dot_dense(&[1.0, 1.0]).unwrap(), vec![3.0, 3.0]);
        assert_eq!(m.dot_dense(&[2.0, 0.5]).unwrap(), vec![3.0, 1.5]);
    }

    #[test]
    fn test_dot_sparse_omits_empty_rows() {
        // row 1 has no stored entries
        let m = CooMatrix::from_triplet(
            vec![1.0f64, 2.0, 3.0],
            vec![0, 0, 2],
            vec![0, 1, 1],
            (3, 2),
        )
        .unwrap();

        let sparse = m.dot_sparse(&[1.0, 1.0]).unwrap();
        assert_eq!(sparse.shape(), (3, 1));
        assert_eq!(sparse.row(), &[0, 2]);
        assert_eq!(sparse.column(), &[0, 0]);
        assert_eq!(sparse.values(), &[3.0, 3.0]);

        let dense = m.dot_dense(&[1.0, 1.0]).unwrap();
        assert_eq!(dense, vec![3.0, 0.0, 3.0]);
    }

    #[test]
    fn test_dot_single_entry_rows() {
        // first row run has length one; boundary handling must not drop it
        let m = CooMatrix::from_triplet(vec![4.0f64, 5.0], vec![0, 1], vec![1, 0], (2, 2)).unwrap();
        assert_eq!(m.dot_dense(&[1.0, 1.0]).unwrap(), vec![4.0, 5.0]);

        let single = CooMatrix::from_triplet(vec![7.0f64], vec![0], vec![0], (1, 1)).unwrap();
        assert_eq!(single.dot_dense(&[2.0]).unwrap(), vec![14.0]);
    }

    #[test]
    fn test_dot_empty_matrix() {
        let m = CooMatrix::<f64>::empty((3, 2));
        assert_eq!(m.dot_dense(&[1.0, 1.0]).unwrap(), vec![0.0, 0.0, 0.0]);

        let sparse = m.dot_sparse(&[1.0, 1.0]).unwrap();
        assert_eq!(sparse.nnz(), 0);
        assert_eq!(sparse.shape(), (3, 1));
    }

    #[test]
    fn test_dot_rejects_wrong_vector_length() {
        let m = CooMatrix::from_triplet(vec![1.0f64], vec![0], vec![0], (2, 2)).unwrap();
        assert_eq!(
            m.dot_dense(&[1.0]),
            Err(CooError::LengthMismatch {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_backend_agrees_with_sparse_variant() {
        let m = CooMatrix::from_triplet(
            vec![1.0f64, -2.0, 0.5, 3.0, 8.0],
            vec![0, 1, 1, 3, 3],
            vec![3, 0, 2, 1, 3],
            (4, 4),
        )
        .unwrap();
        let v = [2.0, -1.0, 4.0, 0.5];

        let dense = m.dot_with(&v, &SegmentedDot).unwrap();
        let sparse = m.dot_sparse(&v).unwrap();
        for (r, &value) in sparse.row().iter().zip(sparse.values()) {
            assert_eq!(dense[*r], value);
        }
        assert_eq!(dense.len(), m.dimensions().0);
    }
}
