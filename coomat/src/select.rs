//! Sub-matrix selection
//!
//! Index expressions are normalized to sorted integer arrays, stored
//! entries are filtered through the sorted membership test, and the
//! survivors are remapped onto a compacted axis. The shape framing of the
//! results is deliberately asymmetric: column selection returns shape
//! `(len(j), n_column)` with row labels untouched, row selection returns
//! `(len(i), n_column)` with column labels untouched, and paired-element
//! selection keeps the original shape.

use coomat_core::{
    is_strictly_ascending, sorted, validate_indices, CooError, MatrixElement, Result,
};

use crate::matrix::CooMatrix;

/// Index expression along one axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Index {
    /// Every position along the axis
    Full,
    /// Boolean mask with one flag per position
    Mask(Vec<bool>),
    /// Explicit positions
    List(Vec<usize>),
}

impl From<Vec<usize>> for Index {
    fn from(list: Vec<usize>) -> Self {
        Index::List(list)
    }
}

impl From<Vec<bool>> for Index {
    fn from(mask: Vec<bool>) -> Self {
        Index::Mask(mask)
    }
}

/// Normalize an index expression to an array of valid positions
///
/// A full-range expression becomes `0..axis_len`, a mask becomes the
/// positions of its `true` flags, and an explicit list is bounds-checked.
///
/// # Errors
///
/// Returns an out-of-range error naming the smallest offending index, or
/// a length error when a mask does not cover the axis.
pub fn normalize_indices(index: &Index, axis_len: usize) -> Result<Vec<usize>> {
    match index {
        Index::Full => Ok((0..axis_len).collect()),
        Index::Mask(mask) => {
            if mask.len() != axis_len {
                return Err(CooError::LengthMismatch {
                    expected: axis_len,
                    got: mask.len(),
                });
            }
            Ok(sorted::mask_to_indices(mask))
        }
        Index::List(list) => {
            validate_indices(list, axis_len)?;
            Ok(list.clone())
        }
    }
}

fn as_ids(indices: &[usize]) -> Vec<u64> {
    indices.iter().map(|&x| x as u64).collect()
}

impl<T: MatrixElement> CooMatrix<T> {
    /// Select the stored entries whose column is in `j`
    ///
    /// Surviving columns are remapped onto a compacted axis; surviving row
    /// labels are left as-is and the result shape is `(len(j), n_column)`,
    /// a "select full rows for these columns" framing.
    ///
    /// # Errors
    ///
    /// Returns an error when `j` is out of range or not strictly ascending.
    pub fn get_columns(&self, j: &Index) -> Result<CooMatrix<T>> {
        let j = normalize_indices(j, self.n_column())?;
        if !is_strictly_ascending(&j) {
            return Err(CooError::UnsortedIndices);
        }

        let keep = sorted::fast_in1d(&as_ids(self.column()), &as_ids(&j));
        let mut values = Vec::new();
        let mut row = Vec::new();
        let mut column = Vec::new();
        for k in 0..self.values().len() {
            if keep[k] {
                values.push(self.values()[k]);
                row.push(self.row()[k]);
                // kept columns are members of j, so the compacted axis
                // (kept columns united with requested-but-absent ones) is
                // exactly j and the new label is the rank within j
                column.push(sorted::searchsorted(&j, &self.column()[k]));
            }
        }
        // row labels are reused as-is and may exceed len(j); the entries
        // stay id-sorted because the column remap is monotonic
        Ok(CooMatrix::from_sorted_triplet(
            values,
            row,
            column,
            (j.len(), self.n_column()),
        ))
    }

    /// Select the stored entries whose row is in `i`
    ///
    /// Symmetric to [`get_columns`](Self::get_columns): surviving rows are
    /// remapped onto a compacted axis of size `len(i)`, column labels stay
    /// untouched, and the result shape is `(len(i), n_column)`. The remap
    /// is monotonic, so the survivors stay id-sorted and the sorting pass
    /// of construction is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error when `i` is out of range or not strictly ascending.
    pub fn get_rows(&self, i: &Index) -> Result<CooMatrix<T>> {
        let i = normalize_indices(i, self.n_row())?;
        if !is_strictly_ascending(&i) {
            return Err(CooError::UnsortedIndices);
        }

        let keep = sorted::fast_in1d(&as_ids(self.row()), &as_ids(&i));
        let mut values = Vec::new();
        let mut row = Vec::new();
        let mut column = Vec::new();
        for k in 0..self.values().len() {
            if keep[k] {
                values.push(self.values()[k]);
                row.push(sorted::searchsorted(&i, &self.row()[k]));
                column.push(self.column()[k]);
            }
        }
        Ok(CooMatrix::from_sorted_triplet(
            values,
            row,
            column,
            (i.len(), self.n_column()),
        ))
    }

    /// Select specific paired coordinates
    ///
    /// `i` and `j` are treated as the two components of the same id
    /// construction, not as the axes of a Cartesian block: the result
    /// holds the stored entries at `(i[k], j[k])`. A length-one operand
    /// broadcasts against the other. The original shape is kept.
    ///
    /// # Errors
    ///
    /// Returns an error when an index is out of range or the operand
    /// lengths neither match nor broadcast.
    pub fn get_elements(&self, i: &Index, j: &Index) -> Result<CooMatrix<T>> {
        let i = normalize_indices(i, self.n_row())?;
        let j = normalize_indices(j, self.n_column())?;

        let mut query: Vec<u64> = if i.len() == j.len() {
            i.iter()
                .zip(j.iter())
                .map(|(&r, &c)| self.ij_to_id(r, c))
                .collect()
        } else if i.len() == 1 {
            j.iter().map(|&c| self.ij_to_id(i[0], c)).collect()
        } else if j.len() == 1 {
            i.iter().map(|&r| self.ij_to_id(r, j[0])).collect()
        } else {
            return Err(CooError::LengthMismatch {
                expected: i.len(),
                got: j.len(),
            });
        };
        query.sort_unstable();
        query.dedup();

        let hits = sorted::intersect(&query, self.ids());
        let mut values = Vec::with_capacity(hits.len());
        let mut row = Vec::with_capacity(hits.len());
        let mut column = Vec::with_capacity(hits.len());
        for &id in &hits {
            let k = sorted::searchsorted(self.ids(), &id);
            values.push(self.values()[k]);
            let (r, c) = self.id_to_ij(id);
            row.push(r);
            column.push(c);
        }
        Ok(CooMatrix::from_sorted_triplet(
            values,
            row,
            column,
            self.shape(),
        ))
    }

    /// Combined selection entry point
    ///
    /// A full-range `i` routes to column selection, a full-range `j`
    /// routes to row selection, and anything else routes to paired-element
    /// selection.
    ///
    /// # Errors
    ///
    /// Propagates the errors of the routed selection.
    pub fn select(&self, i: &Index, j: &Index) -> Result<CooMatrix<T>> {
        match (i, j) {
            (Index::Full, _) => self.get_columns(j),
            (_, Index::Full) => self.get_rows(i),
            _ => self.get_elements(i, j),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CooMatrix<f64> {
        // 1 . 2
        // . 3 .
        // 4 . 5
        CooMatrix::from_triplet(
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![0, 0, 1, 2, 2],
            vec![0, 2, 1, 0, 2],
            (3, 3),
        )
        .unwrap()
    }

    #[test]
    fn test_normalize_indices() {
        assert_eq!(normalize_indices(&Index::Full, 3).unwrap(), vec![0, 1, 2]);
        assert_eq!(
            normalize_indices(&Index::Mask(vec![true, false, true]), 3).unwrap(),
            vec![0, 2]
        );
        assert_eq!(
            normalize_indices(&Index::List(vec![1, 2]), 3).unwrap(),
            vec![1, 2]
        );
        assert_eq!(
            normalize_indices(&Index::List(vec![1, 5, 3]), 3),
            Err(CooError::IndexOutOfBounds {
                index: 3,
                axis_len: 3
            })
        );
        assert_eq!(
            normalize_indices(&Index::Mask(vec![true]), 3),
            Err(CooError::LengthMismatch {
                expected: 3,
                got: 1
            })
        );
    }

    #[test]
    fn test_get_columns_remaps_onto_compacted_axis() {
        let m = sample();
        let picked = m.get_columns(&Index::List(vec![0, 2])).unwrap();

        assert_eq!(picked.shape(), (2, 3));
        assert_eq!(picked.values(), &[1.0, 2.0, 4.0, 5.0]);
        // rows keep their original labels; columns 0 and 2 compact to 0 and 1
        assert_eq!(picked.row(), &[0, 0, 2, 2]);
        assert_eq!(picked.column(), &[0, 1, 0, 1]);
    }

    #[test]
    fn test_get_columns_full_round_trip() {
        let m = sample();
        let all = m.get_columns(&Index::Full).unwrap();
        assert_eq!(all, m);
    }

    #[test]
    fn test_get_columns_requested_but_absent_column() {
        // column 1 of row 0 holds nothing; the axis still has width 2
        let m = sample();
        let picked = m.get_columns(&Index::List(vec![0, 1])).unwrap();

        assert_eq!(picked.shape(), (2, 3));
        assert_eq!(picked.values(), &[1.0, 3.0, 4.0]);
        assert_eq!(picked.row(), &[0, 1, 2]);
        assert_eq!(picked.column(), &[0, 1, 0]);
    }

    #[test]
    fn test_get_columns_rejects_unsorted() {
        let m = sample();
        assert_eq!(
            m.get_columns(&Index::List(vec![2, 0])),
            Err(CooError::UnsortedIndices)
        );
    }

    #[test]
    fn test_get_rows_remaps_and_keeps_columns() {
        let m = sample();
        let picked = m.get_rows(&Index::List(vec![0, 2])).unwrap();

        assert_eq!(picked.shape(), (2, 3));
        assert_eq!(picked.values(), &[1.0, 2.0, 4.0, 5.0]);
        assert_eq!(picked.row(), &[0, 0, 1, 1]);
        assert_eq!(picked.column(), &[0, 2, 0, 2]);
        // survivors stay id-sorted without a re-sort
        assert!(picked.ids().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_get_rows_by_mask() {
        let m = sample();
        let picked = m.get_rows(&Index::Mask(vec![false, true, false])).unwrap();

        assert_eq!(picked.shape(), (1, 3));
        assert_eq!(picked.values(), &[3.0]);
        assert_eq!(picked.row(), &[0]);
        assert_eq!(picked.column(), &[1]);
    }

    #[test]
    fn test_get_elements_paired_not_cartesian() {
        let m = CooMatrix::from_triplet(
            vec![1.0, 2.0, 3.0],
            vec![0, 1, 2],
            vec![0, 1, 2],
            (3, 3),
        )
        .unwrap();

        let picked = m
            .get_elements(&Index::List(vec![0, 1]), &Index::List(vec![0, 1]))
            .unwrap();
        assert_eq!(picked.shape(), (3, 3));
        assert_eq!(picked.row(), &[0, 1]);
        assert_eq!(picked.column(), &[0, 1]);
        assert_eq!(picked.values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_get_elements_broadcasts_single_index() {
        let m = sample();
        let picked = m
            .get_elements(&Index::List(vec![0]), &Index::List(vec![0, 1, 2]))
            .unwrap();

        // all requested pairs sit in row 0; only (0,0) and (0,2) are stored
        assert_eq!(picked.row(), &[0, 0]);
        assert_eq!(picked.column(), &[0, 2]);
        assert_eq!(picked.values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_get_elements_rejects_unbroadcastable_lengths() {
        let m = sample();
        assert!(matches!(
            m.get_elements(&Index::List(vec![0, 1]), &Index::List(vec![0, 1, 2])),
            Err(CooError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_select_dispatch() {
        let m = sample();

        let by_columns = m.select(&Index::Full, &Index::List(vec![0, 2])).unwrap();
        assert_eq!(by_columns, m.get_columns(&Index::List(vec![0, 2])).unwrap());

        let by_rows = m.select(&Index::List(vec![0, 2]), &Index::Full).unwrap();
        assert_eq!(by_rows, m.get_rows(&Index::List(vec![0, 2])).unwrap());

        let paired = m
            .select(&Index::List(vec![0, 2]), &Index::List(vec![0, 2]))
            .unwrap();
        assert_eq!(
            paired,
            m.get_elements(&Index::List(vec![0, 2]), &Index::List(vec![0, 2]))
                .unwrap()
        );

        // both axes full routes through column selection
        let all = m.select(&Index::Full, &Index::Full).unwrap();
        assert_eq!(all, m);
    }
}
