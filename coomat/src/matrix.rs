//! Coordinate-format sparse matrix container
//!
//! A [`CooMatrix`] owns three parallel arrays (values, row coordinates,
//! column coordinates) plus a derived array of linear ids
//! `row * n_column + column`. Every matrix produced by this crate keeps the
//! id array strictly ascending, which simultaneously gives row-major entry
//! order and forbids duplicate coordinates.

use coomat_core::{
    validate_shape, validate_triplet, MatrixElement, MatrixOperations, Result, SparseMatrix,
};

/// COO sparse matrix: stored entries plus a sorted linear id index
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooMatrix<T: MatrixElement> {
    values: Vec<T>,
    row: Vec<usize>,
    column: Vec<usize>,
    ids: Vec<u64>,
    shape: (usize, usize),
}

impl<T: MatrixElement> CooMatrix<T> {
    /// Create a matrix from a COO triplet, validating and sorting it
    ///
    /// Checks array lengths, coordinate bounds, and id-domain overflow,
    /// then sorts all three parallel arrays by linear id. Duplicate
    /// coordinates are not detected; supplying them produces a matrix
    /// whose id array is not strictly ascending and whose subsequent
    /// operations are unspecified.
    ///
    /// # Errors
    ///
    /// Returns an error if the arrays disagree in length, a coordinate is
    /// out of bounds, or `n_row * n_column` overflows the id domain.
    pub fn from_triplet(
        values: Vec<T>,
        row: Vec<usize>,
        column: Vec<usize>,
        shape: (usize, usize),
    ) -> Result<Self> {
        validate_shape(shape.0, shape.1)?;
        validate_triplet(values.len(), &row, &column, shape)?;

        let ids: Vec<u64> = row
            .iter()
            .zip(column.iter())
            .map(|(&r, &c)| r as u64 * shape.1 as u64 + c as u64)
            .collect();

        let mut order: Vec<usize> = (0..ids.len()).collect();
        order.sort_unstable_by_key(|&k| ids[k]);

        Ok(Self {
            values: order.iter().map(|&k| values[k]).collect(),
            row: order.iter().map(|&k| row[k]).collect(),
            column: order.iter().map(|&k| column[k]).collect(),
            ids: order.iter().map(|&k| ids[k]).collect(),
            shape,
        })
    }

    /// Create a matrix from a triplet that is already sorted by linear id
    ///
    /// Used internally by operations whose output is ordered by
    /// construction, to avoid a redundant sort. The caller guarantees the
    /// triplet is id-sorted with no duplicate coordinates; this is only
    /// debug-asserted.
    pub fn from_sorted_triplet(
        values: Vec<T>,
        row: Vec<usize>,
        column: Vec<usize>,
        shape: (usize, usize),
    ) -> Self {
        debug_assert_eq!(row.len(), values.len());
        debug_assert_eq!(column.len(), values.len());

        let ids: Vec<u64> = row
            .iter()
            .zip(column.iter())
            .map(|(&r, &c)| r as u64 * shape.1 as u64 + c as u64)
            .collect();
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]));

        Self {
            values,
            row,
            column,
            ids,
            shape,
        }
    }

    /// Create an empty matrix of the given shape
    pub fn empty(shape: (usize, usize)) -> Self {
        Self {
            values: Vec::new(),
            row: Vec::new(),
            column: Vec::new(),
            ids: Vec::new(),
            shape,
        }
    }

    /// Returns the stored values in id order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the row coordinate of each stored entry
    pub fn row(&self) -> &[usize] {
        &self.row
    }

    /// Returns the column coordinate of each stored entry
    pub fn column(&self) -> &[usize] {
        &self.column
    }

    /// Returns the sorted linear ids of the stored entries
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Returns the matrix shape as (n_row, n_column)
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Returns the number of rows
    pub fn n_row(&self) -> usize {
        self.shape.0
    }

    /// Returns the number of columns
    pub fn n_column(&self) -> usize {
        self.shape.1
    }

    /// Returns whether the matrix has no stored entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Linear id of a coordinate pair within this shape
    pub(crate) fn ij_to_id(&self, row: usize, column: usize) -> u64 {
        row as u64 * self.shape.1 as u64 + column as u64
    }

    /// Coordinate pair of a linear id within this shape
    ///
    /// Only meaningful for ids derived from stored entries, which implies
    /// `n_column > 0`.
    pub(crate) fn id_to_ij(&self, id: u64) -> (usize, usize) {
        let n_column = self.shape.1 as u64;
        ((id / n_column) as usize, (id % n_column) as usize)
    }

    /// Scatter the stored entries into a dense row-major array
    ///
    /// Unstored positions are filled with the zero of the element type.
    pub fn to_dense(&self) -> Vec<T> {
        let mut out = vec![T::zero(); self.shape.0 * self.shape.1];
        for k in 0..self.values.len() {
            out[self.row[k] * self.shape.1 + self.column[k]] = self.values[k];
        }
        out
    }

    /// Coordinates of stored entries whose value is not zero
    ///
    /// Stored and nonzero are distinct concepts: an entry may be stored
    /// with a zero value and is skipped here. Derived from the `!= 0`
    /// comparison mask.
    pub fn nonzero(&self) -> (Vec<usize>, Vec<usize>) {
        let mask = self.ne_scalar(T::zero());
        let mut row = Vec::new();
        let mut column = Vec::new();
        for k in 0..self.values.len() {
            if !mask.values[k].is_zero() {
                row.push(self.row[k]);
                column.push(self.column[k]);
            }
        }
        (row, column)
    }
}

impl<T: MatrixElement> SparseMatrix for CooMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.shape.0 || col >= self.shape.1 {
            return None;
        }
        let id = self.ij_to_id(row, col);
        self.ids.binary_search(&id).ok().map(|k| self.values[k])
    }

    fn dimensions(&self) -> (usize, usize) {
        self.shape
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}

impl<T: MatrixElement> MatrixOperations for CooMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<T> {
        // entries of one row are contiguous in id order
        (0..self.values.len())
            .filter(|&k| self.row[k] == row_index)
            .map(|k| self.values[k])
            .collect()
    }

    fn get_col(&self, col_index: usize) -> Vec<T> {
        (0..self.values.len())
            .filter(|&k| self.column[k] == col_index)
            .map(|k| self.values[k])
            .collect()
    }
}
