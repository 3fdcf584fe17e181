//! Element-wise broadcast and merge-join arithmetic
//!
//! Unary broadcasts recompute the stored values in place of the original
//! pattern. Binary broadcasts merge two matrices of identical shape whose
//! nonzero patterns may differ, by set operations over their sorted linear
//! ids: intersection mode keeps only shared coordinates (multiply, divide),
//! union mode keeps all coordinates and passes one-sided entries through a
//! fill transform (add, subtract).

use coomat_core::{sorted, CooError, MatrixElement, Result};

use crate::matrix::CooMatrix;

/// Result-support policy for binary broadcasts
///
/// Modeled as a closed tagged choice rather than a pair of optional
/// callables, so that supplying only one fill is unrepresentable.
#[derive(Debug, Clone, Copy)]
pub enum FillPolicy<T> {
    /// Result support is the intersection of both operands' coordinates
    Intersection,
    /// Result support is the union of both operands' coordinates; an entry
    /// present in only one operand passes through that side's transform
    Union {
        left: fn(T) -> T,
        right: fn(T) -> T,
    },
}

impl<T: MatrixElement> CooMatrix<T> {
    /// Unary broadcast: recompute every stored value, keeping the pattern
    pub fn map<F: Fn(T) -> T>(&self, f: F) -> CooMatrix<T> {
        CooMatrix::from_sorted_triplet(
            self.values().iter().map(|&v| f(v)).collect(),
            self.row().to_vec(),
            self.column().to_vec(),
            self.shape(),
        )
    }

    fn compare<F: Fn(T, T) -> bool>(&self, op: F, rhs: T) -> CooMatrix<T> {
        self.map(|v| if op(v, rhs) { T::from_f64(1.0) } else { T::zero() })
    }

    /// Entry-wise `>=` against a scalar, yielding a 1/0 valued matrix
    pub fn ge(&self, rhs: T) -> CooMatrix<T> {
        self.compare(|a, b| a >= b, rhs)
    }

    /// Entry-wise `>` against a scalar, yielding a 1/0 valued matrix
    pub fn gt(&self, rhs: T) -> CooMatrix<T> {
        self.compare(|a, b| a > b, rhs)
    }

    /// Entry-wise `<=` against a scalar, yielding a 1/0 valued matrix
    pub fn le(&self, rhs: T) -> CooMatrix<T> {
        self.compare(|a, b| a <= b, rhs)
    }

    /// Entry-wise `<` against a scalar, yielding a 1/0 valued matrix
    pub fn lt(&self, rhs: T) -> CooMatrix<T> {
        self.compare(|a, b| a < b, rhs)
    }

    /// Entry-wise `==` against a scalar, yielding a 1/0 valued matrix
    pub fn eq_scalar(&self, rhs: T) -> CooMatrix<T> {
        self.compare(|a, b| a == b, rhs)
    }

    /// Entry-wise `!=` against a scalar, yielding a 1/0 valued matrix
    pub fn ne_scalar(&self, rhs: T) -> CooMatrix<T> {
        self.compare(|a, b| a != b, rhs)
    }

    /// Binary broadcast: merge-join two matrices of identical shape
    ///
    /// When both operands share the exact same nonzero pattern, `f` is
    /// applied entry-wise in id order. Otherwise the result support is
    /// derived from the id sets according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns a shape error when the operands' shapes differ.
    pub fn broadcast2d<F: Fn(T, T) -> T>(
        &self,
        other: &CooMatrix<T>,
        f: F,
        policy: FillPolicy<T>,
    ) -> Result<CooMatrix<T>> {
        if self.shape() != other.shape() {
            return Err(CooError::ShapeMismatch {
                a: self.shape(),
                b: other.shape(),
            });
        }

        // fast path: identical nonzero patterns
        if self.ids() == other.ids() {
            let values = self
                .values()
                .iter()
                .zip(other.values())
                .map(|(&a, &b)| f(a, b))
                .collect();
            return Ok(CooMatrix::from_sorted_triplet(
                values,
                self.row().to_vec(),
                self.column().to_vec(),
                self.shape(),
            ));
        }

        match policy {
            FillPolicy::Intersection => {
                let both = sorted::intersect(self.ids(), other.ids());
                let mut values = Vec::with_capacity(both.len());
                let mut row = Vec::with_capacity(both.len());
                let mut column = Vec::with_capacity(both.len());
                for &id in &both {
                    // both id arrays are sorted, so lookups are binary searches
                    let ka = sorted::searchsorted(self.ids(), &id);
                    let kb = sorted::searchsorted(other.ids(), &id);
                    values.push(f(self.values()[ka], other.values()[kb]));
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
            FillPolicy::Union { left, right } => {
                let all = sorted::union(self.ids(), other.ids());
                let mut values = Vec::with_capacity(all.len());
                let mut row = Vec::with_capacity(all.len());
                let mut column = Vec::with_capacity(all.len());
                let (mut ka, mut kb) = (0, 0);
                for &id in &all {
                    let in_a = ka < self.ids().len() && self.ids()[ka] == id;
                    let in_b = kb < other.ids().len() && other.ids()[kb] == id;
                    let value = if in_a && in_b {
                        f(self.values()[ka], other.values()[kb])
                    } else if in_a {
                        left(self.values()[ka])
                    } else {
                        right(other.values()[kb])
                    };
                    values.push(value);
                    let (r, c) = self.id_to_ij(id);
                    row.push(r);
                    column.push(c);
                    if in_a {
                        ka += 1;
                    }
                    if in_b {
                        kb += 1;
                    }
                }
                Ok(CooMatrix::from_sorted_triplet(
                    values,
                    row,
                    column,
                    self.shape(),
                ))
            }
        }
    }

    /// Entry-wise sum; one-sided entries pass through unchanged
    pub fn add(&self, other: &CooMatrix<T>) -> Result<CooMatrix<T>> {
        self.broadcast2d(
            other,
            |a, b| a + b,
            FillPolicy::Union {
                left: |v| v,
                right: |v| v,
            },
        )
    }

    /// Entry-wise difference; entries present only in `other` negate
    pub fn subtract(&self, other: &CooMatrix<T>) -> Result<CooMatrix<T>> {
        self.broadcast2d(
            other,
            |a, b| a - b,
            FillPolicy::Union {
                left: |v| v,
                right: |v| -v,
            },
        )
    }

    /// Entry-wise product over the shared coordinates only
    ///
    /// Anything times an implicit zero is an implicit zero, so only
    /// coordinates stored in both operands survive.
    pub fn multiply(&self, other: &CooMatrix<T>) -> Result<CooMatrix<T>> {
        self.broadcast2d(other, |a, b| a * b, FillPolicy::Intersection)
    }

    /// Entry-wise quotient over the shared coordinates only
    pub fn divide(&self, other: &CooMatrix<T>) -> Result<CooMatrix<T>> {
        self.broadcast2d(other, |a, b| a / b, FillPolicy::Intersection)
    }
}
