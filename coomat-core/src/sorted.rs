//! Primitives over sorted integer arrays
//!
//! This module provides the ordered-array substrate the matrix algorithms
//! are built on: binary search, set operations over sorted unique arrays,
//! mask conversion, and a vectorizable membership test. All set inputs are
//! required to be strictly ascending; behavior on unsorted input is
//! undefined.

extern crate alloc;
use alloc::vec::Vec;

/// Number of positions in `sorted` strictly less than `key`
///
/// Equivalent to the insertion point that keeps `sorted` ordered.
pub fn searchsorted<T: Ord>(sorted: &[T], key: &T) -> usize {
    sorted.partition_point(|x| x < key)
}

/// Intersection of two strictly ascending arrays
pub fn intersect(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut ka, mut kb) = (0, 0);
    while ka < a.len() && kb < b.len() {
        match a[ka].cmp(&b[kb]) {
            core::cmp::Ordering::Less => ka += 1,
            core::cmp::Ordering::Greater => kb += 1,
            core::cmp::Ordering::Equal => {
                out.push(a[ka]);
                ka += 1;
                kb += 1;
            }
        }
    }
    out
}

/// Union of two strictly ascending arrays
pub fn union(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut ka, mut kb) = (0, 0);
    while ka < a.len() && kb < b.len() {
        match a[ka].cmp(&b[kb]) {
            core::cmp::Ordering::Less => {
                out.push(a[ka]);
                ka += 1;
            }
            core::cmp::Ordering::Greater => {
                out.push(b[kb]);
                kb += 1;
            }
            core::cmp::Ordering::Equal => {
                out.push(a[ka]);
                ka += 1;
                kb += 1;
            }
        }
    }
    out.extend_from_slice(&a[ka..]);
    out.extend_from_slice(&b[kb..]);
    out
}

/// Elements of `a` not present in `b`, both strictly ascending
pub fn difference(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(a.len());
    let mut kb = 0;
    for &x in a {
        while kb < b.len() && b[kb] < x {
            kb += 1;
        }
        if kb >= b.len() || b[kb] != x {
            out.push(x);
        }
    }
    out
}

/// Positions of the `true` flags in a boolean mask
pub fn mask_to_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(k, &m)| m.then_some(k))
        .collect()
}

/// Test each query for membership in a strictly ascending integer array
///
/// Instead of hashing, every bin `b` is expanded into the interval
/// boundaries `4b - 1, 4b + 1` (the integer analogue of `b - 0.25,
/// b + 0.25`), giving an interleaved boundary array that is sorted by
/// construction. A query at `4q` binary-searches into that array and lands
/// at an odd insertion point exactly when it sits inside a bin's interval.
pub fn fast_in1d(queries: &[u64], bins: &[u64]) -> Vec<bool> {
    let mut bounds: Vec<i128> = Vec::with_capacity(bins.len() * 2);
    for &b in bins {
        let center = 4 * b as i128;
        bounds.push(center - 1);
        bounds.push(center + 1);
    }
    queries
        .iter()
        .map(|&q| searchsorted(&bounds, &(4 * q as i128)) % 2 > 0)
        .collect()
}
