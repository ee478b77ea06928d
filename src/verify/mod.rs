// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** ([`SortedVec`]) that make unsorted data
//!    unrepresentable once constructed.
//!
//! 2. **Runtime contracts** that panic in debug builds when a merge or sort
//!    breaks an invariant. Zero-cost in release, but catch bugs while the
//!    test suite runs.
//!
//! The plain predicates ([`is_sorted`], [`first_unsorted`], [`is_permutation`])
//! are always compiled and are what the tests and the fuzz target lean on.

pub mod contracts;
mod types;

pub use types::*;

/// Index of the first element that is smaller than its predecessor.
pub fn first_unsorted<T: Ord>(seq: &[T]) -> Option<usize> {
    seq.windows(2).position(|w| w[0] > w[1]).map(|i| i + 1)
}

/// True when `seq` is ascending (non-decreasing).
pub fn is_sorted<T: Ord>(seq: &[T]) -> bool {
    first_unsorted(seq).is_none()
}

/// True when `a` and `b` hold the same multiset of values.
///
/// Sorts clones of both with the standard library's sort, so it stays an
/// independent oracle for this crate's merge sort.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}
