// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the merge sort.
//!
//! Debug-mode assertions that check the invariants the algorithm relies on:
//!
//! 1. Are **zero-cost in release builds** (every check is a `debug_assert!`
//!    or sits behind `cfg!(debug_assertions)`)
//! 2. Provide **early failure detection** while tests run
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Invariant                                          |
//! |----------------------------|----------------------------------------------------|
//! | `check_range_valid`        | `left <= right < len` for every merged range       |
//! | `check_merge_precondition` | both halves of a merge are ascending               |
//! | `check_range_sorted`       | a merged range is ascending afterwards             |
//! | `check_sorted`             | the whole sequence is ascending after `sort`       |
//! | `check_same_length`        | sorting never changes the length                   |
//!
//! The sortedness checks are O(n) per merge, which makes debug builds
//! O(n log n) slower by a constant. Benchmarks run in release.

/// Check that `[left, right]` is a non-trivial range inside a sequence of `len`.
///
/// # Panics (debug builds only)
/// Panics if `left > right` or `right >= len`.
#[inline]
pub fn check_range_valid(len: usize, left: usize, right: usize) {
    debug_assert!(
        left <= right,
        "Contract violation: RangeValid - left {} > right {}",
        left,
        right
    );
    debug_assert!(
        right < len,
        "Contract violation: RangeValid - right {} >= len {}",
        right,
        len
    );
}

/// Check that `seq[left..=right]` is ascending.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair out of order.
#[inline]
pub fn check_range_sorted<T: Ord>(seq: &[T], left: usize, right: usize) {
    if !cfg!(debug_assertions) {
        return;
    }
    for i in left + 1..=right {
        debug_assert!(
            seq[i - 1] <= seq[i],
            "Contract violation: RangeSorted - seq[{}] > seq[{}] in [{}, {}]",
            i - 1,
            i,
            left,
            right
        );
    }
}

/// Check the merge precondition: `[left, mid]` and `[mid+1, right]` ascending.
///
/// # Panics (debug builds only)
/// Panics if `mid` is outside `[left, right)` or either half is unsorted.
#[inline]
pub fn check_merge_precondition<T: Ord>(seq: &[T], left: usize, mid: usize, right: usize) {
    debug_assert!(
        left <= mid && mid < right,
        "Contract violation: MergePrecondition - mid {} not in [{}, {})",
        mid,
        left,
        right
    );
    check_range_sorted(seq, left, mid);
    check_range_sorted(seq, mid + 1, right);
}

/// Check that a whole sequence is ascending.
#[inline]
pub fn check_sorted<T: Ord>(seq: &[T]) {
    if seq.len() > 1 {
        check_range_sorted(seq, 0, seq.len() - 1);
    }
}

/// Check that sorting kept the length.
#[inline]
pub fn check_same_length(before: usize, after: usize) {
    debug_assert_eq!(
        before, after,
        "Contract violation: LengthPreserved - {} elements in, {} out",
        before, after
    );
}
