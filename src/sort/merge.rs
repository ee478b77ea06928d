// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The merge step: combine two adjacent ascending runs into one.
//!
//! ```text
//!   seq:   … │ 3 7 9 │ 1 7 8 │ …        left=2, mid=4, right=7
//!              left    right
//!               buf     buf
//!                 \     /
//!   seq:   … │ 1 3 7 7 8 9 │ …          [left, right] ascending
//! ```
//!
//! Both halves are copied into buffers local to the call, then interleaved
//! back into `seq[left..=right]`. On equal heads the left buffer wins, which
//! is the whole of the stability argument: left-buffer elements came from
//! lower indices.

use crate::stats::SortStats;
use crate::verify::contracts::{
    check_merge_precondition, check_range_sorted, check_range_valid,
};

/// Merge the ascending runs `seq[left..=mid]` and `seq[mid+1..=right]`.
///
/// # Preconditions
/// `left <= mid < right < seq.len()` and both runs ascending. Checked by
/// contracts in debug builds; the recursion never produces anything else.
pub(crate) fn merge<T: Ord + Clone>(
    seq: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    stats: &mut SortStats,
) {
    check_range_valid(seq.len(), left, right);
    check_merge_precondition(seq, left, mid, right);

    // Sizes mid-left+1 and right-mid. Dropped when this call returns.
    let left_buf: Vec<T> = seq[left..=mid].to_vec();
    let right_buf: Vec<T> = seq[mid + 1..=right].to_vec();
    stats.elements_copied += left_buf.len() + right_buf.len();
    stats.merges += 1;

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_buf.len() && j < right_buf.len() {
        stats.comparisons += 1;
        // `<=` keeps equal elements in left-to-right order
        if left_buf[i] <= right_buf[j] {
            seq[k] = left_buf[i].clone();
            i += 1;
        } else {
            seq[k] = right_buf[j].clone();
            j += 1;
        }
        k += 1;
    }

    // At most one of these has anything left
    for item in &left_buf[i..] {
        seq[k] = item.clone();
        k += 1;
    }
    for item in &right_buf[j..] {
        seq[k] = item.clone();
        k += 1;
    }

    debug_assert_eq!(k, right + 1, "merge wrote {} slots, expected {}", k - left, right + 1 - left);
    check_range_sorted(seq, left, right);
}
