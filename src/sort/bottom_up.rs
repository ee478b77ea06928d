// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bottom-up passes: the same merges as the recursion, scheduled by width.
//!
//! ```text
//! width 1:  [5][4][3][2][1]      merge pairs of singletons
//! width 2:  [4 5][2 3][1]        trailing run has no partner, left alone
//! width 4:  [2 3 4 5][1]
//! width 8:  [1 2 3 4 5]          width >= len, done
//! ```
//!
//! No call stack grows with the input, which matters for very long inputs.
//! The run boundaries differ from the top-down split, but a stable merge sort
//! has exactly one possible output, so the result is identical.

use super::merge::merge;
use crate::stats::SortStats;

/// Sort `seq` with bottom-up passes. `stats.max_depth` records the pass count.
pub(crate) fn sort_bottom_up<T: Ord + Clone>(seq: &mut [T], stats: &mut SortStats) {
    let len = seq.len();
    let mut width: usize = 1;
    let mut passes = 0;

    while width < len {
        passes += 1;
        let mut left = 0;
        // A partner run exists while the right run's first index is in bounds
        while left + width < len {
            let mid = left + width - 1;
            let right = mid.saturating_add(width).min(len - 1);
            merge(seq, left, mid, right, stats);
            left = right + 1;
        }
        width = match width.checked_mul(2) {
            Some(w) => w,
            None => break,
        };
    }

    stats.max_depth = passes;
}
