// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Top-down recursion: split at the midpoint, sort both halves, merge.

use super::merge::merge;
use crate::stats::SortStats;

/// Midpoint of the inclusive range `[left, right]`, rounded down.
///
/// Written as a distance from `left` so `left + right` is never formed.
#[inline]
pub(crate) fn midpoint(left: usize, right: usize) -> usize {
    left + (right - left) / 2
}

/// Sort `seq[left..=right]` in place.
///
/// `depth` is the recursion level of this call (the full range is level 1)
/// and only feeds `stats.max_depth`.
pub(crate) fn recurse<T: Ord + Clone>(
    seq: &mut [T],
    left: usize,
    right: usize,
    depth: usize,
    stats: &mut SortStats,
) {
    if left >= right {
        return;
    }
    stats.max_depth = stats.max_depth.max(depth);

    let mid = midpoint(left, right);
    recurse(seq, left, mid, depth + 1, stats);
    recurse(seq, mid + 1, right, depth + 1, stats);
    merge(seq, left, mid, right, stats);
}
