// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Work counters for a single sort call.

use serde::Serialize;

use crate::sort::Strategy;

/// What one sort call did. Built fresh per call, never shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Input length.
    pub len: usize,
    /// Strategy that produced these counts.
    pub strategy: Strategy,
    /// Head-to-head comparisons during interleaving. Tail copies are free.
    pub comparisons: usize,
    /// Merge steps performed. Always `len - 1` for `len >= 1`.
    pub merges: usize,
    /// Elements copied into transient merge buffers.
    pub elements_copied: usize,
    /// Deepest recursion level (top-down) or number of passes (bottom-up).
    pub max_depth: usize,
}

impl SortStats {
    pub fn new(len: usize, strategy: Strategy) -> Self {
        Self {
            len,
            strategy,
            ..Self::default()
        }
    }

    /// Worst-case comparison count for a merge sort of `len` elements:
    /// `len * ceil(log2(len)) - 2^ceil(log2(len)) + 1`.
    pub fn comparison_bound(len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let levels = usize::BITS - (len - 1).leading_zeros();
        let full = 1usize.checked_shl(levels).unwrap_or(usize::MAX);
        len.saturating_mul(levels as usize)
            .saturating_sub(full)
            .saturating_add(1)
    }
}
