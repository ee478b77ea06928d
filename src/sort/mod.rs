// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The Sorter: stable merge sort over a borrowed slice.
//!
//! Entry points, from least to most configurable:
//!
//! - [`sort`]: top-down merge sort of `&mut [T]`
//! - [`sort_option`]: same, but an absent slice is a no-op
//! - [`Sorter`]: pick a [`Strategy`], optionally collect [`SortStats`]
//!
//! Every entry point is total. Empty and single-element inputs return before
//! anything is allocated.

mod bottom_up;
pub(crate) mod merge;
pub(crate) mod recurse;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::stats::SortStats;
use crate::verify::contracts::{check_same_length, check_sorted};

/// How the merges are scheduled. Both produce the same output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Recursive halving at `left + (right - left) / 2`.
    #[default]
    TopDown,
    /// Iterative passes of doubling run width.
    BottomUp,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::TopDown, Strategy::BottomUp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::TopDown => "top-down",
            Strategy::BottomUp => "bottom-up",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top-down" | "topdown" | "recursive" => Ok(Strategy::TopDown),
            "bottom-up" | "bottomup" | "iterative" => Ok(Strategy::BottomUp),
            other => Err(format!(
                "unknown strategy '{}' (expected 'top-down' or 'bottom-up')",
                other
            )),
        }
    }
}

/// Configured merge sorter. Holds no buffers; each merge allocates its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sorter {
    strategy: Strategy,
}

impl Sorter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Sort `seq` ascending in place.
    pub fn sort<T: Ord + Clone>(&self, seq: &mut [T]) {
        let _ = self.sort_with_stats(seq);
    }

    /// Sort `seq` ascending in place and report what it took.
    pub fn sort_with_stats<T: Ord + Clone>(&self, seq: &mut [T]) -> SortStats {
        let mut stats = SortStats::new(seq.len(), self.strategy);
        if seq.len() <= 1 {
            return stats;
        }

        let len_before = seq.len();
        match self.strategy {
            Strategy::TopDown => recurse::recurse(seq, 0, len_before - 1, 1, &mut stats),
            Strategy::BottomUp => bottom_up::sort_bottom_up(seq, &mut stats),
        }

        check_same_length(len_before, seq.len());
        check_sorted(seq);
        stats
    }
}

/// Sort `seq` ascending in place with the top-down strategy.
///
/// Stable: elements that compare equal keep their relative order.
///
/// ```
/// let mut values = vec![12, 11, 13, 5, 6, 7];
/// mergesort::sort(&mut values);
/// assert_eq!(values, [5, 6, 7, 11, 12, 13]);
/// ```
pub fn sort<T: Ord + Clone>(seq: &mut [T]) {
    Sorter::new().sort(seq);
}

/// [`sort`], accepting an absent sequence as a no-op.
///
/// ```
/// mergesort::sort_option::<i32>(None);
///
/// let mut values = [3, 1, 2];
/// mergesort::sort_option(Some(&mut values[..]));
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub fn sort_option<T: Ord + Clone>(seq: Option<&mut [T]>) {
    if let Some(seq) = seq {
        sort(seq);
    }
}
