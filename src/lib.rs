// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stable top-down merge sort with runtime contracts.
//!
//! Sorts a borrowed slice in place: split at the midpoint, sort both halves,
//! merge them back through two short-lived buffers. Equal elements keep their
//! input order.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │  sort/mod.rs     │────▶│  sort/recurse.rs │────▶│  sort/merge.rs   │
//! │ (sort, Sorter,   │     │ (midpoint,       │     │ (two buffers,    │
//! │  Strategy)       │──┐  │  recurse)        │  ┌─▶│  left wins ties) │
//! └──────────────────┘  │  └──────────────────┘  │  └──────────────────┘
//!                       │  ┌──────────────────┐  │           │
//!                       └─▶│ sort/bottom_up.rs│──┘           ▼
//!                          │ (width doubling) │     ┌──────────────────┐
//!                          └──────────────────┘     │ verify/contracts │
//!                                                   │ (debug asserts)  │
//!                                                   └──────────────────┘
//! ```
//!
//! `render`, `input` and `harness` exist for the `mergesort` binary and play
//! no part in sorting.
//!
//! # Usage
//!
//! ```
//! use mergesort::{sort, Sorter, Strategy};
//!
//! let mut values = vec![3, 7, 3, 1, 9, 7, 2];
//! sort(&mut values);
//! assert_eq!(values, [1, 2, 3, 3, 7, 7, 9]);
//!
//! let mut values = vec![5, 4, 3, 2, 1];
//! let stats = Sorter::with_strategy(Strategy::BottomUp).sort_with_stats(&mut values);
//! assert_eq!(values, [1, 2, 3, 4, 5]);
//! assert_eq!(stats.merges, 4);
//! ```

pub mod harness;
pub mod input;
pub mod render;
mod sort;
mod stats;
pub mod testing;
pub mod verify;

pub use input::{InputError, InputFormat};
pub use render::{render_json, render_listing};
pub use sort::{sort, sort_option, Sorter, Strategy};
pub use stats::SortStats;
pub use verify::{is_sorted, SortedVec, VerifyError};
