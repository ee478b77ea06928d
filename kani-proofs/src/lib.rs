// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the merge sort core.
//!
//! This standalone crate extracts the recursion and merge step and checks
//! them exhaustively over small symbolic arrays using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no index goes out of bounds, no arithmetic overflows
//! 2. **Ordering**: output is ascending
//! 3. **Permutation**: every input value appears in the output as often as before
//! 4. **Stability**: equal keys keep their input order
//! 5. **Midpoint**: `left + (right - left) / 2` stays in range for every `usize`

/// Largest array the proofs cover. Kani explores every value at each slot.
pub const MAX_PROOF_LEN: usize = 5;

// ============================================================================
// MERGE SORT (copied from src/sort/recurse.rs and src/sort/merge.rs)
// ============================================================================

/// Midpoint of `[left, right]` without forming `left + right`.
pub fn midpoint(left: usize, right: usize) -> usize {
    left + (right - left) / 2
}

/// Sort `seq` ascending in place.
pub fn sort<T: Ord + Clone>(seq: &mut [T]) {
    if seq.len() <= 1 {
        return;
    }
    let right = seq.len() - 1;
    recurse(seq, 0, right);
}

fn recurse<T: Ord + Clone>(seq: &mut [T], left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = midpoint(left, right);
    recurse(seq, left, mid);
    recurse(seq, mid + 1, right);
    merge(seq, left, mid, right);
}

fn merge<T: Ord + Clone>(seq: &mut [T], left: usize, mid: usize, right: usize) {
    let left_buf: Vec<T> = seq[left..=mid].to_vec();
    let right_buf: Vec<T> = seq[mid + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_buf.len() && j < right_buf.len() {
        if left_buf[i] <= right_buf[j] {
            seq[k] = left_buf[i].clone();
            i += 1;
        } else {
            seq[k] = right_buf[j].clone();
            j += 1;
        }
        k += 1;
    }
    for item in &left_buf[i..] {
        seq[k] = item.clone();
        k += 1;
    }
    for item in &right_buf[j..] {
        seq[k] = item.clone();
        k += 1;
    }
}

/// True when `seq` is ascending.
pub fn is_sorted<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

/// Number of occurrences of `value` in `seq`.
pub fn count<T: PartialEq>(seq: &[T], value: &T) -> usize {
    seq.iter().filter(|x| *x == value).count()
}

/// Key with an input position the ordering ignores.
#[derive(Debug, Clone, Copy)]
pub struct Tagged {
    pub key: u8,
    pub pos: u8,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify sort never panics and orders every array up to MAX_PROOF_LEN.
    #[kani::proof]
    #[kani::unwind(7)] // MAX_PROOF_LEN + 2
    fn verify_sort_orders() {
        let len: usize = kani::any_where(|&n| n <= MAX_PROOF_LEN);
        let mut values = [0i32; MAX_PROOF_LEN];
        for i in 0..len {
            values[i] = kani::any();
        }
        let original = values;

        sort(&mut values[..len]);

        kani::assert(is_sorted(&values[..len]), "output must be ascending");
        for i in 0..len {
            kani::assert(
                count(&values[..len], &original[i]) == count(&original[..len], &original[i]),
                "output must be a permutation of input",
            );
        }
        // Slots past len are untouched
        for i in len..MAX_PROOF_LEN {
            kani::assert(values[i] == 0, "sort must stay inside the slice");
        }
    }

    /// Verify equal keys keep their input order.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_sort_stable() {
        let len: usize = kani::any_where(|&n| n <= MAX_PROOF_LEN);
        let mut values = [Tagged { key: 0, pos: 0 }; MAX_PROOF_LEN];
        for i in 0..len {
            // Two keys are enough to create every tie pattern
            values[i] = Tagged {
                key: kani::any_where(|&k: &u8| k < 2),
                pos: i as u8,
            };
        }

        sort(&mut values[..len]);

        for i in 1..len {
            let (a, b) = (values[i - 1], values[i]);
            kani::assert(a.key != b.key || a.pos < b.pos, "equal keys must keep input order");
        }
    }

    /// Verify the midpoint stays in range and never overflows.
    #[kani::proof]
    fn verify_midpoint_in_range() {
        let left: usize = kani::any();
        let right: usize = kani::any_where(|&r: &usize| r >= left);

        let mid = midpoint(left, right);

        kani::assert(left <= mid && mid <= right, "mid must lie in [left, right]");
        kani::assert(
            mid - left == (right - left) / 2,
            "mid must be the floor of the range centre",
        );
    }
}

// ============================================================================
// REGULAR TESTS (run with cargo test)
// ============================================================================
