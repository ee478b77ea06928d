//! Differential testing: compare the merge sort against oracles.
//!
//! Each oracle is simple and independent of the crate's merge step. If they
//! disagree, the oracle is right.

use super::common::{sort_all_strategies, with_positions};
use super::oracles::oracle_insertion_sort;
use mergesort::{sort, Sorter, Strategy as SortStrategy};
use proptest::prelude::*;

// =============================================================================
// MERGE SORT vs std stable sort
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Differential test: integer output matches `slice::sort` (std's stable sort).
    #[test]
    fn diff_std_sort(input in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut ours = input.clone();
        sort(&mut ours);
        let mut theirs = input.clone();
        theirs.sort();
        prop_assert_eq!(ours, theirs);
    }

    /// Differential test: tag order matches std's stable sort on tied keys.
    #[test]
    fn diff_std_sort_stability(input in prop::collection::vec(0i32..5, 0..300)) {
        let mut ours = with_positions(&input);
        sort(&mut ours);
        let mut theirs = with_positions(&input);
        theirs.sort();

        let ours: Vec<usize> = ours.iter().map(|k| k.tag).collect();
        let theirs: Vec<usize> = theirs.iter().map(|k| k.tag).collect();
        prop_assert_eq!(ours, theirs);
    }
}

// =============================================================================
// MERGE SORT vs insertion sort oracle
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Differential test: output matches the insertion sort oracle, ties included.
    #[test]
    fn diff_insertion_oracle(input in prop::collection::vec(-10i32..10, 0..80)) {
        let keyed = with_positions(&input);
        let expected = oracle_insertion_sort(&keyed);
        let mut ours = keyed.clone();
        sort(&mut ours);

        let expected: Vec<(i32, usize)> = expected.iter().map(|k| (k.key, k.tag)).collect();
        let ours: Vec<(i32, usize)> = ours.iter().map(|k| (k.key, k.tag)).collect();
        prop_assert_eq!(ours, expected);
    }
}

// =============================================================================
// TOP-DOWN vs BOTTOM-UP
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: both strategies produce identical output, ties included.
    #[test]
    fn diff_strategies_agree(input in prop::collection::vec(-8i32..8, 0..300)) {
        let results = sort_all_strategies(&with_positions(&input));
        let (_, first) = &results[0];
        let first: Vec<usize> = first.iter().map(|k| k.tag).collect();
        for (strategy, seq) in &results[1..] {
            let tags: Vec<usize> = seq.iter().map(|k| k.tag).collect();
            prop_assert_eq!(&tags, &first, "{} disagrees", strategy);
        }
    }

    /// Differential test: bottom-up pass count is ceil(log2(len)).
    #[test]
    fn diff_bottom_up_passes(len in 0usize..2000) {
        let mut seq: Vec<usize> = (0..len).rev().collect();
        let stats = Sorter::with_strategy(SortStrategy::BottomUp).sort_with_stats(&mut seq);
        let expected = if len <= 1 {
            0
        } else {
            (usize::BITS - (len - 1).leading_zeros()) as usize
        };
        prop_assert_eq!(stats.max_depth, expected);
    }
}
