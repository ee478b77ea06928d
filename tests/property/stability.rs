//! Stability: equal keys keep their input order.

use super::common::{is_stable, keys, sort_all_strategies, with_positions};
use mergesort::sort;
use proptest::prelude::*;

/// Keys from a narrow range so most inputs contain ties.
fn tied_keys_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-3i32..3, 0..150)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: positions of equal keys are increasing after the sort.
    #[test]
    fn prop_stable(input in tied_keys_strategy()) {
        let mut seq = with_positions(&input);
        sort(&mut seq);
        prop_assert!(is_stable(&seq), "unstable: {:?}", seq);
    }

    /// Property: every strategy is stable.
    #[test]
    fn prop_every_strategy_stable(input in tied_keys_strategy()) {
        for (strategy, seq) in sort_all_strategies(&with_positions(&input)) {
            prop_assert!(is_stable(&seq), "{} unstable", strategy);
        }
    }

    /// Property: stable sort output equals "sort by (key, position)".
    #[test]
    fn prop_stable_matches_key_position_order(input in tied_keys_strategy()) {
        let mut seq = with_positions(&input);
        sort(&mut seq);

        let mut expected: Vec<(i32, usize)> =
            input.iter().copied().zip(0..).collect();
        expected.sort_unstable();

        let actual: Vec<(i32, usize)> = seq.iter().map(|k| (k.key, k.tag)).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(keys(&seq).len(), input.len());
    }
}
