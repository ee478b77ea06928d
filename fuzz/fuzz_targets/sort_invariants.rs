// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sort invariants under arbitrary input.
//!
//! Both strategies must return a sorted permutation of whatever they are
//! given, and equal keys must keep their input order. `narrow` squeezes the
//! keys into a tiny range so runs of duplicates show up constantly.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mergesort::testing::{is_stable, with_positions};
use mergesort::{is_sorted, Sorter, Strategy};

#[derive(Debug, Arbitrary)]
struct SortInput {
    values: Vec<i32>,
    narrow: bool,
}

fuzz_target!(|input: SortInput| {
    let keys: Vec<i32> = if input.narrow {
        input.values.iter().map(|v| v.rem_euclid(4)).collect()
    } else {
        input.values
    };

    let mut expected = keys.clone();
    expected.sort();

    for strategy in Strategy::ALL {
        let sorter = Sorter::with_strategy(strategy);

        let mut plain = keys.clone();
        let stats = sorter.sort_with_stats(&mut plain);
        assert!(is_sorted(&plain), "{strategy} left output unsorted");
        assert_eq!(plain, expected, "{strategy} is not a permutation");
        assert_eq!(stats.len, keys.len());
        if keys.len() > 1 {
            assert_eq!(stats.merges, keys.len() - 1);
        }

        let mut tagged = with_positions(&keys);
        sorter.sort(&mut tagged);
        assert!(is_stable(&tagged), "{strategy} reordered equal keys");
    }
});
