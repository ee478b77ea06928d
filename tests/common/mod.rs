//! Shared test utilities and fixtures.

#![allow(dead_code)]

use mergesort::{is_sorted, Sorter, Strategy};

// Re-export canonical fixtures from mergesort::testing
pub use mergesort::testing::{is_stable, keys, with_positions};

/// Sort a copy of `input` with every strategy and return the results.
pub fn sort_all_strategies<T: Ord + Clone>(input: &[T]) -> Vec<(Strategy, Vec<T>)> {
    Strategy::ALL
        .iter()
        .map(|&strategy| {
            let mut seq = input.to_vec();
            Sorter::with_strategy(strategy).sort(&mut seq);
            (strategy, seq)
        })
        .collect()
}

/// Assert every invariant that must hold between an input and its sorted output.
pub fn assert_sorted_permutation<T: Ord + Clone + std::fmt::Debug>(input: &[T], output: &[T]) {
    assert_eq!(input.len(), output.len(), "length changed");
    assert!(is_sorted(output), "output not sorted: {:?}", output);
    assert!(
        mergesort::verify::is_permutation(input, output),
        "output is not a permutation of input: {:?} -> {:?}",
        input,
        output
    );
}
