//! Obviously-correct reference implementations.
//!
//! Slow and simple on purpose. If an oracle and the crate disagree, the
//! oracle is right.

use std::collections::BTreeMap;

/// Stable insertion sort: shift strictly greater elements right.
pub fn oracle_insertion_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(input.len());
    for item in input {
        let pos = out.iter().rposition(|x| x <= item).map_or(0, |p| p + 1);
        out.insert(pos, item.clone());
    }
    out
}

/// Value -> occurrence count.
pub fn oracle_multiset(input: &[i64]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for &v in input {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

#[test]
fn oracle_insertion_sort_is_stable() {
    let input = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
    let keyed: Vec<_> = input
        .iter()
        .map(|&(k, t)| mergesort::testing::keyed(k, t))
        .collect();
    let sorted = oracle_insertion_sort(&keyed);
    let tags: Vec<char> = sorted.iter().map(|k| k.tag).collect();
    assert_eq!(tags, vec!['b', 'd', 'a', 'c']);
}
