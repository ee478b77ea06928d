// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use std::cmp::Ordering;

/// Named input/expected pairs every sort entry point must satisfy.
pub const SCENARIOS: &[(&str, &[i32], &[i32])] = &[
    ("random", &[12, 11, 13, 5, 6, 7], &[5, 6, 7, 11, 12, 13]),
    ("already sorted", &[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]),
    ("reverse sorted", &[5, 4, 3, 2, 1], &[1, 2, 3, 4, 5]),
    ("duplicates", &[3, 7, 3, 1, 9, 7, 2], &[1, 2, 3, 3, 7, 7, 9]),
    ("single element", &[42], &[42]),
    ("empty", &[], &[]),
    ("larger", &[38, 27, 43, 3, 9, 82, 10], &[3, 9, 10, 27, 38, 43, 82]),
];

/// An integer key with a payload the ordering ignores.
///
/// Two `Keyed` values with the same key compare equal, so the only way to
/// tell them apart after sorting is `tag`. That is what makes stability
/// observable.
#[derive(Debug, Clone, Copy)]
pub struct Keyed<P = char> {
    pub key: i32,
    pub tag: P,
}

impl<P> PartialEq for Keyed<P> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<P> Eq for Keyed<P> {}

impl<P> PartialOrd for Keyed<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for Keyed<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Shorthand constructor.
pub fn keyed<P>(key: i32, tag: P) -> Keyed<P> {
    Keyed { key, tag }
}

/// Tag every key with its input position.
pub fn with_positions(keys: &[i32]) -> Vec<Keyed<usize>> {
    keys.iter()
        .enumerate()
        .map(|(pos, &key)| keyed(key, pos))
        .collect()
}

pub fn keys<P>(seq: &[Keyed<P>]) -> Vec<i32> {
    seq.iter().map(|k| k.key).collect()
}

pub fn tags<P: Clone>(seq: &[Keyed<P>]) -> Vec<P> {
    seq.iter().map(|k| k.tag.clone()).collect()
}

/// True when equal keys appear with strictly increasing positions.
pub fn is_stable(sorted: &[Keyed<usize>]) -> bool {
    sorted
        .windows(2)
        .all(|w| w[0].key != w[1].key || w[0].tag < w[1].tag)
}
