// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deterministic textual listings of a sequence.

use std::fmt::{Display, Write};

use serde::Serialize;

/// Elements in order, separated by single spaces. Empty input renders as "".
///
/// ```
/// assert_eq!(mergesort::render_listing(&[5, 6, 7]), "5 6 7");
/// assert_eq!(mergesort::render_listing::<i32>(&[]), "");
/// ```
pub fn render_listing<T: Display>(seq: &[T]) -> String {
    let mut out = String::new();
    for (i, item) in seq.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing to a String cannot fail
        let _ = write!(out, "{}", item);
    }
    out
}

/// The sequence as a compact JSON array.
pub fn render_json<T: Serialize>(seq: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string(seq)
}
