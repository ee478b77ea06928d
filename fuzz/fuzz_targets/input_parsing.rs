// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input parsing under adversarial text.
//!
//! Garbage should come back as an `InputError`, never a panic. Anything
//! that does parse must survive a render and re-parse unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mergesort::input::{parse, InputFormat};
use mergesort::{render_json, render_listing};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(values) = parse(raw, InputFormat::Text) {
        let listing = render_listing(&values);
        assert_eq!(parse(&listing, InputFormat::Text).ok(), Some(values));
    }

    if let Ok(values) = parse(raw, InputFormat::Json) {
        let json = render_json(&values).expect("integers always serialize");
        assert_eq!(parse(&json, InputFormat::Json).ok(), Some(values));
    }
});
