// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The demonstration harness: sample inputs in, listings out.
//!
//! Nothing here is part of the sort contract. The CLI is a thin layer over
//! these functions so they can be tested without spawning a process.

use std::fs;
use std::path::Path;

use crate::input::{read_sequence, InputFormat};
use crate::render::{render_json, render_listing};
use crate::sort::Sorter;
use crate::stats::SortStats;

/// A named sample input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoCase {
    pub name: &'static str,
    pub values: Vec<i64>,
}

/// A demo case after sorting.
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    pub name: &'static str,
    pub original: String,
    pub sorted: String,
    pub stats: SortStats,
}

/// Result of sorting one caller-supplied sequence.
#[derive(Debug, Clone)]
pub struct SortReport {
    pub values: Vec<i64>,
    /// Rendered output: listing for text, JSON array for JSON.
    pub rendered: String,
    pub stats: SortStats,
}

/// The seven sample arrays, in display order.
pub fn demo_cases() -> Vec<DemoCase> {
    let case = |name, values: &[i64]| DemoCase {
        name,
        values: values.to_vec(),
    };
    vec![
        case("Random Array", &[12, 11, 13, 5, 6, 7]),
        case("Already Sorted", &[1, 2, 3, 4, 5]),
        case("Reverse Sorted", &[5, 4, 3, 2, 1]),
        case("Array with Duplicates", &[3, 7, 3, 1, 9, 7, 2]),
        case("Single Element", &[42]),
        case("Empty Array", &[]),
        case("Larger Array", &[38, 27, 43, 3, 9, 82, 10]),
    ]
}

/// Sort every demo case with `sorter`.
pub fn run_demo(sorter: &Sorter) -> Vec<DemoOutcome> {
    demo_cases()
        .into_iter()
        .map(|mut case| {
            let original = render_listing(&case.values);
            let stats = sorter.sort_with_stats(&mut case.values);
            DemoOutcome {
                name: case.name,
                original,
                sorted: render_listing(&case.values),
                stats,
            }
        })
        .collect()
}

/// Sort `values` and render them in `format`.
pub fn sort_values(
    mut values: Vec<i64>,
    format: InputFormat,
    sorter: &Sorter,
) -> Result<SortReport, String> {
    let stats = sorter.sort_with_stats(&mut values);
    let rendered = match format {
        InputFormat::Text => render_listing(&values),
        InputFormat::Json => {
            render_json(&values).map_err(|e| format!("Failed to encode JSON: {}", e))?
        }
    };
    Ok(SortReport {
        values,
        rendered,
        stats,
    })
}

/// Counters as a single-line JSON object, for `--stats --json`.
pub fn stats_json(stats: &SortStats) -> Result<String, String> {
    serde_json::to_string(stats).map_err(|e| format!("Failed to encode stats: {}", e))
}

/// Read `input`, sort it, and write the rendering to `output` if given.
///
/// The written file ends with a newline; `SortReport::rendered` does not.
pub fn run_file(
    input: &Path,
    output: Option<&Path>,
    format: InputFormat,
    sorter: &Sorter,
) -> Result<SortReport, String> {
    let values = read_sequence(input, format).map_err(|e| format!("Invalid input: {}", e))?;
    let report = sort_values(values, format, sorter)?;
    if let Some(output) = output {
        write_report(output, &report)?;
    }
    Ok(report)
}

/// Write `report.rendered` plus a trailing newline, creating parent directories.
pub fn write_report(output: &Path, report: &SortReport) -> Result<(), String> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    fs::write(output, format!("{}\n", report.rendered))
        .map_err(|e| format!("Failed to write {}: {}", output.display(), e))
}
