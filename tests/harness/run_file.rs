//! File-to-file sorting.

use mergesort::harness::{run_file, stats_json};
use mergesort::{InputFormat, Sorter, Strategy};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_run_file_text_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, "12 11 13\n5, 6, 7\n").unwrap();

    let report = run_file(&input, None, InputFormat::Text, &Sorter::new()).unwrap();

    assert_eq!(report.values, vec![5, 6, 7, 11, 12, 13]);
    assert_eq!(report.rendered, "5 6 7 11 12 13");
}

#[test]
fn test_run_file_writes_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    let output = temp_dir.path().join("nested").join("sorted.txt");
    fs::write(&input, "[3, 7, 3, 1, 9, 7, 2]").unwrap();

    let result = run_file(&input, Some(&output), InputFormat::Text, &Sorter::new());

    assert!(result.is_ok(), "Sort should succeed: {:?}", result.err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "1 2 3 3 7 7 9\n");
}

#[test]
fn test_run_file_json_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.json");
    let output = temp_dir.path().join("output.json");
    fs::write(&input, "[5, 4, 3, 2, 1]").unwrap();

    let sorter = Sorter::with_strategy(Strategy::BottomUp);
    let report = run_file(&input, Some(&output), InputFormat::Json, &sorter).unwrap();

    assert_eq!(report.rendered, "[1,2,3,4,5]");
    let written: Vec<i64> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_run_file_json_stats() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.json");
    fs::write(&input, "[5, 4, 3, 2, 1]").unwrap();

    let sorter = Sorter::with_strategy(Strategy::BottomUp);
    let report = run_file(&input, None, InputFormat::Json, &sorter).unwrap();
    let json = stats_json(&report.stats).unwrap();
    let stats: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(stats["strategy"], "bottom-up");
    assert_eq!(stats["len"], 5);
    assert_eq!(stats["merges"], 4);
    assert_eq!(stats["max_depth"], 3);
}

#[test]
fn test_run_file_empty_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("empty.txt");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "").unwrap();

    let report = run_file(&input, Some(&output), InputFormat::Text, &Sorter::new()).unwrap();

    assert!(report.values.is_empty());
    assert_eq!(report.stats.merges, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "\n");
}

#[test]
fn test_run_file_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("does-not-exist.txt");

    let result = run_file(&input, None, InputFormat::Text, &Sorter::new());

    assert!(result.is_err(), "Sort should fail without input");
    let err = result.unwrap_err();
    assert!(
        err.contains("Invalid input") && err.contains("failed to read"),
        "Error should mention the read failure: {}",
        err
    );
}

#[test]
fn test_run_file_bad_token() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "1 2 three").unwrap();

    let result = run_file(&input, Some(&output), InputFormat::Text, &Sorter::new());

    let err = result.unwrap_err();
    assert!(err.contains("'three'"), "Error should name the token: {}", err);
    assert!(!output.exists(), "No output should be written on error");
}

#[test]
fn test_run_file_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.json");
    fs::write(&input, "1 2 3").unwrap();

    let err = run_file(&input, None, InputFormat::Json, &Sorter::new()).unwrap_err();

    assert!(err.contains("JSON"), "Error should mention JSON: {}", err);
}
