//! Custom cargo commands for the mergesort crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run criterion benchmarks
//!   cargo xtask fuzz      - Run each fuzz target for a minute
//!   cargo xtask kani      - Run Kani model checking proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets in fuzz/Cargo.toml
const FUZZ_TARGETS: &[&str] = &["sort_invariants", "input_parsing"];

/// Seconds per fuzz target
const FUZZ_SECONDS: u32 = 60;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + release tests + Kani)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run every fuzz target for {FUZZ_SECONDS}s (needs cargo-fuzz, nightly)
  kani      Run Kani proofs (needs cargo-kani)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Merge Sort Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract markers present\n");

    println!("[2/5] Running Rust tests (debug, contracts on)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Running Rust tests (release, contracts off)...");
    run_cargo(&["test", "--quiet", "--release"])?;
    println!("✓ Release tests passed\n");

    println!("[5/5] Running Kani proofs...");
    if has_cargo_subcommand("kani") {
        kani()?;
        println!("✓ Kani proofs verified\n");
    } else {
        println!("  (cargo-kani not installed, skipping)\n");
    }

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run each fuzz target for a bounded time
fn fuzz() -> Result<()> {
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);
    for target in FUZZ_TARGETS {
        println!("Fuzzing {} for {}s...", target, FUZZ_SECONDS);
        run_cargo_in(
            &project_root()?,
            &["+nightly", "fuzz", "run", target, "--", &max_time],
        )?;
    }
    println!("\n✓ No fuzz failures");
    Ok(())
}

/// Run Kani proofs in the standalone crate
fn kani() -> Result<()> {
    run_cargo_in(&project_root()?.join("kani-proofs"), &["kani"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn has_cargo_subcommand(name: &str) -> bool {
    Command::new("cargo")
        .args([name, "--version"])
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// The contracts are the debug-build safety net; make sure nobody hollowed them out.
fn check_contract_markers() -> Result<()> {
    let path = project_root()?.join("src/verify/contracts.rs");
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let count = contents.matches("Contract violation:").count();

    if count < 5 {
        bail!(
            "Expected at least 5 contract assertions in {}, found {}. Someone may have removed safety checks!",
            path.display(),
            count
        );
    }

    Ok(())
}
