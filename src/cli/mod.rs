// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the mergesort command-line interface.
//!
//! Two subcommands: `demo` sorts the built-in sample arrays and prints them
//! side by side, `sort` sorts integers given as arguments, in a file, or on
//! stdin and prints the listing.

pub mod display;

use clap::{Parser, Subcommand};
use mergesort::Strategy;

#[derive(Parser)]
#[command(
    name = "mergesort",
    about = "Stable merge sort over integer sequences",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort the built-in sample arrays and show before/after
    Demo {
        /// Merge schedule: top-down (recursive) or bottom-up (iterative)
        #[arg(long, default_value = "top-down")]
        strategy: Strategy,

        /// Show merge and comparison counts for each array
        #[arg(long)]
        stats: bool,
    },

    /// Sort integers and print them space-separated
    Sort {
        /// Integers to sort. If omitted, reads --input or stdin
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Read the sequence from a file instead of arguments
        #[arg(short, long, conflicts_with = "values")]
        input: Option<String>,

        /// Write the sorted sequence to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Read and write JSON arrays instead of whitespace/comma separated text
        #[arg(long)]
        json: bool,

        /// Merge schedule: top-down (recursive) or bottom-up (iterative)
        #[arg(long, default_value = "top-down")]
        strategy: Strategy,

        /// Print merge and comparison counts to stderr
        #[arg(long)]
        stats: bool,
    },
}
