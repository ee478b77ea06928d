// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::io::Read;
use std::path::Path;

use mergesort::harness::{run_demo, run_file, sort_values, stats_json, write_report, SortReport};
use mergesort::input::{parse, InputFormat};
use mergesort::{Sorter, Strategy};

mod cli;
use cli::display::{
    double_footer, double_header, listing, row, section_bot, section_top, stats_line,
    strategy_badge, title,
};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo { strategy, stats } => {
            print_demo(strategy, stats);
            Ok(())
        }
        Commands::Sort {
            values,
            input,
            output,
            json,
            strategy,
            stats,
        } => run_sort(values, input, output, json, strategy, stats),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Demo mode: every sample array, before and after.
fn print_demo(strategy: Strategy, show_stats: bool) {
    let sorter = Sorter::with_strategy(strategy);

    double_header();
    title("Merge Sort Implementation");
    double_footer();
    println!();

    for (i, outcome) in run_demo(&sorter).iter().enumerate() {
        section_top(&format!("Test Case {} - {}", i + 1, outcome.name));
        row(&format!(" Original array: {}", listing(&outcome.original)));
        row(&format!(" Sorted array:   {}", listing(&outcome.sorted)));
        if show_stats {
            row(&format!(" {}", stats_line(&outcome.stats)));
        }
        section_bot();
    }

    println!();
    println!("Strategy: {}", strategy_badge(strategy));
}

/// Sort mode: arguments, file, or stdin in; listing out.
fn run_sort(
    values: Vec<i64>,
    input: Option<String>,
    output: Option<String>,
    json: bool,
    strategy: Strategy,
    show_stats: bool,
) -> Result<(), String> {
    let sorter = Sorter::with_strategy(strategy);
    let format = if json {
        InputFormat::Json
    } else {
        InputFormat::Text
    };
    let output = output.as_deref().map(Path::new);

    let report: SortReport = if let Some(input) = input.as_deref() {
        run_file(Path::new(input), output, format, &sorter)?
    } else {
        let values = if values.is_empty() {
            read_stdin(format)?
        } else {
            values
        };
        let report = sort_values(values, format, &sorter)?;
        if let Some(output) = output {
            write_report(output, &report)?;
        }
        report
    };

    match output {
        Some(path) => eprintln!(
            "✓ Sorted {} values into {}",
            report.values.len(),
            path.display()
        ),
        None => println!("{}", report.rendered),
    }

    if show_stats {
        if json {
            eprintln!("{}", stats_json(&report.stats)?);
        } else {
            eprintln!("{}", stats_line(&report.stats));
        }
    }

    Ok(())
}

fn read_stdin(format: InputFormat) -> Result<Vec<i64>, String> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;
    parse(&raw, format).map_err(|e| format!("Invalid input: {}", e))
}
