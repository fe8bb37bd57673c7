// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use ksum::{
    check_arities, n_sum, solve_batch, two_sum_indices, two_sum_indices_scan, Error, Problem,
    Solution, VerifiedSolution, MAX_ARITY,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display;
use cli::{Cli, Commands, OutputFormat};

/// JSON shape of the `pair` subcommand's answer.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PairReport {
    target: i64,
    indices: Option<(usize, usize)>,
    values: Option<(i64, i64)>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve {
            arity,
            target,
            format,
            verify,
            nums,
        } => run_solve(nums, arity, target, format, verify),
        Commands::Batch {
            input,
            format,
            verify,
        } => run_batch(&input, format, verify),
        Commands::Pair {
            target,
            scan,
            format,
            nums,
        } => run_pair(&nums, target, scan, format),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so JSON on stdout stays clean. `RUST_LOG` overrides the
/// default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_solve(
    mut nums: Vec<i64>,
    arity: usize,
    target: i64,
    format: OutputFormat,
    verify: bool,
) -> Result<(), Error> {
    if arity > MAX_ARITY {
        return Err(Error::ArityTooLarge {
            index: 0,
            arity,
            max: MAX_ARITY,
        });
    }

    let len = nums.len();
    let started = Instant::now();
    let tuples = n_sum(&mut nums, arity, target);
    let took = started.elapsed();

    let tuples = if verify {
        VerifiedSolution::new(tuples, arity, target)?.into_tuples()
    } else {
        tuples
    };

    let solution = Solution {
        arity,
        target,
        tuples,
    };
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solution)?),
        OutputFormat::Text => {
            print_solution(&solution, len);
            display::section_mid("STATS");
            display::row(&format!(
                " {} from {} in {}",
                display::count(solution.tuples.len(), "tuple"),
                display::count(len, "value"),
                display::elapsed(took)
            ));
            display::section_bot();
        }
    }
    Ok(())
}

fn run_batch(input: &str, format: OutputFormat, verify: bool) -> Result<(), Error> {
    let raw = read_input(input)?;
    let problems: Vec<Problem> = serde_json::from_str(&raw)?;
    check_arities(&problems)?;
    let sizes: Vec<usize> = problems.iter().map(|p| p.nums.len()).collect();
    info!(problems = problems.len(), "solving batch");

    let started = Instant::now();
    let solutions = solve_batch(problems);
    let took = started.elapsed();

    if verify {
        for solution in &solutions {
            VerifiedSolution::new(solution.tuples.clone(), solution.arity, solution.target)?;
        }
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solutions)?),
        OutputFormat::Text => {
            for (solution, len) in solutions.iter().zip(&sizes) {
                print_solution(solution, *len);
                display::section_bot();
            }
            let total: usize = solutions.iter().map(|s| s.tuples.len()).sum();
            println!(
                "{} across {} in {}",
                display::count(total, "tuple"),
                display::count(solutions.len(), "problem"),
                display::elapsed(took)
            );
        }
    }
    Ok(())
}

fn run_pair(nums: &[i64], target: i64, scan: bool, format: OutputFormat) -> Result<(), Error> {
    let indices = if scan {
        two_sum_indices_scan(nums, target)
    } else {
        two_sum_indices(nums, target)
    };
    let report = PairReport {
        target,
        indices,
        values: indices.map(|(i, j)| (nums[i], nums[j])),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            display::section_top(&format!("PAIR target {}", target));
            match (report.indices, report.values) {
                (Some((i, j)), Some((a, b))) => display::row(&format!(
                    " nums[{}] + nums[{}] = {} + {}",
                    i,
                    j,
                    display::value(a),
                    display::value(b)
                )),
                _ => display::row(" no pair"),
            }
            display::section_bot();
        }
    }
    Ok(())
}

/// Box header plus one row per tuple. The caller closes the box.
fn print_solution(solution: &Solution, len: usize) {
    display::section_top(&format!(
        "{} target {} ({})",
        display::arity_name(solution.arity).to_uppercase(),
        solution.target,
        display::count(len, "value")
    ));
    if solution.tuples.is_empty() {
        display::row(" no tuples");
    }
    for tuple in &solution.tuples {
        display::row(&format!(" {}", display::tuple(tuple)));
    }
}

fn read_input(input: &str) -> Result<String, Error> {
    if input == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(Error::Stdin)?;
        Ok(raw)
    } else {
        fs::read_to_string(input).map_err(|source| Error::Read {
            path: PathBuf::from(input),
            source,
        })
    }
}
