// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the ksum command-line interface.
//!
//! Three subcommands: `solve` for a single k-sum problem given on the command
//! line, `batch` for a JSON array of problems, and `pair` for the positional
//! two-sum. Output is a boxed text report or JSON; `KSUM_FORMAT` sets the
//! default so scripts don't have to repeat `--format json`.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "ksum",
    about = "Find every distinct k-tuple of integers summing to a target",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// How results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed, colored report for terminals
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find every distinct k-tuple of NUMS summing to TARGET
    #[command(allow_negative_numbers = true)]
    Solve {
        /// Tuple size (2 = two-sum, 3 = three-sum, ...)
        #[arg(short = 'k', long, default_value = "2")]
        arity: usize,

        /// Sum every tuple must reach
        #[arg(short, long)]
        target: i64,

        /// Output format
        #[arg(long, value_enum, env = "KSUM_FORMAT", default_value = "text")]
        format: OutputFormat,

        /// Re-check arity, sums and duplicates before printing
        #[arg(long)]
        verify: bool,

        /// Input values, in any order
        #[arg(required = true)]
        nums: Vec<i64>,
    },

    /// Solve a JSON array of problems ({"nums": [...], "arity": k, "target": t})
    Batch {
        /// Path to the JSON file, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Output format
        #[arg(long, value_enum, env = "KSUM_FORMAT", default_value = "text")]
        format: OutputFormat,

        /// Re-check every solution before printing
        #[arg(long)]
        verify: bool,
    },

    /// Find the positions of two values summing to TARGET
    #[command(allow_negative_numbers = true)]
    Pair {
        /// Sum the two values must reach
        #[arg(short, long)]
        target: i64,

        /// Use the O(n²) enumeration instead of the hash map
        ///
        /// The enumeration reports the lexicographically first pair of
        /// positions; the hash map reports the pair that completes first.
        #[arg(long)]
        scan: bool,

        /// Output format
        #[arg(long, value_enum, env = "KSUM_FORMAT", default_value = "text")]
        format: OutputFormat,

        /// Input values, in their original order
        #[arg(required = true)]
        nums: Vec<i64>,
    },
}
