// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for batch input parsing.
//!
//! Garbage bytes go through the same JSON path the `batch` command uses. Bad
//! input must come back as an error, never a panic, and anything that parses
//! must solve to verifiable answers.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ksum::{solve_batch, Problem, VerifiedSolution};

fuzz_target!(|data: &[u8]| {
    let Ok(problems) = serde_json::from_slice::<Vec<Problem>>(data) else {
        return;
    };
    // Keep pathological arities from dominating the run.
    if problems.iter().any(|p| p.nums.len() > 24 || p.arity > 6) {
        return;
    }

    let count = problems.len();
    let solutions = solve_batch(problems);
    assert_eq!(solutions.len(), count);

    for solution in solutions {
        VerifiedSolution::new(solution.tuples, solution.arity, solution.target)
            .expect("batch solutions must verify");
    }
});
