// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Many independent problems at once.
//!
//! Each problem owns its input, so there's nothing to share between them.
//! With the `parallel` feature they fan out over rayon's pool; the search
//! inside one problem is unchanged. Output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{n_sum, MAX_ARITY};
use crate::error::{Error, Result};
use crate::types::{Problem, Solution};

/// Reject any problem whose arity would recurse deeper than [`MAX_ARITY`].
pub fn check_arities(problems: &[Problem]) -> Result<()> {
    match problems.iter().position(|p| p.arity > MAX_ARITY) {
        Some(index) => Err(Error::ArityTooLarge {
            index,
            arity: problems[index].arity,
            max: MAX_ARITY,
        }),
        None => Ok(()),
    }
}

/// Solve one problem, consuming its input.
pub fn solve(problem: Problem) -> Solution {
    let Problem {
        mut nums,
        arity,
        target,
    } = problem;
    let tuples = n_sum(&mut nums, arity, target);
    Solution {
        arity,
        target,
        tuples,
    }
}

/// Solve every problem, returning solutions in input order.
#[cfg(feature = "parallel")]
pub fn solve_batch(problems: Vec<Problem>) -> Vec<Solution> {
    problems.into_par_iter().map(solve).collect()
}

/// Solve every problem, returning solutions in input order.
#[cfg(not(feature = "parallel"))]
pub fn solve_batch(problems: Vec<Problem>) -> Vec<Solution> {
    problems.into_iter().map(solve).collect()
}
