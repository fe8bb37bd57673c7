// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for k-sum search.
//!
//! Debug-mode assertions over the inputs and outputs of the search. These
//! contracts:
//!
//! 1. Are **zero-cost in release builds** (guarded by `debug_assertions`)
//! 2. Provide **early failure detection** during development
//! 3. Share their checks with `VerifiedSolution`, so the panic and the
//!    `Result` can never disagree
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                    |
//! |------------------------------|---------------------------------------------|
//! | `check_sorted`               | Input is non-decreasing before any scan     |
//! | `check_tuple_arity`          | Every tuple has exactly `k` elements        |
//! | `check_tuple_sums`           | Every tuple sums to the target              |
//! | `check_no_duplicate_tuples`  | No two tuples are permutations of each other|
//!
//! # Usage
//!
//! ```ignore
//! use ksum::verify::contracts::*;
//!
//! // In debug builds, this panics if the slice isn't sorted
//! check_sorted(&nums);
//!
//! // In release builds, this is a no-op
//! ```

use super::types::{find_duplicate, find_unsorted, find_wrong_arity, find_wrong_sum};
use crate::types::TupleSet;

/// Check that a slice is sorted in non-decreasing order.
///
/// # Panics (debug builds only)
/// Panics at the first position where `values[i - 1] > values[i]`.
#[inline]
pub fn check_sorted(values: &[i64]) {
    if cfg!(debug_assertions) {
        if let Some(position) = find_unsorted(values) {
            panic!(
                "Contract violation: Sorted - values[{}] = {} > values[{}] = {}",
                position - 1,
                values[position - 1],
                position,
                values[position]
            );
        }
    }
}

/// Check that every tuple has exactly `arity` elements.
#[inline]
pub fn check_tuple_arity(tuples: &TupleSet, arity: usize) {
    if cfg!(debug_assertions) {
        if let Some(err) = find_wrong_arity(tuples.as_slice(), arity) {
            panic!("Contract violation: Arity - {}", err);
        }
    }
}

/// Check that every tuple sums to the target.
#[inline]
pub fn check_tuple_sums(tuples: &TupleSet, target: i128) {
    if cfg!(debug_assertions) {
        if let Some(err) = find_wrong_sum(tuples.as_slice(), target) {
            panic!("Contract violation: Sum - {}", err);
        }
    }
}

/// Check that no two tuples hold the same multiset of values.
///
/// O(n) expected time over the result set, with one sorted copy per tuple.
#[inline]
pub fn check_no_duplicate_tuples(tuples: &TupleSet) {
    if cfg!(debug_assertions) {
        if let Some(err) = find_duplicate(tuples.as_slice()) {
            panic!("Contract violation: Distinct - {}", err);
        }
    }
}

/// Run every result contract at once.
#[inline]
pub fn check_result_set(tuples: &TupleSet, arity: usize, target: i128) {
    check_tuple_arity(tuples, arity);
    check_tuple_sums(tuples, target);
    check_no_duplicate_tuples(tuples);
}
