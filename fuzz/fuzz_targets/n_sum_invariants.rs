// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the k-sum search.
//!
//! Arbitrary inputs, arities and targets. The search must never panic or
//! overflow, every tuple it reports must check out, and on small inputs the
//! result set must match the brute-force oracle exactly.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ksum::testing::brute_force_multisets;
use ksum::{n_sum, n_sum_sorted_copy, VerifiedSolution};

#[derive(Debug, Arbitrary)]
struct Input {
    nums: Vec<i64>,
    arity: u8,
    target: i64,
    /// Fold values into a narrow band so duplicates and hits are common.
    narrow: bool,
}

fuzz_target!(|input: Input| {
    let arity = usize::from(input.arity % 7);
    // The search is O(n^(k-1)); keep high arities on short inputs.
    let max_len = if arity > 4 { 24 } else { 64 };
    let mut nums: Vec<i64> = input.nums.into_iter().take(max_len).collect();
    let mut target = input.target;
    if input.narrow {
        for v in &mut nums {
            *v %= 8;
        }
        target %= 32;
    }

    let original = nums.clone();
    let copied = n_sum_sorted_copy(&original, arity, target);
    assert_eq!(original, nums, "sorted copy must not touch its input");

    let tuples = n_sum(&mut nums, arity, target);
    assert_eq!(tuples, copied, "both entry points must agree");
    assert!(nums.windows(2).all(|w| w[0] <= w[1]), "input left unsorted");

    // Property 1: every reported tuple is valid and unique
    if let Err(e) = VerifiedSolution::new(tuples.clone(), arity, target) {
        panic!("invalid result for {:?}: {}", original, e);
    }

    // Property 2: nothing missing, nothing extra (oracle is exponential)
    if nums.len() <= 12 {
        let expected = brute_force_multisets(&nums, arity, target);
        let found: std::collections::BTreeSet<Vec<i64>> =
            tuples.multisets().into_iter().collect();
        assert_eq!(found, expected, "mismatch for {:?} k={}", original, arity);
    }
});
