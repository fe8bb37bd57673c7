// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the index two-sum strategies.
//!
//! Both must return in-bounds, distinct, ordered indices whose values hit the
//! target, and they must agree on whether any pair exists.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ksum::{two_sum_indices, two_sum_indices_scan};

fuzz_target!(|input: (Vec<i64>, i64)| {
    let (nums, target) = input;
    let nums: Vec<i64> = nums.into_iter().take(256).collect();

    let by_hash = two_sum_indices(&nums, target);
    let by_scan = two_sum_indices_scan(&nums, target);
    assert_eq!(by_hash.is_some(), by_scan.is_some());

    for (i, j) in by_hash.into_iter().chain(by_scan) {
        assert!(i < j && j < nums.len(), "bad indices ({}, {})", i, j);
        assert_eq!(
            i128::from(nums[i]) + i128::from(nums[j]),
            i128::from(target)
        );
    }
});
