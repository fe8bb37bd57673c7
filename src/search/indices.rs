// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positional two-sum: which two indices hold values summing to the target?
//!
//! Unlike the value-tuple search this never sorts, so the answer refers to
//! the caller's original positions. Two strategies that can disagree on
//! *which* pair they report when several exist:
//!
//! - `two_sum_indices` (hash map, O(n)): the pair whose second index is
//!   smallest, paired with the latest matching index before it.
//! - `two_sum_indices_scan` (enumeration, O(n²), no allocation): the
//!   lexicographically smallest `(i, j)`.
//!
//! Both return `i < j` and agree on whether any pair exists.

use std::collections::HashMap;

/// Hash-map two-sum over unsorted input.
pub fn two_sum_indices(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let target = i128::from(target);
    // Each value maps to the last index it was seen at.
    let mut last_seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (index, &value) in nums.iter().enumerate() {
        let wanted = target - i128::from(value);
        if let Ok(wanted) = i64::try_from(wanted) {
            if let Some(&earlier) = last_seen.get(&wanted) {
                return Some((earlier, index));
            }
        }
        last_seen.insert(value, index);
    }

    None
}

/// Enumeration two-sum over unsorted input.
pub fn two_sum_indices_scan(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let target = i128::from(target);
    for i in 0..nums.len() {
        for j in i + 1..nums.len() {
            if i128::from(nums[i]) + i128::from(nums[j]) == target {
                return Some((i, j));
            }
        }
    }
    None
}
