//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical brute-force oracle so property tests, benches
//! and the fuzz target all compare against the same ground truth.

#![doc(hidden)]

use std::collections::BTreeSet;

use crate::types::Problem;

/// Every distinct multiset of `arity` values from `nums` summing to `target`.
///
/// Enumerates all index combinations, so it's exponential in `arity`. Only
/// use it on small inputs. Multisets come back sorted ascending, and the set
/// itself is ordered, so two oracle results compare with `==`.
pub fn brute_force_multisets(nums: &[i64], arity: usize, target: i64) -> BTreeSet<Vec<i64>> {
    let mut found = BTreeSet::new();
    if arity < 2 || arity > nums.len() {
        return found;
    }

    let mut picked = Vec::with_capacity(arity);
    enumerate(nums, arity, 0, i128::from(target), &mut picked, &mut found);
    found
}

fn enumerate(
    nums: &[i64],
    arity: usize,
    from: usize,
    remaining: i128,
    picked: &mut Vec<i64>,
    found: &mut BTreeSet<Vec<i64>>,
) {
    if picked.len() == arity {
        if remaining == 0 {
            let mut multiset = picked.clone();
            multiset.sort_unstable();
            found.insert(multiset);
        }
        return;
    }

    for index in from..nums.len() {
        picked.push(nums[index]);
        enumerate(
            nums,
            arity,
            index + 1,
            remaining - i128::from(nums[index]),
            picked,
            found,
        );
        picked.pop();
    }
}

/// Create a problem from a slice.
pub fn make_problem(nums: &[i64], arity: usize, target: i64) -> Problem {
    Problem {
        nums: nums.to_vec(),
        arity,
        target,
    }
}
