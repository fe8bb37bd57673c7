//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::BTreeSet;

use ksum::TupleSet;

// Re-export canonical test utilities from ksum::testing
pub use ksum::testing::{brute_force_multisets, make_problem};

// ============================================================================
// FIXTURES
// ============================================================================

/// The two-sum example: one pair, no repeats.
pub const TWO_SUM_NUMS: &[i64] = &[2, 7, 11, 15];

/// The three-sum example: a repeated -1 that must not produce two `{-1,0,1}`.
pub const THREE_SUM_NUMS: &[i64] = &[-1, 0, 1, 2, -1, -4];

/// The four-sum example: a repeated 0 used twice inside one tuple.
pub const FOUR_SUM_NUMS: &[i64] = &[1, 0, -1, 0, -2, 2];

// ============================================================================
// ASSERTIONS
// ============================================================================

/// The result set as a set of sorted multisets.
pub fn multiset_set(tuples: &TupleSet) -> BTreeSet<Vec<i64>> {
    tuples.multisets().into_iter().collect()
}

/// Assert every structural invariant of a result set.
///
/// - every tuple has `arity` elements
/// - every tuple sums to `target`
/// - no two tuples are permutations of each other
pub fn assert_result_set_valid(tuples: &TupleSet, arity: usize, target: i64) {
    for (i, tuple) in tuples.iter().enumerate() {
        assert_eq!(
            tuple.len(),
            arity,
            "tuple {} ({}) has wrong arity",
            i,
            tuple
        );
        assert_eq!(
            tuple.sum(),
            i128::from(target),
            "tuple {} ({}) has wrong sum",
            i,
            tuple
        );
    }

    let unique = multiset_set(tuples);
    assert_eq!(
        unique.len(),
        tuples.len(),
        "result set has permutation duplicates: {:?}",
        tuples.to_vecs()
    );
}

/// Build the expected multiset set from literal tuples.
pub fn expected(tuples: &[&[i64]]) -> BTreeSet<Vec<i64>> {
    tuples
        .iter()
        .map(|t| {
            let mut v = t.to_vec();
            v.sort_unstable();
            v
        })
        .collect()
}
