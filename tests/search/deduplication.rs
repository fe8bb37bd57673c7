//! Duplicate suppression.
//!
//! A value combination must appear at most once no matter how many times its
//! values repeat in the input. The bugs this guards against: skipping one
//! position too few (same outer value chosen twice) or one too many (a valid
//! tuple that reuses a repeated value gets lost).

use super::common::{assert_result_set_valid, expected, multiset_set};
use ksum::n_sum;

#[test]
fn all_zero_four_sum_reported_once() {
    let mut nums = vec![0, 0, 0, 0];
    let tuples = n_sum(&mut nums, 4, 0);

    assert_eq!(tuples.to_vecs(), vec![vec![0, 0, 0, 0]]);
}

#[test]
fn long_run_of_equal_values() {
    let mut nums = vec![0; 50];
    for arity in 2..=6 {
        let tuples = n_sum(&mut nums, arity, 0);
        assert_eq!(tuples.len(), 1, "arity {}", arity);
        assert_eq!(tuples.to_vecs()[0], vec![0; arity]);
    }
}

#[test]
fn repeated_pair_values_pair_once() {
    let mut nums = vec![1, 1, 1, 2, 2, 2];
    let tuples = n_sum(&mut nums, 2, 3);

    assert_eq!(tuples.to_vecs(), vec![vec![1, 2]]);
}

#[test]
fn repeated_value_can_still_fill_two_slots() {
    // -1 appears twice, so {-1, -1, 2} is legitimate and must survive.
    let mut nums = vec![-1, -1, -1, 2, 2];
    let tuples = n_sum(&mut nums, 3, 0);

    assert_eq!(multiset_set(&tuples), expected(&[&[-1, -1, 2]]));
}

#[test]
fn last_occurrence_of_outer_value_is_not_reused() {
    // If the outer skip stopped one short, 1 would be picked as outer twice.
    let mut nums = vec![1, 1, 1, 1, 2, 3];
    let tuples = n_sum(&mut nums, 3, 6);

    assert_eq!(multiset_set(&tuples), expected(&[&[1, 2, 3]]));
    assert_eq!(tuples.len(), 1);
}

#[test]
fn many_duplicates_produce_distinct_multisets() {
    let mut nums = vec![-2, -2, -2, -1, -1, 0, 0, 0, 1, 1, 2, 2, 2];
    for arity in 2..=5 {
        for target in -3..=3 {
            let tuples = n_sum(&mut nums, arity, target);
            assert_result_set_valid(&tuples, arity, target);
        }
    }
}
