//! Known-answer tests for the k-sum family.
//!
//! Each case pins both the result multisets and, where the order is part of
//! the contract, the exact discovery order of tuples and of values inside
//! each tuple.

use super::common::{
    assert_result_set_valid, expected, multiset_set, FOUR_SUM_NUMS, THREE_SUM_NUMS, TWO_SUM_NUMS,
};
use ksum::{four_sum, n_sum, n_sum_target, three_sum, two_sum, SortedView};

#[test]
fn two_sum_finds_the_single_pair() {
    let mut nums = TWO_SUM_NUMS.to_vec();
    let tuples = two_sum(&mut nums, 9);

    assert_eq!(tuples.to_vecs(), vec![vec![2, 7]]);
}

#[test]
fn three_sum_reports_tuples_in_discovery_order() {
    let mut nums = THREE_SUM_NUMS.to_vec();
    let tuples = three_sum(&mut nums, 0);

    // Pair first, outer element last.
    assert_eq!(tuples.to_vecs(), vec![vec![-1, 2, -1], vec![0, 1, -1]]);
    assert_eq!(multiset_set(&tuples), expected(&[&[-1, -1, 2], &[-1, 0, 1]]));
}

#[test]
fn four_sum_finds_three_quadruples() {
    let mut nums = FOUR_SUM_NUMS.to_vec();
    let tuples = four_sum(&mut nums, 0);

    assert_eq!(tuples.len(), 3);
    assert_eq!(
        multiset_set(&tuples),
        expected(&[&[-2, -1, 1, 2], &[-2, 0, 0, 2], &[-1, 0, 0, 1]])
    );
    assert_result_set_valid(&tuples, 4, 0);
}

#[test]
fn four_sum_nonzero_target() {
    let mut nums = vec![2, 2, 2, 2, 2];
    let tuples = four_sum(&mut nums, 8);

    assert_eq!(tuples.to_vecs(), vec![vec![2, 2, 2, 2]]);
}

#[test]
fn n_sum_matches_fixed_arity_wrappers() {
    let mut a = FOUR_SUM_NUMS.to_vec();
    let mut b = FOUR_SUM_NUMS.to_vec();
    assert_eq!(n_sum(&mut a, 4, 0), four_sum(&mut b, 0));

    let mut a = THREE_SUM_NUMS.to_vec();
    let mut b = THREE_SUM_NUMS.to_vec();
    assert_eq!(n_sum(&mut a, 3, 0), three_sum(&mut b, 0));
}

#[test]
fn five_sum_over_symmetric_range() {
    let mut nums: Vec<i64> = (-4..=4).collect();
    let tuples = n_sum(&mut nums, 5, 0);

    assert!(!tuples.is_empty());
    assert_result_set_valid(&tuples, 5, 0);
    assert!(multiset_set(&tuples).contains(&vec![-4, -1, 0, 1, 4]));
}

#[test]
fn sorted_view_core_from_offset() {
    let sorted = [-4, -1, -1, 0, 1, 2];
    let view = SortedView::new(&sorted).unwrap();

    // From offset 1 the -4 is out of reach.
    let tuples = n_sum_target(view, 3, 1, 0);
    assert_eq!(tuples.to_vecs(), vec![vec![-1, 2, -1], vec![0, 1, -1]]);

    let tuples = n_sum_target(view, 3, 0, -3);
    assert_result_set_valid(&tuples, 3, -3);
    assert_eq!(multiset_set(&tuples), expected(&[&[-4, -1, 2], &[-4, 0, 1]]));
}

#[test]
fn every_tuple_sums_to_target() {
    let mut nums = vec![5, -3, 8, 0, 0, 2, -7, 4, 4, -1, 3, 9, -6];
    for arity in 2..=5 {
        for target in -6..=6 {
            let tuples = n_sum(&mut nums, arity, target);
            assert_result_set_valid(&tuples, arity, target);
        }
    }
}
