//! Degenerate inputs: nothing here is an error, everything is an empty set.

use ksum::{n_sum, n_sum_sorted_copy, n_sum_target, SortedView};

#[test]
fn empty_input() {
    let mut nums: Vec<i64> = Vec::new();
    for arity in 0..=4 {
        assert!(n_sum(&mut nums, arity, 0).is_empty());
    }
}

#[test]
fn single_element() {
    let mut nums = vec![5];
    assert!(n_sum(&mut nums, 2, 5).is_empty());
    assert!(n_sum(&mut nums, 2, 10).is_empty());
}

#[test]
fn arity_below_two() {
    let mut nums = vec![1, 2, 3];
    assert!(n_sum(&mut nums, 0, 0).is_empty());
    assert!(n_sum(&mut nums, 1, 2).is_empty());
}

#[test]
fn arity_larger_than_input() {
    let mut nums = vec![1, 2, 3];
    assert!(n_sum(&mut nums, 4, 6).is_empty());
    assert!(n_sum(&mut nums, 64, 6).is_empty());
}

#[test]
fn arity_equal_to_input_length() {
    let mut nums = vec![3, 1, 2];
    assert_eq!(n_sum(&mut nums, 3, 6).len(), 1);
    assert!(n_sum(&mut nums, 3, 5).is_empty());
}

#[test]
fn no_solution() {
    let mut nums = vec![1, 2, 3, 4];
    assert!(n_sum(&mut nums, 2, 100).is_empty());
    assert!(n_sum(&mut nums, 3, -100).is_empty());
}

#[test]
fn start_equal_to_end() {
    let sorted = [1, 2, 3];
    let view = SortedView::new(&sorted).unwrap();
    assert!(n_sum_target(view, 2, sorted.len(), 0).is_empty());
}

#[test]
fn offset_leaves_too_few_values() {
    let sorted = [1, 2, 3, 4];
    let view = SortedView::new(&sorted).unwrap();
    assert!(n_sum_target(view, 3, 2, 7).is_empty());
    assert_eq!(n_sum_target(view, 2, 2, 7).to_vecs(), vec![vec![3, 4]]);
}

#[test]
fn extreme_values_do_not_overflow() {
    let mut nums = vec![i64::MIN, i64::MIN, i64::MAX, i64::MAX];
    let tuples = n_sum(&mut nums, 4, -2);
    assert_eq!(tuples.len(), 1);

    let mut nums = vec![i64::MAX; 5];
    assert!(n_sum(&mut nums, 3, i64::MAX).is_empty());
}

#[test]
fn sorted_copy_matches_in_place() {
    let original = vec![9, -3, 4, 4, -1, 0, 7, -8];
    let copied = n_sum_sorted_copy(&original, 3, 0);
    assert_eq!(original, vec![9, -3, 4, 4, -1, 0, 7, -8]);

    let mut in_place = original.clone();
    let sorted_result = n_sum(&mut in_place, 3, 0);
    assert_eq!(copied, sorted_result);

    let mut expected_order = original;
    expected_order.sort_unstable();
    assert_eq!(in_place, expected_order);
}

#[test]
fn unsorted_view_is_rejected() {
    assert!(SortedView::new(&[3, 2, 1]).is_err());
}
