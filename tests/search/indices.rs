//! Positional two-sum over unsorted input.

use ksum::{two_sum_indices, two_sum_indices_scan};

#[test]
fn classic_example() {
    let nums = [2, 7, 11, 15];
    assert_eq!(two_sum_indices(&nums, 9), Some((0, 1)));
    assert_eq!(two_sum_indices_scan(&nums, 9), Some((0, 1)));
}

#[test]
fn input_is_not_reordered() {
    let nums = vec![15, 11, 7, 2];
    assert_eq!(two_sum_indices(&nums, 9), Some((2, 3)));
    assert_eq!(nums, vec![15, 11, 7, 2]);
}

#[test]
fn returned_pair_is_valid() {
    let nums = [8, -3, 5, 12, -7, 0, 4, 4];
    for target in -10..=20 {
        for found in [two_sum_indices(&nums, target), two_sum_indices_scan(&nums, target)]
            .into_iter()
            .flatten()
        {
            let (i, j) = found;
            assert!(i < j);
            assert_eq!(nums[i] + nums[j], target);
        }
        assert_eq!(
            two_sum_indices(&nums, target).is_some(),
            two_sum_indices_scan(&nums, target).is_some(),
            "strategies disagree on existence for target {}",
            target
        );
    }
}

#[test]
fn duplicate_values_pair_with_each_other() {
    assert_eq!(two_sum_indices(&[4, 1, 4], 8), Some((0, 2)));
    assert_eq!(two_sum_indices_scan(&[4, 1, 4], 8), Some((0, 2)));
}

#[test]
fn repeated_first_value_reports_latest_index() {
    assert_eq!(two_sum_indices(&[1, 1, 5], 6), Some((1, 2)));
    assert_eq!(two_sum_indices(&[2, 9, 2, 2, 7], 9), Some((3, 4)));
    assert_eq!(two_sum_indices_scan(&[2, 9, 2, 2, 7], 9), Some((0, 4)));
}

#[test]
fn no_pair() {
    assert_eq!(two_sum_indices(&[1, 2], 4), None);
    assert_eq!(two_sum_indices_scan(&[2], 4), None);
}
