//! Differential tests: the two-pointer reduction against brute force.
//!
//! The oracle enumerates every index combination, so it's obviously correct
//! and hopelessly slow. On small inputs the two must produce exactly the same
//! set of multisets, which pins down both directions: nothing missing and
//! nothing extra.

use super::common::{brute_force_multisets, multiset_set};
use ksum::{n_sum, two_sum_indices, two_sum_indices_scan};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_matches_brute_force(
        nums in prop::collection::vec(-6i64..=6, 0..12),
        arity in 2usize..=5,
        target in -12i64..=12,
    ) {
        let expected = brute_force_multisets(&nums, arity, target);
        let mut nums = nums;
        let found = n_sum(&mut nums, arity, target);

        prop_assert_eq!(found.len(), expected.len());
        prop_assert_eq!(multiset_set(&found), expected);
    }

    /// For k == 2 the result is exactly the value-deduplicated set of pairs
    /// (nums[i], nums[j]) with i < j.
    #[test]
    fn prop_pairs_are_exactly_index_pairs(
        nums in prop::collection::vec(-10i64..=10, 0..20),
        target in -20i64..=20,
    ) {
        let mut expected = std::collections::BTreeSet::new();
        for i in 0..nums.len() {
            for j in i + 1..nums.len() {
                if nums[i] + nums[j] == target {
                    expected.insert(vec![nums[i].min(nums[j]), nums[i].max(nums[j])]);
                }
            }
        }

        let mut sorted = nums;
        let found = n_sum(&mut sorted, 2, target);
        prop_assert_eq!(multiset_set(&found), expected);

        // Pairs come out smaller value first.
        for tuple in &found {
            prop_assert!(tuple.values()[0] <= tuple.values()[1]);
        }
    }

    /// Index strategies agree with the value search on whether a pair exists.
    #[test]
    fn prop_index_strategies_agree_on_existence(
        nums in prop::collection::vec(-10i64..=10, 0..20),
        target in -20i64..=20,
    ) {
        let by_hash = two_sum_indices(&nums, target);
        let by_scan = two_sum_indices_scan(&nums, target);
        let exists = !n_sum(&mut nums.clone(), 2, target).is_empty();

        prop_assert_eq!(by_hash.is_some(), exists);
        prop_assert_eq!(by_scan.is_some(), exists);

        if let Some((i, j)) = by_scan {
            // Lexicographically smallest pair.
            for a in 0..nums.len() {
                for b in a + 1..nums.len() {
                    if (a, b) < (i, j) {
                        prop_assert_ne!(nums[a] + nums[b], target);
                    }
                }
            }
        }
    }
}
