// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two-pointer scan: the `k == 2` base case.
//!
//! Cursors start at both ends of a sorted view and converge. A sum that's too
//! small can only grow by moving `left` right; too large can only shrink by
//! moving `right` left. Every branch moves at least one cursor past a whole
//! run of equal values, so the window shrinks on every iteration and the same
//! pair is never recorded twice.

use std::cmp::Ordering;

use super::cursor::{next_distinct, prev_distinct};
use crate::types::{SumTuple, TupleSet};
use crate::verify::SortedView;

/// Every distinct value pair `(a, b)`, `a` left of `b`, with `a + b == target`.
///
/// `arity` is the length the tuples will eventually grow to; it only sizes
/// the allocation. Views shorter than two elements return an empty set.
pub(crate) fn pair_scan(view: SortedView<'_>, target: i128, arity: usize) -> TupleSet {
    let values = view.as_slice();
    let mut found = TupleSet::new();
    if values.len() < 2 {
        return found;
    }

    let mut left = 0;
    let mut right = values.len() - 1;

    while left < right {
        let (left_value, right_value) = (values[left], values[right]);
        let sum = i128::from(left_value) + i128::from(right_value);

        match sum.cmp(&target) {
            Ordering::Less => left = next_distinct(values, left, right),
            Ordering::Greater => right = prev_distinct(values, right, left),
            Ordering::Equal => {
                found.push(SumTuple::pair(left_value, right_value, arity));
                left = next_distinct(values, left, right);
                right = prev_distinct(values, right, left);
            }
        }
    }

    found
}
