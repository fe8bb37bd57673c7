// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The n-ary reduction: `k`-sum in terms of `(k-1)`-sum.
//!
//! Fix each distinct outer value in turn, solve the smaller problem on
//! everything to its right with the target reduced by that value, and append
//! the outer value to every sub-tuple. At `k == 2` the pair scan takes over.
//!
//! Only the first occurrence of a run of equal outer values is used: later
//! occurrences would see a strict subset of the same suffix and produce
//! nothing new.

use tracing::trace;

use super::cursor::next_distinct;
use super::pair::pair_scan;
use crate::types::TupleSet;
use crate::verify::SortedView;

/// Every distinct `arity`-combination of `view` summing to `target`.
///
/// `arity < 2` or `arity > view.len()` gives an empty set. `capacity` is the
/// arity of the top-level call, used to size each tuple once.
pub(crate) fn reduce(
    view: SortedView<'_>,
    arity: usize,
    target: i128,
    capacity: usize,
) -> TupleSet {
    if arity < 2 || arity > view.len() {
        return TupleSet::new();
    }
    if arity == 2 {
        return pair_scan(view, target, capacity);
    }

    let values = view.as_slice();
    trace!(arity, len = values.len(), "reducing");

    let mut found = TupleSet::new();
    let mut outer = 0;

    // At least `arity - 1` values must remain to the right of `outer`.
    while outer + arity <= values.len() {
        let value = values[outer];
        let rest = reduce(
            view.tail(outer + 1),
            arity - 1,
            target - i128::from(value),
            capacity,
        );
        for mut tuple in rest {
            tuple.push_outer(value);
            found.push(tuple);
        }

        outer = next_distinct(values, outer, values.len());
    }

    found
}
