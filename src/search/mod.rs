// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! K-sum search: every distinct `k`-tuple of a sequence summing to a target.
//!
//! The entry points sort once, then hand a `SortedView` to a single recursive
//! reducer parameterized by the remaining arity. There are no separate
//! three-sum or four-sum algorithms; `three_sum` and `four_sum` are the same
//! reduction with `k` fixed.
//!
//! All arithmetic on sums and reduced targets is done in `i128`, so no input
//! of `i64` values can overflow the search.

mod batch;
mod cursor;
mod indices;
mod pair;
mod reduce;

pub use batch::{check_arities, solve, solve_batch};
pub use indices::{two_sum_indices, two_sum_indices_scan};

use tracing::debug;

use crate::types::TupleSet;
use crate::verify::{contracts, SortedView};

/// Largest arity accepted from untrusted input (`batch` JSON, CLI args).
///
/// The reduction recurses once per arity level, so `k` bounds the stack
/// depth. This keeps a single search comfortably inside a 2 MiB thread
/// stack, which is what rayon workers get.
pub const MAX_ARITY: usize = 256;

/// Find every distinct `arity`-tuple of `nums` summing to `target`.
///
/// **Sorts `nums` in place** before searching. Use [`n_sum_sorted_copy`] if
/// the caller's order must be preserved.
///
/// Tuples come back in discovery order, and each tuple's elements are in
/// discovery order too (pair first, outermost element last). An arity below 2
/// or above `nums.len()` gives an empty set.
///
/// Recursion depth is `arity`. Callers taking arities from outside should
/// reject anything above [`MAX_ARITY`] first (see [`check_arities`]).
///
/// # Example
///
/// ```
/// let mut nums = vec![-1, 0, 1, 2, -1, -4];
/// let tuples = ksum::n_sum(&mut nums, 3, 0);
///
/// assert_eq!(tuples.to_vecs(), vec![vec![-1, 2, -1], vec![0, 1, -1]]);
/// assert_eq!(nums, vec![-4, -1, -1, 0, 1, 2]);
/// ```
pub fn n_sum(nums: &mut [i64], arity: usize, target: i64) -> TupleSet {
    nums.sort_unstable();
    let view = SortedView::from_sorted(nums);
    let tuples = n_sum_target(view, arity, 0, target);

    debug!(
        arity,
        target,
        len = nums.len(),
        found = tuples.len(),
        "n-sum search finished"
    );
    tuples
}

/// Like [`n_sum`], but sorts a private copy and leaves `nums` untouched.
pub fn n_sum_sorted_copy(nums: &[i64], arity: usize, target: i64) -> TupleSet {
    let mut owned = nums.to_vec();
    n_sum(&mut owned, arity, target)
}

/// Search an already-sorted view, starting at offset `start`.
///
/// This is the recursive core without the sort. `start` past the end of the
/// view, or an arity the remaining values can't satisfy, gives an empty set.
pub fn n_sum_target(view: SortedView<'_>, arity: usize, start: usize, target: i64) -> TupleSet {
    let target = i128::from(target);
    let tuples = reduce::reduce(view.tail(start), arity, target, arity);

    contracts::check_result_set(&tuples, arity, target);
    tuples
}

/// Distinct value pairs summing to `target`. Sorts `nums` in place.
pub fn two_sum(nums: &mut [i64], target: i64) -> TupleSet {
    n_sum(nums, 2, target)
}

/// Distinct value triples summing to `target`. Sorts `nums` in place.
pub fn three_sum(nums: &mut [i64], target: i64) -> TupleSet {
    n_sum(nums, 3, target)
}

/// Distinct value quadruples summing to `target`. Sorts `nums` in place.
pub fn four_sum(nums: &mut [i64], target: i64) -> TupleSet {
    n_sum(nums, 4, target)
}
