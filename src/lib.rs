//! Duplicate-free k-element sum search over integer sequences.
//!
//! Given a sequence, an arity `k` and a target, find every distinct multiset
//! of `k` elements summing to the target. Two-sum, three-sum and four-sum are
//! all the same recursive reduction: fix an outer value, solve `(k-1)`-sum on
//! what's to its right, bottom out in a two-pointer scan.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  search/    │────▶│  reduce.rs   │────▶│   pair.rs    │
//! │  (n_sum,    │     │  (k > 2)     │     │  (k == 2)    │
//! │   sort)     │     └──────────────┘     └──────────────┘
//! └─────────────┘            │                    │
//!        │                   ▼                    ▼
//!        │            ┌─────────────────────────────────┐
//!        │            │            cursor.rs            │
//!        │            │  (next_distinct, prev_distinct) │
//!        │            └─────────────────────────────────┘
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     verify/                          │
//! │  (SortedView, VerifiedSolution, debug contracts)    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! | Property                         | Where it's enforced                  |
//! |----------------------------------|--------------------------------------|
//! | Input sorted before scanning     | `SortedView` construction            |
//! | Every tuple has `k` elements     | `contracts::check_tuple_arity`       |
//! | Every tuple sums to the target   | `contracts::check_tuple_sums`        |
//! | No permutation duplicates        | `contracts::check_no_duplicate_tuples` |
//! | Cursors always make progress     | `kani-proofs`, cursor unit tests     |
//!
//! # Usage
//!
//! ```
//! use ksum::{four_sum, n_sum_sorted_copy};
//!
//! let mut nums = vec![1, 0, -1, 0, -2, 2];
//! let tuples = four_sum(&mut nums, 0);
//! assert_eq!(tuples.len(), 3);
//!
//! // Leave the caller's order alone
//! let original = vec![2, 7, 11, 15];
//! let pairs = n_sum_sorted_copy(&original, 2, 9);
//! assert_eq!(pairs.to_vecs(), vec![vec![2, 7]]);
//! ```

pub mod error;
mod search;
pub mod testing;
mod types;
pub mod verify;

pub use error::{Error, Result};
pub use search::{
    check_arities, four_sum, n_sum, n_sum_sorted_copy, n_sum_target, solve, solve_batch,
    three_sum, two_sum, two_sum_indices, two_sum_indices_scan, MAX_ARITY,
};
pub use types::{Problem, Solution, SumTuple, TupleSet};
pub use verify::{InvariantError, SortedView, VerifiedSolution};
