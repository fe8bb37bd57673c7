// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make invalid states unrepresentable.
//!
//! Instead of hoping the caller remembered to sort, wrap the slice in a
//! `SortedView`. It checks the ordering once at construction and guarantees it
//! forever after, which is exactly what the two-pointer scan needs.
//!
//! | Type               | What's Guaranteed                                  |
//! |--------------------|----------------------------------------------------|
//! | `SortedView`       | Values are non-decreasing                          |
//! | `VerifiedSolution` | Right arity, right sum, no permutation duplicates  |
//!
//! # Example
//!
//! ```
//! use ksum::{n_sum_target, SortedView};
//!
//! let sorted = [-4, -1, -1, 0, 1, 2];
//! let view = SortedView::new(&sorted)?;
//! let tuples = n_sum_target(view, 3, 0, 0);
//! assert_eq!(tuples.len(), 2);
//! # Ok::<(), ksum::InvariantError>(())
//! ```

use crate::types::{SumTuple, TupleSet};
use std::collections::HashMap;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// `values[position - 1] > values[position]`.
    Unsorted { position: usize },
    /// A tuple doesn't have exactly `expected` elements.
    WrongArity {
        index: usize,
        expected: usize,
        actual: usize,
    },
    /// A tuple doesn't sum to the target.
    WrongSum {
        index: usize,
        expected: i128,
        actual: i128,
    },
    /// Two tuples hold the same multiset of values.
    DuplicateTuple { first: usize, second: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::Unsorted { position } => {
                write!(f, "values not sorted at position {}", position)
            }
            InvariantError::WrongArity {
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "tuple {} has {} elements, expected {}",
                    index, actual, expected
                )
            }
            InvariantError::WrongSum {
                index,
                expected,
                actual,
            } => {
                write!(f, "tuple {} sums to {}, expected {}", index, actual, expected)
            }
            InvariantError::DuplicateTuple { first, second } => {
                write!(
                    f,
                    "tuples {} and {} are permutations of each other",
                    first, second
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

// =============================================================================
// CHECKS
// =============================================================================

/// First position where the slice decreases, if any.
pub(crate) fn find_unsorted(values: &[i64]) -> Option<usize> {
    values
        .windows(2)
        .position(|w| w[0] > w[1])
        .map(|position| position + 1)
}

pub(crate) fn find_wrong_arity(tuples: &[SumTuple], arity: usize) -> Option<InvariantError> {
    tuples
        .iter()
        .enumerate()
        .find(|(_, tuple)| tuple.len() != arity)
        .map(|(index, tuple)| InvariantError::WrongArity {
            index,
            expected: arity,
            actual: tuple.len(),
        })
}

pub(crate) fn find_wrong_sum(tuples: &[SumTuple], target: i128) -> Option<InvariantError> {
    tuples
        .iter()
        .enumerate()
        .find(|(_, tuple)| tuple.sum() != target)
        .map(|(index, tuple)| InvariantError::WrongSum {
            index,
            expected: target,
            actual: tuple.sum(),
        })
}

pub(crate) fn find_duplicate(tuples: &[SumTuple]) -> Option<InvariantError> {
    let mut seen: HashMap<Vec<i64>, usize> = HashMap::with_capacity(tuples.len());
    for (index, tuple) in tuples.iter().enumerate() {
        if let Some(&first) = seen.get(&tuple.multiset()) {
            return Some(InvariantError::DuplicateTuple {
                first,
                second: index,
            });
        }
        seen.insert(tuple.multiset(), index);
    }
    None
}

// =============================================================================
// SORTED VIEW
// =============================================================================

/// A read-only window over a non-decreasing slice.
///
/// # Invariants (enforced at construction)
/// - For all `i < j`: `values[i] <= values[j]`
///
/// Sub-views taken with [`SortedView::tail`] inherit the invariant for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortedView<'a> {
    values: &'a [i64],
}

impl<'a> SortedView<'a> {
    /// Wrap a slice, validating that it's sorted.
    pub fn new(values: &'a [i64]) -> Result<Self, InvariantError> {
        match find_unsorted(values) {
            Some(position) => Err(InvariantError::Unsorted { position }),
            None => Ok(Self { values }),
        }
    }

    /// Wrap a slice the caller has just sorted.
    ///
    /// The ordering is only re-checked in debug builds.
    pub fn from_sorted(values: &'a [i64]) -> Self {
        super::contracts::check_sorted(values);
        Self { values }
    }

    /// The view from `start` to the end. Empty if `start` is past the end.
    pub fn tail(self, start: usize) -> SortedView<'a> {
        Self {
            values: self.values.get(start..).unwrap_or(&[]),
        }
    }

    pub fn as_slice(&self) -> &'a [i64] {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }
}

// =============================================================================
// VERIFIED SOLUTION
// =============================================================================

/// A result set that has been checked against its arity and target.
///
/// # Invariants (enforced at construction)
/// - Every tuple has exactly `arity` elements
/// - Every tuple sums to `target`
/// - No two tuples are permutations of each other
#[derive(Debug, Clone)]
pub struct VerifiedSolution {
    tuples: TupleSet,
    arity: usize,
    target: i64,
}

impl VerifiedSolution {
    pub fn new(tuples: TupleSet, arity: usize, target: i64) -> Result<Self, InvariantError> {
        let slice = tuples.as_slice();
        if let Some(err) = find_wrong_arity(slice, arity) {
            return Err(err);
        }
        if let Some(err) = find_wrong_sum(slice, i128::from(target)) {
            return Err(err);
        }
        if let Some(err) = find_duplicate(slice) {
            return Err(err);
        }

        Ok(Self {
            tuples,
            arity,
            target,
        })
    }

    pub fn tuples(&self) -> &TupleSet {
        &self.tuples
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn into_tuples(self) -> TupleSet {
        self.tuples
    }
}
