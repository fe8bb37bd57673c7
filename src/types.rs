// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types for k-sum search.
//!
//! A `SumTuple` is one answer: exactly `k` values in the order the search
//! discovered them. The two-pointer pair comes first, then each outer element
//! is appended as the recursion unwinds, so the outermost element is last.
//! Don't sort a tuple before comparing it with another one unless you mean to
//! compare multisets; use [`SumTuple::multiset`] for that.

use serde::{Deserialize, Serialize};

/// One result tuple, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SumTuple(Vec<i64>);

impl SumTuple {
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    /// Start a tuple from the pair found by the two-pointer scan.
    ///
    /// Reserves room for the outer elements that will be appended on the way
    /// back up the recursion.
    pub(crate) fn pair(left: i64, right: i64, arity: usize) -> Self {
        let mut values = Vec::with_capacity(arity.max(2));
        values.push(left);
        values.push(right);
        Self(values)
    }

    /// Append an outer-loop element.
    pub(crate) fn push_outer(&mut self, value: i64) {
        self.0.push(value);
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all values, widened so it can't overflow.
    pub fn sum(&self) -> i128 {
        self.0.iter().map(|&v| i128::from(v)).sum()
    }

    /// The tuple's values in ascending order.
    ///
    /// Two tuples are permutation-equal iff their multisets are equal.
    pub fn multiset(&self) -> Vec<i64> {
        let mut sorted = self.0.clone();
        sorted.sort_unstable();
        sorted
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.0
    }
}

impl From<Vec<i64>> for SumTuple {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl PartialEq<Vec<i64>> for SumTuple {
    fn eq(&self, other: &Vec<i64>) -> bool {
        &self.0 == other
    }
}

impl std::fmt::Display for SumTuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

/// Ordered, duplicate-free collection of result tuples.
///
/// Insertion order is discovery order (outer-to-inner enumeration).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TupleSet {
    tuples: Vec<SumTuple>,
}

impl TupleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, tuple: SumTuple) {
        self.tuples.push(tuple);
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SumTuple> {
        self.tuples.iter()
    }

    pub fn as_slice(&self) -> &[SumTuple] {
        &self.tuples
    }

    /// Plain nested vectors, convenient for comparisons in tests and output.
    pub fn to_vecs(&self) -> Vec<Vec<i64>> {
        self.tuples.iter().map(|t| t.values().to_vec()).collect()
    }

    /// Each tuple's multiset, in discovery order.
    pub fn multisets(&self) -> Vec<Vec<i64>> {
        self.tuples.iter().map(SumTuple::multiset).collect()
    }
}

impl IntoIterator for TupleSet {
    type Item = SumTuple;
    type IntoIter = std::vec::IntoIter<SumTuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.into_iter()
    }
}

impl<'a> IntoIterator for &'a TupleSet {
    type Item = &'a SumTuple;
    type IntoIter = std::slice::Iter<'a, SumTuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.iter()
    }
}

impl FromIterator<SumTuple> for TupleSet {
    fn from_iter<I: IntoIterator<Item = SumTuple>>(iter: I) -> Self {
        Self {
            tuples: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Vec<i64>>> for TupleSet {
    fn from(tuples: Vec<Vec<i64>>) -> Self {
        tuples.into_iter().map(SumTuple::from).collect()
    }
}

/// One search problem, as read from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub nums: Vec<i64>,
    /// Tuple size. Bounded by [`crate::MAX_ARITY`] when read from JSON.
    pub arity: usize,
    pub target: i64,
}

/// Answer to one [`Problem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub arity: usize,
    pub target: i64,
    pub tuples: TupleSet,
}
