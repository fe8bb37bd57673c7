// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the ksum cursor helpers.
//!
//! This standalone crate extracts the duplicate-skipping cursor moves and the
//! pair scan built on them, and proves their safety with Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: neither helper indexes out of bounds for any input
//! 2. **Progress**: strictly inside its bound, each helper moves at least one step
//! 3. **Bounds**: a helper never crosses its bound
//! 4. **Skipping**: every position skipped over holds the starting value
//! 5. **Termination**: the pair scan finishes in at most `len` cursor moves

/// Largest slice the proofs consider. Keeps the unwind bounds small.
pub const MAX_LEN: usize = 6;

// ============================================================================
// CURSOR HELPERS (copied from src/search/cursor.rs)
// ============================================================================

/// First index after `from` whose value differs from `values[from]`,
/// never going past `limit`.
pub fn next_distinct(values: &[i64], from: usize, limit: usize) -> usize {
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
pub fn prev_distinct(values: &[i64], from: usize, floor: usize) -> usize {
    let Some(&current) = values.get(from) else {
        return from;
    };

    let mut cursor = from;
    while cursor > floor && values[cursor] == current {
        cursor -= 1;
    }
    cursor
}

// ============================================================================
// PAIR SCAN (src/search/pair.rs, counting instead of collecting)
// ============================================================================

/// Number of distinct pairs summing to `target`, plus the number of cursor
/// moves the scan made. Expects sorted input.
pub fn pair_scan_count(values: &[i64], target: i128) -> (usize, usize) {
    let (mut found, mut moves) = (0, 0);
    if values.len() < 2 {
        return (found, moves);
    }

    let (mut left, mut right) = (0, values.len() - 1);
    while left < right {
        let sum = i128::from(values[left]) + i128::from(values[right]);
        if sum < target {
            left = next_distinct(values, left, right);
        } else if sum > target {
            right = prev_distinct(values, right, left);
        } else {
            found += 1;
            left = next_distinct(values, left, right);
            right = prev_distinct(values, right, left);
        }
        moves += 1;
    }
    (found, moves)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_values(buf: &mut [i64; MAX_LEN]) -> usize {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        for slot in buf.iter_mut() {
            // Tiny domain so equal neighbours are common.
            *slot = kani::any_where(|&v: &i64| (-2..=2).contains(&v));
        }
        len
    }

    /// Verify next_distinct never panics, stays in bounds and makes progress.
    #[kani::proof]
    #[kani::unwind(8)] // MAX_LEN + 2
    fn verify_next_distinct() {
        let mut buf = [0i64; MAX_LEN];
        let len = any_values(&mut buf);
        let values = &buf[..len];
        let from: usize = kani::any_where(|&n| n <= MAX_LEN + 1);
        let limit: usize = kani::any_where(|&n| n <= MAX_LEN + 1);

        let cursor = next_distinct(values, from, limit);
        let bound = limit.min(len);

        if from < bound {
            kani::assert(cursor > from, "next_distinct must advance inside its bound");
            kani::assert(cursor <= bound, "next_distinct must not pass its limit");
            for i in from..cursor {
                kani::assert(values[i] == values[from], "skipped a different value");
            }
            kani::assert(
                cursor == bound || values[cursor] != values[from],
                "next_distinct must stop on the first different value",
            );
        } else {
            kani::assert(cursor == from, "next_distinct must not move outside its bound");
        }
    }

    /// Verify prev_distinct never panics, stays in bounds and makes progress.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_prev_distinct() {
        let mut buf = [0i64; MAX_LEN];
        let len = any_values(&mut buf);
        let values = &buf[..len];
        let from: usize = kani::any_where(|&n| n <= MAX_LEN + 1);
        let floor: usize = kani::any_where(|&n| n <= MAX_LEN);

        let cursor = prev_distinct(values, from, floor);

        if from < len && from > floor {
            kani::assert(cursor < from, "prev_distinct must retreat above its floor");
            kani::assert(cursor >= floor, "prev_distinct must not pass its floor");
            for i in cursor + 1..=from {
                kani::assert(values[i] == values[from], "skipped a different value");
            }
        } else {
            kani::assert(cursor == from, "prev_distinct must not move at its floor");
        }
    }

    /// Verify the pair scan terminates within `len` moves on sorted input.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_pair_scan_terminates() {
        let mut buf = [0i64; MAX_LEN];
        let len = any_values(&mut buf);
        buf[..len].sort_unstable();
        let target: i128 = kani::any_where(|&t: &i128| (-4..=4).contains(&t));

        let (found, moves) = pair_scan_count(&buf[..len], target);

        kani::assert(moves < len.max(1), "pair scan must finish in fewer than len moves");
        kani::assert(found <= len / 2 + 1, "more pairs than the input can hold");
    }
}
