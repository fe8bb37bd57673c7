// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** (`SortedView`, `VerifiedSolution`) that make
//!    invalid states unrepresentable. A `SortedView` can only be built from a
//!    non-decreasing slice, so the two-pointer scan never has to ask.
//!
//! 2. **Runtime contracts** that panic in debug builds when invariants are violated.
//!    Zero-cost in release, but catch bugs during development.
//!
//! The wrappers guard the input side, the contracts guard every result set the
//! entry points hand back.

mod types;
pub mod contracts;

pub use types::*;
