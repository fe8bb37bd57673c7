// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors at the edges of the crate.
//!
//! The search itself never fails: no match and an impossible arity are both
//! just an empty set. Errors only come from reading problems in and checking
//! answers on the way out.

use std::path::PathBuf;

use crate::verify::InvariantError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("problem {index}: arity {arity} exceeds the maximum of {max}")]
    ArityTooLarge {
        index: usize,
        arity: usize,
        max: usize,
    },

    #[error("verification failed: {0}")]
    Invariant(#[from] InvariantError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
