// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the roster CLI.

use thiserror::Error;

/// All possible errors that can occur in the rosterrs library.
///
/// Data-layer errors pass through unchanged so the user sees exactly what
/// the storage engine reported.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] roster_core::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rosterrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
