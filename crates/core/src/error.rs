// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for roster-core operations.

use thiserror::Error;

/// All possible errors that can occur in roster-core operations.
///
/// A missing id on update or delete is not an error; those operations
/// report the no-op through their return value instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage-engine failure, propagated unchanged from rusqlite. Covers
    /// everything from an unopenable database file to a failed statement.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for roster-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
