// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Database file location.
//!
//! Resolution order: the `--db` flag, the `ROSTER_DB` environment
//! variable, then `roster.db` in the current directory.

use std::path::{Path, PathBuf};

/// Environment variable overriding the database location.
pub const DB_ENV_VAR: &str = "ROSTER_DB";
/// Default database filename, resolved against the current directory.
pub const DB_FILE_NAME: &str = "roster.db";

/// Resolve the database path from the flag, environment, or default.
pub fn resolve_db_path(flag: Option<&Path>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Ok(value) = std::env::var(DB_ENV_VAR) {
        if !value.is_empty() {
            return PathBuf::from(value);
        }
    }
    PathBuf::from(DB_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
