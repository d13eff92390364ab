// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod course;
pub mod init;
pub mod student;

use std::path::Path;

use roster_core::Database;

use crate::error::Result;

/// Helper to open (and, on first use, initialize) the database.
pub fn open_db(path: &Path) -> Result<Database> {
    tracing::debug!("opening database at {}", path.display());
    Ok(Database::open(path)?)
}
