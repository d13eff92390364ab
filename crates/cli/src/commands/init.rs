// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::error::Result;

use super::open_db;

/// Create the database file and its tables. Safe to re-run; opening an
/// existing database only re-applies the idempotent schema.
pub fn run(db_path: &Path) -> Result<()> {
    let _db = open_db(db_path)?;
    println!("initialized course database at {}", db_path.display());
    Ok(())
}
