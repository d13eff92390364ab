// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! roster-core: data-access layer for the roster course manager.
//!
//! This crate owns the SQLite schema and the six CRUD operations that the
//! `roster` CLI (or any replacement front end) binds to: add-or-update,
//! list, and delete for courses and students.

pub mod db;
pub mod error;
pub mod model;

pub use db::{init_schema, Database, SCHEMA};
pub use error::{Error, Result};
pub use model::{Course, Saved, Student};
