// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Row types for the course management database.

use serde::{Deserialize, Serialize};

/// A course offered to students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Surrogate primary key, assigned on insert and never reused.
    pub id: i64,
    /// Free-form name; no uniqueness constraint.
    pub name: String,
    /// Free-form description; may be empty.
    pub description: String,
}

/// A student, optionally associated with one course.
///
/// Every field besides the id is nullable: the enrollment flow inserts
/// rows with only `course_id` set, and leaving a course rewrites an
/// existing row with null in every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Surrogate primary key, assigned on insert and never reused.
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// References `courses.id`, but nothing enforces that the course
    /// exists — a dangling id is stored verbatim.
    pub course_id: Option<i64>,
}

/// Outcome of an add-or-update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saved {
    /// A new row was inserted and assigned this id.
    Inserted(i64),
    /// The row with the supplied id was rewritten in place.
    Updated,
    /// The supplied id matched no row; nothing was written.
    NotFound,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
