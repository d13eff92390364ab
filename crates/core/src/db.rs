// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed storage for courses and students.
//!
//! The [`Database`] struct provides all data access: add-or-update, list,
//! and delete for each of the two tables. Every operation is a single
//! auto-committing statement; there are no multi-statement transactions.

use rusqlite::{params, Connection};
use std::path::Path;

use crate::error::Result;
use crate::model::{Course, Saved, Student};

/// SQL schema for the course management database.
///
/// The foreign key on `students.course_id` is declarative only: the
/// `foreign_keys` pragma is never enabled, so deleting a course neither
/// cascades to nor nulls out referencing students.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS courses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    description TEXT
);

CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT,
    phone TEXT,
    course_id INTEGER,
    FOREIGN KEY (course_id) REFERENCES courses(id)
);
"#;

/// Create the `courses` and `students` tables if they do not exist.
///
/// Idempotent; safe to run on every process start.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// SQLite database connection with course and student operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database at the given path, creating and initializing it
    /// if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // WAL mode and a busy timeout; foreign_keys stays at the
        // SQLite default (off).
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        init_schema(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        init_schema(&db.conn)?;
        Ok(db)
    }

    /// Insert a course, or rewrite one in place when `course_id` is given.
    ///
    /// Updating an id that matches no row writes nothing and reports
    /// [`Saved::NotFound`].
    pub fn add_or_update_course(
        &self,
        name: &str,
        description: &str,
        course_id: Option<i64>,
    ) -> Result<Saved> {
        match course_id {
            Some(id) => {
                let affected = self.conn.execute(
                    "UPDATE courses SET name = ?1, description = ?2 WHERE id = ?3",
                    params![name, description, id],
                )?;
                if affected == 0 {
                    Ok(Saved::NotFound)
                } else {
                    Ok(Saved::Updated)
                }
            }
            None => {
                self.conn.execute(
                    "INSERT INTO courses (name, description) VALUES (?1, ?2)",
                    params![name, description],
                )?;
                Ok(Saved::Inserted(self.conn.last_insert_rowid()))
            }
        }
    }

    /// Get all courses in storage order.
    pub fn list_courses(&self) -> Result<Vec<Course>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, description, id FROM courses")?;

        let courses = stmt
            .query_map([], |row| {
                Ok(Course {
                    name: row.get(0)?,
                    description: row.get(1)?,
                    id: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(courses)
    }

    /// Delete a course by id. Returns `false` when no row matched.
    ///
    /// Students referencing the course are left untouched, dangling
    /// `course_id` included.
    pub fn delete_course(&self, course_id: i64) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM courses WHERE id = ?1", params![course_id])?;
        Ok(affected > 0)
    }

    /// Insert a student, or rewrite one in place when `student_id` is given.
    ///
    /// Every field is written exactly as supplied, nulls included; no
    /// validation is applied to any of them, and `course_id` is not
    /// checked against the courses table.
    pub fn add_or_update_student(
        &self,
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        course_id: Option<i64>,
        student_id: Option<i64>,
    ) -> Result<Saved> {
        match student_id {
            Some(id) => {
                let affected = self.conn.execute(
                    "UPDATE students SET name = ?1, email = ?2, phone = ?3, course_id = ?4
                     WHERE id = ?5",
                    params![name, email, phone, course_id, id],
                )?;
                if affected == 0 {
                    Ok(Saved::NotFound)
                } else {
                    Ok(Saved::Updated)
                }
            }
            None => {
                self.conn.execute(
                    "INSERT INTO students (name, email, phone, course_id) VALUES (?1, ?2, ?3, ?4)",
                    params![name, email, phone, course_id],
                )?;
                Ok(Saved::Inserted(self.conn.last_insert_rowid()))
            }
        }
    }

    /// Get all students in storage order.
    pub fn list_students(&self) -> Result<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email, phone, course_id FROM students")?;

        let students = stmt
            .query_map([], |row| {
                Ok(Student {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    phone: row.get(3)?,
                    course_id: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(students)
    }

    /// Delete a student by id. Returns `false` when no row matched.
    pub fn delete_student(&self, student_id: i64) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1", params![student_id])?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
