// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use roster_core::{Database, Saved};

use crate::cli::{OutputFormat, StudentCommand};
use crate::display;
use crate::error::Result;

use super::open_db;

pub fn run(db_path: &Path, cmd: StudentCommand) -> Result<()> {
    let db = open_db(db_path)?;
    run_impl(&db, cmd)
}

/// Internal implementation that accepts a database handle for testing.
pub(crate) fn run_impl(db: &Database, cmd: StudentCommand) -> Result<()> {
    match cmd {
        StudentCommand::Add {
            name,
            email,
            phone,
            course,
        } => {
            if let Saved::Inserted(id) = db.add_or_update_student(
                name.as_deref(),
                email.as_deref(),
                phone.as_deref(),
                course,
                None,
            )? {
                tracing::debug!(id, "student inserted");
                println!("added student {}", id);
            }
            Ok(())
        }
        StudentCommand::Update {
            id,
            name,
            email,
            phone,
            course,
        } => {
            // Omitted fields are written as null, matching the data
            // layer's full-row replacement semantics.
            match db.add_or_update_student(
                name.as_deref(),
                email.as_deref(),
                phone.as_deref(),
                course,
                Some(id),
            )? {
                Saved::NotFound => println!("no student with id {}; nothing updated", id),
                _ => println!("updated student {}", id),
            }
            Ok(())
        }
        StudentCommand::List { output } => {
            let students = db.list_students()?;
            match output {
                OutputFormat::Text => print!("{}", display::student_table(&students)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&students)?),
            }
            Ok(())
        }
        StudentCommand::Delete { id } => {
            if db.delete_student(id)? {
                println!("deleted student {}", id);
            } else {
                println!("no student with id {}; nothing deleted", id);
            }
            Ok(())
        }
        StudentCommand::Join { course_id } => {
            // The join flow creates an enrollment-only row; the course id
            // is not checked against the courses table.
            if let Saved::Inserted(id) =
                db.add_or_update_student(None, None, None, Some(course_id), None)?
            {
                println!("student {} joined course {}", id, course_id);
            }
            Ok(())
        }
        StudentCommand::Leave { id } => {
            match db.add_or_update_student(None, None, None, None, Some(id))? {
                Saved::NotFound => println!("no student with id {}; nothing updated", id),
                _ => println!("student {} left their course", id),
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "student_tests.rs"]
mod tests;
