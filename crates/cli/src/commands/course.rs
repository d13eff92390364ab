// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use roster_core::{Database, Saved};

use crate::cli::{CourseCommand, OutputFormat};
use crate::display;
use crate::error::Result;

use super::open_db;

pub fn run(db_path: &Path, cmd: CourseCommand) -> Result<()> {
    let db = open_db(db_path)?;
    run_impl(&db, cmd)
}

/// Internal implementation that accepts a database handle for testing.
pub(crate) fn run_impl(db: &Database, cmd: CourseCommand) -> Result<()> {
    match cmd {
        CourseCommand::Add { name, description } => {
            if let Saved::Inserted(id) = db.add_or_update_course(&name, &description, None)? {
                tracing::debug!(id, "course inserted");
                println!("added course {}: {}", id, name);
            }
            Ok(())
        }
        CourseCommand::Update {
            id,
            name,
            description,
        } => {
            match db.add_or_update_course(&name, &description, Some(id))? {
                Saved::NotFound => println!("no course with id {}; nothing updated", id),
                _ => println!("updated course {}", id),
            }
            Ok(())
        }
        CourseCommand::List { output } => {
            let courses = db.list_courses()?;
            match output {
                OutputFormat::Text => print!("{}", display::course_table(&courses)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&courses)?),
            }
            Ok(())
        }
        CourseCommand::Delete { id } => {
            if db.delete_course(id)? {
                println!("deleted course {}", id);
            } else {
                println!("no course with id {}; nothing deleted", id);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "course_tests.rs"]
mod tests;
