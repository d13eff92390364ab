// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Output format for list commands.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage courses and student enrollment backed by a single SQLite file")]
#[command(
    long_about = "Manage courses and student enrollment backed by a single SQLite file.\n\n\
    The database lives at --db, $ROSTER_DB, or ./roster.db, and is created\n\
    on first use."
)]
pub struct Cli {
    /// Path to the database file (overrides $ROSTER_DB)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the database and its tables if they do not exist
    Init,
    /// Manage courses
    #[command(subcommand)]
    Course(CourseCommand),
    /// Manage students and their enrollment
    #[command(subcommand)]
    Student(StudentCommand),
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum CourseCommand {
    /// Add a new course
    Add {
        /// Course name
        name: String,
        /// Course description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Rewrite an existing course in place
    Update {
        /// Course id
        id: i64,
        /// New course name
        name: String,
        /// New course description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List all courses
    List {
        #[arg(short = 'o', long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
    /// Delete a course (enrolled students are left untouched)
    Delete {
        /// Course id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum StudentCommand {
    /// Add a new student
    Add {
        /// Student name
        #[arg(long)]
        name: Option<String>,
        /// Student email
        #[arg(long)]
        email: Option<String>,
        /// Student phone
        #[arg(long)]
        phone: Option<String>,
        /// Course to enroll the student in
        #[arg(long, value_name = "COURSE_ID")]
        course: Option<i64>,
    },
    /// Rewrite an existing student in place (omitted fields become null)
    Update {
        /// Student id
        id: i64,
        /// New student name
        #[arg(long)]
        name: Option<String>,
        /// New student email
        #[arg(long)]
        email: Option<String>,
        /// New student phone
        #[arg(long)]
        phone: Option<String>,
        /// New course id
        #[arg(long, value_name = "COURSE_ID")]
        course: Option<i64>,
    },
    /// List all students
    List {
        #[arg(short = 'o', long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
    /// Delete a student
    Delete {
        /// Student id
        id: i64,
    },
    /// Join a course as a new student record
    Join {
        /// Course id to join
        course_id: i64,
    },
    /// Leave a course, clearing the student's fields
    Leave {
        /// Student id
        id: i64,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
