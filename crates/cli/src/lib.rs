// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rosterrs - course and student management over a single SQLite file.
//!
//! This crate is the terminal front end for the `roster-core` data-access
//! layer. It parses arguments, resolves the database location, invokes one
//! data-access operation per command, and renders the result.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap argument definitions
//! - [`config`] - database path resolution (flag, env var, default)
//! - [`Error`] - error types for all operations

mod cli;
mod commands;
mod display;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, CourseCommand, OutputFormat, StudentCommand};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed CLI invocation. This is the main entry point for
/// library users and provides a testable way to run commands without
/// process execution.
pub fn run(cli: Cli) -> Result<()> {
    let db_path = config::resolve_db_path(cli.db.as_deref());
    match cli.command {
        Command::Init => commands::init::run(&db_path),
        Command::Course(cmd) => commands::course::run(&db_path, cmd),
        Command::Student(cmd) => commands::student::run(&db_path, cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "roster", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
