// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end specs for the roster CLI.
//!
//! The spec files under `cli/` are compiled as integration tests of the
//! `roster` package via `[[test]]` entries in its Cargo.toml; this crate
//! exists so the workspace member is a valid package.
