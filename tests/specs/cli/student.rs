// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `roster student` commands.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roster() -> Command {
    cargo_bin_cmd!("roster")
}

fn temp_store() -> TempDir {
    TempDir::new().unwrap()
}

fn add_student(temp: &TempDir, name: &str, email: &str, phone: &str, course: &str) {
    roster()
        .args([
            "student", "add", "--name", name, "--email", email, "--phone", phone, "--course",
            course,
        ])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn list_on_empty_store() {
    let temp = temp_store();
    roster()
        .args(["student", "list"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no students"));
}

#[test]
fn add_then_list_shows_the_student() {
    let temp = temp_store();
    add_student(&temp, "Ann", "ann@x.com", "555", "1");

    roster()
        .args(["student", "list"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann"))
        .stdout(predicate::str::contains("ann@x.com"))
        .stdout(predicate::str::contains("555"));
}

#[test]
fn join_creates_an_enrollment_only_row() {
    let temp = temp_store();
    roster()
        .args(["student", "join", "3"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("joined course 3"));

    let output = roster()
        .args(["student", "list", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(parsed[0]["name"].is_null());
    assert_eq!(parsed[0]["course_id"], 3);
}

#[test]
fn leave_clears_every_field() {
    let temp = temp_store();
    add_student(&temp, "Ann", "ann@x.com", "555", "1");

    roster()
        .args(["student", "leave", "1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("left their course"));

    let output = roster()
        .args(["student", "list", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(parsed[0]["name"].is_null());
    assert!(parsed[0]["course_id"].is_null());
}

#[test]
fn leave_of_missing_id_reports_the_noop() {
    let temp = temp_store();
    roster()
        .args(["student", "leave", "9"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no student with id 9"));
}

#[test]
fn delete_removes_the_student() {
    let temp = temp_store();
    add_student(&temp, "Ann", "ann@x.com", "555", "1");

    roster()
        .args(["student", "delete", "1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted student 1"));

    roster()
        .args(["student", "list"])
        .current_dir(temp.path())
        .assert()
        .stdout(predicate::str::contains("no students"));
}

#[test]
fn deleting_a_course_leaves_the_enrolled_student() {
    let temp = temp_store();
    roster()
        .args(["course", "add", "Algebra"])
        .current_dir(temp.path())
        .assert()
        .success();
    add_student(&temp, "Ann", "ann@x.com", "555", "1");

    roster()
        .args(["course", "delete", "1"])
        .current_dir(temp.path())
        .assert()
        .success();

    // The student keeps the dangling course reference.
    let output = roster()
        .args(["student", "list", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["name"], "Ann");
    assert_eq!(parsed[0]["course_id"], 1);
}
