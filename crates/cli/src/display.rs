// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text-table rendering for list output.

use roster_core::{Course, Student};

/// Placeholder shown for null fields.
const NULL_CELL: &str = "-";

fn text_or_dash(value: Option<&str>) -> &str {
    value.unwrap_or(NULL_CELL)
}

fn id_or_dash(value: Option<i64>) -> String {
    match value {
        Some(id) => id.to_string(),
        None => NULL_CELL.to_string(),
    }
}

/// Render courses as an aligned table in (name, description, id) order.
pub fn course_table(courses: &[Course]) -> String {
    if courses.is_empty() {
        return "no courses\n".to_string();
    }

    let mut name_w = "NAME".len();
    let mut desc_w = "DESCRIPTION".len();
    for course in courses {
        name_w = name_w.max(course.name.len());
        desc_w = desc_w.max(course.description.len());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_w$}  {:<desc_w$}  ID\n",
        "NAME", "DESCRIPTION"
    ));
    for course in courses {
        out.push_str(&format!(
            "{:<name_w$}  {:<desc_w$}  {}\n",
            course.name, course.description, course.id
        ));
    }
    out
}

/// Render students as an aligned table in (id, name, email, phone,
/// course) order.
pub fn student_table(students: &[Student]) -> String {
    if students.is_empty() {
        return "no students\n".to_string();
    }

    let mut id_w = "ID".len();
    let mut name_w = "NAME".len();
    let mut email_w = "EMAIL".len();
    let mut phone_w = "PHONE".len();
    for student in students {
        id_w = id_w.max(student.id.to_string().len());
        name_w = name_w.max(text_or_dash(student.name.as_deref()).len());
        email_w = email_w.max(text_or_dash(student.email.as_deref()).len());
        phone_w = phone_w.max(text_or_dash(student.phone.as_deref()).len());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<id_w$}  {:<name_w$}  {:<email_w$}  {:<phone_w$}  COURSE\n",
        "ID", "NAME", "EMAIL", "PHONE"
    ));
    for student in students {
        out.push_str(&format!(
            "{:<id_w$}  {:<name_w$}  {:<email_w$}  {:<phone_w$}  {}\n",
            student.id,
            text_or_dash(student.name.as_deref()),
            text_or_dash(student.email.as_deref()),
            text_or_dash(student.phone.as_deref()),
            id_or_dash(student.course_id),
        ));
    }
    out
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
