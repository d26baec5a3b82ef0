// src/export/model.rs

use crate::models::Assignment;
use chrono::TimeZone;
use serde::Serialize;

/// One exported row: the due instant split into local date and time.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AssignmentExport {
    pub id: i64,
    pub name: String,
    pub due_date: String,
    pub due_time: String,
    pub subject: String,
    pub sub_type: String,
    pub notes: String,
    pub completed: bool,
}

impl AssignmentExport {
    /// Flatten an assignment, rendering the due instant in `tz`.
    pub fn from_assignment<Tz: TimeZone>(a: &Assignment, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let due = a.due_local(tz);
        Self {
            id: a.id,
            name: a.name.clone(),
            due_date: due.format("%Y-%m-%d").to_string(),
            due_time: due.format("%H:%M").to_string(),
            subject: a.subject.clone(),
            sub_type: a.sub_type.to_db_str().to_string(),
            notes: a.notes.clone(),
            completed: a.completed,
        }
    }
}

/// Header per CSV
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "name",
        "due_date",
        "due_time",
        "subject",
        "sub_type",
        "notes",
        "completed",
    ]
}

pub(crate) fn export_to_row(e: &AssignmentExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.name.clone(),
        e.due_date.clone(),
        e.due_time.clone(),
        e.subject.clone(),
        e.sub_type.clone(),
        e.notes.clone(),
        e.completed.to_string(),
    ]
}
