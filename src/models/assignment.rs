use super::sub_type::SubType;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub id: i64,              // ⇔ assignments.id
    pub name: String,         // ⇔ assignments.name
    pub due: DateTime<Utc>,   // ⇔ assignments.due_at (TEXT, RFC3339 UTC)
    pub subject: String,      // ⇔ assignments.subject
    pub sub_type: SubType,    // ⇔ assignments.sub_type
    pub notes: String,        // ⇔ assignments.notes
    pub completed: bool,      // ⇔ assignments.completed (0/1)
    pub created_at: String,   // ⇔ assignments.created_at (TEXT, ISO8601)
}

impl Assignment {
    /// Build a fresh, not yet completed assignment stamped with the current time.
    pub fn new(
        id: i64,
        name: &str,
        due: DateTime<Utc>,
        subject: &str,
        sub_type: SubType,
        notes: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            due,
            subject: subject.to_string(),
            sub_type,
            notes: notes.to_string(),
            completed: false,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Due instant seen from the display timezone.
    pub fn due_local<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        self.due.with_timezone(tz)
    }

    /// Calendar day the assignment is due on in the display timezone.
    pub fn due_day<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.due_local(tz).date_naive()
    }

    pub fn due_str<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.due_local(tz).format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Input of a create operation: everything but identity and state.
#[derive(Debug, Clone)]
pub struct AssignmentDraft {
    pub name: String,
    pub due: DateTime<Utc>,
    pub subject: String,
    pub sub_type: SubType,
    pub notes: String,
}

/// Partial update applied by an edit. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct AssignmentPatch {
    pub name: Option<String>,
    pub due: Option<DateTime<Utc>>,
    pub subject: Option<String>,
    pub sub_type: Option<SubType>,
    pub notes: Option<String>,
}

impl AssignmentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.due.is_none()
            && self.subject.is_none()
            && self.sub_type.is_none()
            && self.notes.is_none()
    }
}
