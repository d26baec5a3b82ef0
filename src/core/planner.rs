//! In-memory repository of assignments and subjects.
//!
//! Commands load a `Planner` from the database, mutate it through these
//! operations (which own all validation) and persist the touched record.

use crate::errors::{AppError, AppResult};
use crate::models::{
    Assignment, AssignmentDraft, AssignmentPatch, SubjectColor, SubjectPalette,
};
use chrono::{NaiveDate, TimeZone};

#[derive(Debug, Clone)]
pub struct Planner {
    assignments: Vec<Assignment>,
    subjects: SubjectPalette,
    // Monotonic within a session: ids freed by `delete` are not handed out again.
    // `None` once i64::MAX has been used.
    next_id: Option<i64>,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(Vec::new(), SubjectPalette::default())
    }
}

impl Planner {
    /// `assignments` must carry unique ids (the table's primary key).
    pub fn new(assignments: Vec<Assignment>, subjects: SubjectPalette) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate assignment ids"
        );

        let next_id = assignments
            .iter()
            .map(|a| a.id)
            .max()
            .unwrap_or(0)
            .checked_add(1);
        Self {
            assignments,
            subjects,
            next_id,
        }
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn subjects(&self) -> &SubjectPalette {
        &self.subjects
    }

    pub fn get(&self, id: i64) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    fn index_of(&self, id: i64) -> AppResult<usize> {
        self.assignments
            .iter()
            .position(|a| a.id == id)
            .ok_or(AppError::AssignmentNotFound(id))
    }

    fn check_name(name: &str) -> AppResult<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::EmptyName);
        }
        Ok(trimmed.to_string())
    }

    /// Trimmed subject name, if it is in the palette.
    fn check_subject(&self, subject: &str) -> AppResult<String> {
        let subject = subject.trim();
        if !self.subjects.contains(subject) {
            return Err(AppError::UnknownSubject(subject.to_string()));
        }
        Ok(subject.to_string())
    }

    /// Add a new assignment and return it with its freshly assigned id.
    pub fn create(&mut self, draft: AssignmentDraft) -> AppResult<&Assignment> {
        let name = Self::check_name(&draft.name)?;
        let subject = self.check_subject(&draft.subject)?;

        let id = self.next_id.ok_or(AppError::IdsExhausted)?;
        self.next_id = id.checked_add(1);

        let a = Assignment::new(
            id,
            &name,
            draft.due,
            &subject,
            draft.sub_type,
            &draft.notes,
        );
        self.assignments.push(a);

        let last = self.assignments.len() - 1;
        Ok(&self.assignments[last])
    }

    /// Apply the fields present in `patch`. Identity and completion never change here.
    pub fn edit(&mut self, id: i64, patch: AssignmentPatch) -> AppResult<&Assignment> {
        let idx = self.index_of(id)?;

        let name = patch.name.as_deref().map(Self::check_name).transpose()?;
        let subject = patch
            .subject
            .as_deref()
            .map(|s| self.check_subject(s))
            .transpose()?;

        let a = &mut self.assignments[idx];
        if let Some(n) = name {
            a.name = n;
        }
        if let Some(d) = patch.due {
            a.due = d;
        }
        if let Some(s) = subject {
            a.subject = s;
        }
        if let Some(t) = patch.sub_type {
            a.sub_type = t;
        }
        if let Some(n) = patch.notes {
            a.notes = n;
        }

        Ok(&self.assignments[idx])
    }

    pub fn delete(&mut self, id: i64) -> AppResult<Assignment> {
        let idx = self.index_of(id)?;
        Ok(self.assignments.remove(idx))
    }

    pub fn toggle_completed(&mut self, id: i64) -> AppResult<&Assignment> {
        let idx = self.index_of(id)?;
        let a = &mut self.assignments[idx];
        a.completed = !a.completed;
        Ok(&self.assignments[idx])
    }

    /// Insert a subject or recolor an existing one.
    pub fn add_subject(&mut self, name: &str, color: SubjectColor) -> AppResult<Option<SubjectColor>> {
        let name = Self::check_name(name)?;
        Ok(self.subjects.insert(&name, color))
    }

    /// Remove a subject. Its assignments are kept and render uncolored.
    pub fn remove_subject(&mut self, name: &str) -> AppResult<SubjectColor> {
        let name = name.trim();
        self.subjects
            .remove(name)
            .ok_or_else(|| AppError::UnknownSubject(name.to_string()))
    }

    /// Assignments due on `day` (local calendar day), in collection order.
    pub fn due_on<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.due_day(tz) == day)
            .collect()
    }
}
