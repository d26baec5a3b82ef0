use crate::core::planner::Planner;
use crate::models::Assignment;
use chrono::{NaiveDate, TimeZone};

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard<'a> {
    pub today: NaiveDate,
    pub due_today: Vec<&'a Assignment>,
    pub courses: usize,
    pub pending: usize,
    pub completed: usize,
}

pub fn build_dashboard<'a, Tz: TimeZone>(
    planner: &'a Planner,
    today: NaiveDate,
    tz: &Tz,
) -> Dashboard<'a> {
    let completed = planner
        .assignments()
        .iter()
        .filter(|a| a.completed)
        .count();

    Dashboard {
        today,
        due_today: planner.due_on(today, tz),
        courses: planner.subjects().len(),
        pending: planner.assignments().len() - completed,
        completed,
    }
}
