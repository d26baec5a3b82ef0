pub mod calendar;
pub mod dashboard;
pub mod grouping;
pub mod log;
pub mod planner;
pub mod reminders;
pub mod settings;
