pub mod calendar_view;
pub mod messages;
pub mod subject_view;
pub mod summary_view;
