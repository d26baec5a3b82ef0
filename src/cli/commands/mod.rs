pub mod add;
pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod done;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod reminders;
pub mod settings;
pub mod subject;
