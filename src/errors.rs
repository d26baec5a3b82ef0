//! Error type shared by every layer of rPlanner.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Date out of calendar range: {0}")]
    DateOutOfRange(String),

    #[error("Invalid sub-type: {0}")]
    InvalidSubType(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    // ---------------------------
    // Planner logic errors
    // ---------------------------
    #[error("Assignment #{0} not found")]
    AssignmentNotFound(i64),

    #[error("Unknown subject '{0}' (add it first with `rplanner subject add`)")]
    UnknownSubject(String),

    #[error("Name must not be empty")]
    EmptyName,

    #[error("No assignment ids left")]
    IdsExhausted,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
