//! Audit trail stored in the `log` table (also holds migration markers).

use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append one row to the `log` table, stamped with the local time.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Local::now().to_rfc3339(), operation, target, message])?;

    Ok(())
}

/// Like [`ttlog`], but a failure only prints a warning.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
