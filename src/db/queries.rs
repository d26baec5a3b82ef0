use crate::core::planner::Planner;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Assignment, SubType, SubjectColor, SubjectPalette};
use chrono::{DateTime, Utc};
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<Assignment> {
    let due_str: String = row.get("due_at")?;
    let due = DateTime::parse_from_rfc3339(&due_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(AppError::InvalidDate(due_str.clone())))?;

    let st_str: String = row.get("sub_type")?;
    let sub_type = SubType::from_db_str(&st_str)
        .ok_or_else(|| conversion_error(AppError::InvalidSubType(st_str.clone())))?;

    Ok(Assignment {
        id: row.get("id")?,
        name: row.get("name")?,
        due,
        subject: row.get("subject")?,
        sub_type,
        notes: row.get("notes")?,
        completed: row.get::<_, i32>("completed")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// All assignments in insertion order (id ascending).
pub fn load_assignments(pool: &mut DbPool) -> AppResult<Vec<Assignment>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, name, due_at, subject, sub_type, notes, completed, created_at
         FROM assignments
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn due_to_db(due: &DateTime<Utc>) -> String {
    due.to_rfc3339()
}

pub fn insert_assignment(conn: &Connection, a: &Assignment) -> AppResult<()> {
    conn.execute(
        "INSERT INTO assignments (id, name, due_at, subject, sub_type, notes, completed, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            a.id,
            a.name,
            due_to_db(&a.due),
            a.subject,
            a.sub_type.to_db_str(),
            a.notes,
            if a.completed { 1 } else { 0 },
            a.created_at,
        ],
    )?;
    Ok(())
}

pub fn update_assignment(conn: &Connection, a: &Assignment) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE assignments
         SET name = ?2, due_at = ?3, subject = ?4, sub_type = ?5, notes = ?6, completed = ?7
         WHERE id = ?1",
        params![
            a.id,
            a.name,
            due_to_db(&a.due),
            a.subject,
            a.sub_type.to_db_str(),
            a.notes,
            if a.completed { 1 } else { 0 },
        ],
    )?;

    if changed == 0 {
        return Err(AppError::AssignmentNotFound(a.id));
    }
    Ok(())
}

pub fn delete_assignment(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM assignments WHERE id = ?1", params![id])?;
    Ok(())
}

pub fn load_subjects(pool: &mut DbPool) -> AppResult<SubjectPalette> {
    let mut stmt = pool
        .conn
        .prepare("SELECT name, color FROM subjects ORDER BY name ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut palette = SubjectPalette::new();
    for r in rows {
        let (name, color_str) = r?;
        let color = SubjectColor::from_db_str(&color_str)
            .ok_or_else(|| AppError::InvalidColor(color_str.clone()))?;
        palette.insert(&name, color);
    }
    Ok(palette)
}

pub fn upsert_subject(conn: &Connection, name: &str, color: SubjectColor) -> AppResult<()> {
    conn.execute(
        "INSERT INTO subjects (name, color) VALUES (?1, ?2)
         ON CONFLICT(name) DO UPDATE SET color = excluded.color",
        params![name, color.to_db_str()],
    )?;
    Ok(())
}

pub fn delete_subject(conn: &Connection, name: &str) -> AppResult<()> {
    conn.execute("DELETE FROM subjects WHERE name = ?1", params![name])?;
    Ok(())
}

/// Load the whole in-memory repository.
pub fn load_planner(pool: &mut DbPool) -> AppResult<Planner> {
    let assignments = load_assignments(pool)?;
    let subjects = load_subjects(pool)?;
    Ok(Planner::new(assignments, subjects))
}

pub fn load_log(pool: &mut DbPool) -> AppResult<Vec<(i64, String, String, String, String)>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                row.get::<_, String>(4)?,
            ))
        })?;

        rows.collect::<Result<Vec<_>>>()
    })
    .map_err(AppError::from)
}
