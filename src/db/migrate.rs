use crate::models::SubjectPalette;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists. It also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![version, message],
    )?;
    Ok(())
}

/// Create the `assignments` table.
fn create_assignments_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS assignments (
            id          INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            due_at      TEXT NOT NULL,
            subject     TEXT NOT NULL,
            sub_type    TEXT NOT NULL DEFAULT 'class_work'
                        CHECK(sub_type IN ('class_work','homework','quiz','test')),
            notes       TEXT NOT NULL DEFAULT '',
            completed   INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_assignments_due ON assignments(due_at);
        "#,
    )?;
    Ok(())
}

/// Create the `subjects` table and seed the default palette.
fn create_subjects_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS subjects (
            name   TEXT PRIMARY KEY,
            color  TEXT NOT NULL
        );
        "#,
    )?;

    for (name, color) in SubjectPalette::with_defaults().iter() {
        conn.execute(
            "INSERT OR IGNORE INTO subjects (name, color) VALUES (?1, ?2)",
            params![name, color.to_db_str()],
        )?;
    }
    Ok(())
}

type Migration = (&'static str, &'static str, fn(&Connection) -> Result<()>);

const MIGRATIONS: [Migration; 2] = [
    (
        "20241001_0001_create_assignments",
        "Created assignments table",
        create_assignments_table,
    ),
    (
        "20241001_0002_create_subjects",
        "Created subjects table with default palette",
        create_subjects_table,
    ),
];

/// Public entry point: run all pending migrations.
/// Each one runs once; its version is recorded in `log`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        apply(conn)?;
        mark_applied(conn, version, message)?;

        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}
