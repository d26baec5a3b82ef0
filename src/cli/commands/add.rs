use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_assignment, load_planner};
use crate::errors::{AppError, AppResult};
use crate::models::AssignmentDraft;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::{local_to_utc, parse_optional_time, parse_time};
use chrono::Local;

/// Add a new assignment.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        subject,
        due,
        at,
        sub_type,
        notes,
    } = cmd
    {
        //
        // 1. Due date (default today) + due time (default from config)
        //
        let day = date::parse_optional_date(due.as_ref())?.unwrap_or_else(date::today);
        let time = match parse_optional_time(at.as_ref())? {
            Some(t) => t,
            None => parse_time(&cfg.default_due_time)
                .ok_or_else(|| AppError::InvalidTime(cfg.default_due_time.clone()))?,
        };
        let due_at = local_to_utc(day, time, &Local)?;

        //
        // 2. Load repository and validate through it
        //
        let mut pool = DbPool::open_ready(&cfg.database)?;
        let mut planner = load_planner(&mut pool)?;

        let created = planner.create(AssignmentDraft {
            name: name.clone(),
            due: due_at,
            subject: subject.clone(),
            sub_type: *sub_type,
            notes: notes.clone(),
        })?;

        //
        // 3. Persist + audit
        //
        insert_assignment(&pool.conn, created)?;
        audit(
            &pool.conn,
            "add",
            &format!("#{}", created.id),
            &format!("{} ({} {}) due {}", created.name, created.subject, created.sub_type.label(), created.due_str(&Local)),
        );

        success(format!(
            "Added assignment #{} '{}' due {}",
            created.id,
            created.name,
            created.due_str(&Local)
        ));
    }

    Ok(())
}
