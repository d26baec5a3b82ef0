use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{load_planner, update_assignment};
use crate::errors::{AppError, AppResult};
use crate::models::AssignmentPatch;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::{local_to_utc, parse_optional_time};
use chrono::Local;

/// Edit an existing assignment: only the given fields change.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        subject,
        due,
        at,
        sub_type,
        notes,
    } = cmd
    {
        let new_day = date::parse_optional_date(due.as_ref())?;
        let new_time = parse_optional_time(at.as_ref())?;

        let mut pool = DbPool::open_ready(&cfg.database)?;
        let mut planner = load_planner(&mut pool)?;

        let current = planner.get(*id).ok_or(AppError::AssignmentNotFound(*id))?;

        // A new date keeps the old wall time and vice versa
        let due_at = if new_day.is_some() || new_time.is_some() {
            let local = current.due_local(&Local);
            let d = new_day.unwrap_or_else(|| local.date_naive());
            let t = new_time.unwrap_or_else(|| local.time());
            Some(local_to_utc(d, t, &Local)?)
        } else {
            None
        };

        let patch = AssignmentPatch {
            name: name.clone(),
            due: due_at,
            subject: subject.clone(),
            sub_type: *sub_type,
            notes: notes.clone(),
        };

        if patch.is_empty() {
            warning("Nothing to change.");
            return Ok(());
        }

        let updated = planner.edit(*id, patch)?;
        update_assignment(&pool.conn, updated)?;

        audit(
            &pool.conn,
            "edit",
            &format!("#{}", updated.id),
            &format!("{} due {}", updated.name, updated.due_str(&Local)),
        );

        success(format!("Assignment #{} updated.", updated.id));
    }

    Ok(())
}
