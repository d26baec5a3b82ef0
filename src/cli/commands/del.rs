use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_assignment, load_planner};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::open_ready(&cfg.database)?;
        let mut planner = load_planner(&mut pool)?;

        let name = planner
            .get(*id)
            .map(|a| a.name.clone())
            .ok_or(AppError::AssignmentNotFound(*id))?;

        //
        // Confirmation prompt
        //
        if !*yes
            && !confirm(format!(
                "Delete assignment #{} '{}'? This action is irreversible.",
                id, name
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = planner.delete(*id)?;
        delete_assignment(&pool.conn, removed.id)?;

        audit(&pool.conn, "del", &format!("#{}", removed.id), &removed.name);
        success(format!("Assignment #{} '{}' has been deleted.", removed.id, removed.name));
    }

    Ok(())
}
