use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{load_planner, update_assignment};
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Toggle the completion flag.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Done { id } = cmd {
        let mut pool = DbPool::open_ready(&cfg.database)?;
        let mut planner = load_planner(&mut pool)?;

        let a = planner.toggle_completed(*id)?;
        update_assignment(&pool.conn, a)?;

        let state = if a.completed { "finished" } else { "not finished" };
        audit(&pool.conn, "done", &format!("#{}", a.id), &format!("{} marked {}", a.name, state));

        success(format!("Assignment #{} '{}' marked as {}.", a.id, a.name, state));
    }

    Ok(())
}
