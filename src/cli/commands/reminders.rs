use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reminders::upcoming_reminders;
use crate::db::pool::DbPool;
use crate::db::queries::load_planner;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::summary_view::render_reminders;
use crate::utils::time::parse_instant;
use chrono::{Local, Utc};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reminders { now } = cmd {
        if !cfg.notifications.enabled {
            info("Notifications are disabled (enable with `rplanner settings --notifications on`).");
            return Ok(());
        }

        let now = match now {
            Some(s) => parse_instant(s)?,
            None => Utc::now(),
        };

        let mut pool = DbPool::open_ready(&cfg.database)?;
        let planner = load_planner(&mut pool)?;

        let reminders = upcoming_reminders(planner.assignments(), &cfg.notifications, now, &Local);
        print!(
            "{}",
            render_reminders(&reminders, cfg.notifications.timing, &Local)
        );
    }
    Ok(())
}
