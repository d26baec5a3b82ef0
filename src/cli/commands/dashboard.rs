use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::build_dashboard;
use crate::db::pool::DbPool;
use crate::db::queries::load_planner;
use crate::errors::AppResult;
use crate::ui::summary_view::render_dashboard;
use crate::utils::date;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { date: d } = cmd {
        let today = date::parse_optional_date(d.as_ref())?.unwrap_or_else(date::today);

        let mut pool = DbPool::open_ready(&cfg.database)?;
        let planner = load_planner(&mut pool)?;

        let dash = build_dashboard(&planner, today, &Local);
        print!("{}", render_dashboard(&dash, &Local));
    }
    Ok(())
}
