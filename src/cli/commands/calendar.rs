use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{Granularity, build_grid, shift};
use crate::db::pool::DbPool;
use crate::db::queries::load_planner;
use crate::errors::AppResult;
use crate::ui::calendar_view::{ViewStyle, render_grid};
use crate::utils::date;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { date: d, week, offset } = cmd {
        let granularity = if *week {
            Granularity::Week
        } else {
            Granularity::Month
        };

        let base = date::parse_optional_date(d.as_ref())?.unwrap_or_else(date::today);
        let reference = shift(base, granularity, *offset)?;

        let mut pool = DbPool::open_ready(&cfg.database)?;
        let planner = load_planner(&mut pool)?;

        let cells = build_grid(granularity, reference, planner.assignments(), &Local)?;

        let style = ViewStyle {
            theme: cfg.theme,
            completed: cfg.completed_style,
            month_preview: cfg.month_preview,
        };

        print!(
            "{}",
            render_grid(granularity, reference, &cells, planner.subjects(), &style)
        );
    }
    Ok(())
}
