use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grouping::{filter_pending, group_by_subject};
use crate::db::pool::DbPool;
use crate::db::queries::load_planner;
use crate::errors::AppResult;
use crate::models::Assignment;
use crate::ui::messages::header;
use crate::ui::subject_view::render_subject_groups;
use crate::utils::date::period_bounds;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, pending } = cmd {
        let bounds = match period {
            Some(p) => period_bounds(p)?,
            None => None,
        };

        let mut pool = DbPool::open_ready(&cfg.database)?;
        let planner = load_planner(&mut pool)?;

        let selected: Vec<Assignment> = planner
            .assignments()
            .iter()
            .filter(|a| match bounds {
                Some((start, end)) => {
                    let d = a.due_day(&Local);
                    d >= start && d <= end
                }
                None => true,
            })
            .cloned()
            .collect();

        let mut groups = group_by_subject(&selected, planner.subjects());
        if *pending {
            groups = filter_pending(groups);
        }

        header("📚 Assignments by Subject");
        print!("{}", render_subject_groups(&groups, &cfg.completed_style, &Local));
    }
    Ok(())
}
