use crate::cli::parser::{Commands, SubjectAction};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_subject, load_planner, upsert_subject};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::ui::summary_view::render_subjects;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Subject { action } = cmd {
        let mut pool = DbPool::open_ready(&cfg.database)?;
        let mut planner = load_planner(&mut pool)?;

        match action {
            SubjectAction::Add { name, color } => {
                let previous = planner.add_subject(name, *color)?;
                let name = name.trim();
                upsert_subject(&pool.conn, name, *color)?;

                audit(&pool.conn, "subject_add", name, color.to_db_str());
                match previous {
                    Some(old) => success(format!(
                        "Subject '{}' recolored from {} to {}.",
                        name,
                        old.to_db_str(),
                        color.to_db_str()
                    )),
                    None => success(format!("Subject '{}' added ({}).", name, color.to_db_str())),
                }
            }
            SubjectAction::Del { name } => {
                let name = name.trim();
                planner.remove_subject(name)?;
                delete_subject(&pool.conn, name)?;

                audit(&pool.conn, "subject_del", name, "subject removed");
                success(format!("Subject '{}' removed.", name));

                let orphans = planner
                    .assignments()
                    .iter()
                    .filter(|a| a.subject == name)
                    .count();
                if orphans > 0 {
                    warning(format!(
                        "{} assignment(s) still reference '{}' and are hidden from the subject view.",
                        orphans, name
                    ));
                }
            }
            SubjectAction::List => {
                println!("🎨 Subjects:\n");
                print!("{}", render_subjects(planner.subjects()));
            }
        }
    }
    Ok(())
}
