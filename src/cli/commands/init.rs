use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command.
///
/// Creates the config directory and file (the file is skipped with `--test`),
/// then opens the database, which applies every pending migration and seeds
/// the default subjects.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let config_path = cli.config_path();

    println!("⚙️  Initializing rPlanner…");
    let db_path = Config::init_all(&config_path, cli.db.as_deref(), cli.test)?;

    let pool = DbPool::open_ready(&db_path)?;
    println!("✅ Database initialized at {}", db_path);

    audit(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", db_path),
    );

    success("rPlanner initialization completed!");
    Ok(())
}
