use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut pool = DbPool::open_ready(&cfg.database)?;
        let count = ExportLogic::export(&mut pool, *format, file, range.as_deref(), *force, &Local)?;

        if count > 0 {
            audit(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("{} assignments exported to {}", count, file),
            );
        }
    }
    Ok(())
}
