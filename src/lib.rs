//! rPlanner library root.
//! Exposes the CLI parser, the high-level run() function and the planner core
//! (calendar grid builder, in-memory repository, views).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let config_path = cli.config_path();

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, &config_path),
        Commands::Settings { .. } => {
            cli::commands::settings::handle(&cli.command, cfg, &config_path)
        }
        Commands::Subject { .. } => cli::commands::subject::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Done { .. } => cli::commands::done::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg),
        Commands::Dashboard { .. } => cli::commands::dashboard::handle(&cli.command, cfg),
        Commands::Reminders { .. } => cli::commands::reminders::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load(&cli.config_path())?;

    // --db wins over the configured database for this run only
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
