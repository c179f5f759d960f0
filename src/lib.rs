//! Pontolog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod clock;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Punch { .. } => cli::commands::punch::handle(&cli.command, cfg),
        Commands::Absence { .. } => cli::commands::absence::handle(&cli.command, cfg),
        Commands::Next => cli::commands::next::handle(cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; --db overrides the configured store path.
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
