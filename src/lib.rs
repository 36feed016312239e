//! bikeshare library root.
//! Exposes the CLI parser, the high-level run() function, and the modules
//! behind the interactive explorer (dataset loading, statistics, session).

pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod errors;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match cli.command.as_ref().unwrap_or(&Commands::Explore) {
        Commands::Explore => cli::commands::explore::handle(cfg),
        Commands::Init => cli::commands::init::handle(cli),
        cmd @ Commands::Config { .. } => cli::commands::config::handle(cmd, cfg),
        Commands::Cities => cli::commands::cities::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line overrides win over the config file
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    if let Some(size) = cli.page_size {
        cfg.page_size = size;
    }
    cfg.validate()?;

    dispatch(&cli, &cfg)
}
