//! rGallery library root.
//! Exposes the artwork store, its validator, the CLI parser and run().

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
use crate::core::activity::FileActivityLog;
use db::ArtworkStore;
use errors::AppResult;
use std::sync::Arc;

pub use crate::core::activity::{ActivityLog, Level, MemoryActivityLog, NoopActivityLog};
pub use crate::core::validator::{ValidationError, validate};
pub use db::{GalleryError, GalleryResult, StoreError, StoreResult};
pub use models::Artwork;

/// Build the single store shared by every command.
pub fn build_store(cfg: &Config) -> ArtworkStore {
    let activity = Arc::new(FileActivityLog::new(cfg.activity_log_path()));
    ArtworkStore::new(cfg.database_path(), activity)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, store: &ArtworkStore) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg, store),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, store),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, store),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, store),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, store),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, store),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, store),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line overrides win over the config file
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(custom_log) = &cli.activity_log {
        cfg.activity_log = custom_log.clone();
    }

    let store = build_store(&cfg);
    dispatch(&cli, &cfg, &store)
}
