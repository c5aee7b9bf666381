use crate::cli::parser::Commands;
use crate::core::backup::BackupLogic;
use crate::db::ArtworkStore;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, store: &ArtworkStore) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        BackupLogic::backup(store.path(), Path::new(file), *compress, *force)?;
    }

    Ok(())
}
