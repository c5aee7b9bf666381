use crate::cli::parser::Commands;
use crate::core::export::ExportLogic;
use crate::db::ArtworkStore;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, store: &ArtworkStore) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        ExportLogic::export(store, *format, Path::new(file), *force)?;
    }
    Ok(())
}
