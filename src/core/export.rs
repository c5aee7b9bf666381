use crate::db::ArtworkStore;
use crate::errors::AppResult;
use crate::export::{ArtworkExport, ExportFormat, ensure_writable, export_csv, export_json};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Dump every stored artwork to `file`, newest first. Returns the row count.
    pub fn export(
        store: &ArtworkStore,
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(file, store.path(), force)?;

        let rows: Vec<ArtworkExport> = store.list_all()?.iter().map(ArtworkExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, file)?,
            ExportFormat::Json => export_json(&rows, file)?,
        }

        Ok(rows.len())
    }
}
