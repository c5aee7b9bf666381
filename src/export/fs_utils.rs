// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use crate::utils::path::same_file;
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - missing file → Ok
/// - existing file and `force` → Ok
/// - existing file without `force` → ask the user
/// - `protected` (the live database) → never, even with `force`
pub(crate) fn ensure_writable(path: &Path, protected: &Path, force: bool) -> AppResult<()> {
    if same_file(path, protected) {
        return Err(AppError::InvalidInput(format!(
            "export target '{}' is the database itself",
            path.display()
        )));
    }

    if !path.exists() || force {
        return Ok(());
    }

    if confirm(&format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ))
    }
}
