use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success, warning};
use std::fs;
use crate::utils::path::same_file;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest`, optionally replacing the copy
    /// with a `.zip` archive. Returns the path actually written, or `None`
    /// when the user declined to overwrite.
    pub fn backup(src: &Path, dest: &Path, compress: bool, force: bool) -> AppResult<Option<PathBuf>> {
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if same_file(&final_target, src) {
            return Err(AppError::InvalidInput(format!(
                "backup target '{}' is the database itself",
                final_target.display()
            )));
        }

        if final_target.exists()
            && !force
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite it?",
                final_target.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        if compress {
            compress_into(src, &final_target)?;
        } else {
            fs::copy(src, &final_target)?;
        }

        success(format!("Backup created: {}", final_target.display()));
        Ok(Some(final_target))
    }
}

/// Write `src` as the single entry of a deflated zip archive.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = match src.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => {
            warning("Database path has no file name, using 'gallery.db' inside the archive");
            "gallery.db".to_string()
        }
    };

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
