//! Path utilities: expand ~ in configured paths.

use std::fs;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve `path` to an absolute form even when the file does not exist yet:
/// the parent is canonicalized and the file name appended.
fn resolve(path: &Path) -> Option<PathBuf> {
    if let Ok(p) = fs::canonicalize(path) {
        return Some(p);
    }

    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::canonicalize(parent).ok().map(|dir| dir.join(name))
}

/// True when `a` and `b` name the same file (symlinks and `..` resolved).
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (resolve(a), resolve(b)) {
        (Some(ra), Some(rb)) => ra == rb,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("art_gallery.db"), PathBuf::from("art_gallery.db"));
        assert_eq!(expand_tilde("/tmp/x.db"), PathBuf::from("/tmp/x.db"));
    }

    #[test]
    fn same_file_sees_through_relative_segments() {
        let mut dir = std::env::temp_dir();
        dir.push("rgallery_same_file");
        fs::create_dir_all(dir.join("sub")).unwrap();
        let db = dir.join("art.db");
        fs::write(&db, b"x").unwrap();

        assert!(same_file(&db, &dir.join("sub").join("..").join("art.db")));
        assert!(!same_file(&db, &dir.join("copy.db")));
        // target not created yet
        assert!(same_file(&dir.join("new.db"), &dir.join("sub/../new.db")));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn tilde_goes_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/g.db"), home.join("g.db"));
        }
    }
}
