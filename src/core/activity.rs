//! Activity log sinks.
//!
//! The store receives one of these at construction time and writes a line
//! after every successful add or delete. The file format is:
//!
//! `2025-03-14 10:22:05,123 - INFO - Added artwork: Starry Night by Van Gogh`

use chrono::Local;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Timestamp layout of every activity line.
pub const ACTIVITY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "INFO" => Some(Level::Info),
            "WARNING" => Some(Level::Warning),
            "ERROR" => Some(Level::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write-only side channel for store activity.
pub trait ActivityLog: Send + Sync {
    fn record(&self, level: Level, message: &str) -> io::Result<()>;

    fn info(&self, message: &str) -> io::Result<()> {
        self.record(Level::Info, message)
    }
}

/// Appends formatted lines to a file, creating it on first write.
#[derive(Debug, Clone)]
pub struct FileActivityLog {
    path: PathBuf,
}

impl FileActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ActivityLog for FileActivityLog {
    fn record(&self, level: Level, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let now = Local::now().format(ACTIVITY_TIME_FORMAT);
        writeln!(file, "{now} - {level} - {message}")
    }
}

/// Keeps entries in memory. Used by tests and embedders that render
/// activity themselves.
#[derive(Debug, Default)]
pub struct MemoryActivityLog {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, m)| m).collect()
    }
}

impl ActivityLog for MemoryActivityLog {
    fn record(&self, level: Level, message: &str) -> io::Result<()> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| io::Error::other("activity log lock poisoned"))?;
        guard.push((level, message.to_string()));
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopActivityLog;

impl ActivityLog for NoopActivityLog {
    fn record(&self, _level: Level, _message: &str) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn file_log_appends_formatted_lines() {
        let mut path = env::temp_dir();
        path.push("rgallery_activity_unit.log");
        fs::remove_file(&path).ok();

        let log = FileActivityLog::new(&path);
        log.info("Added artwork: A by B").unwrap();
        log.record(Level::Warning, "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - INFO - Added artwork: A by B"));
        assert!(lines[1].ends_with(" - WARNING - second"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn memory_log_keeps_order() {
        let log = MemoryActivityLog::new();
        log.info("one").unwrap();
        log.record(Level::Error, "two").unwrap();
        assert_eq!(
            log.entries(),
            vec![(Level::Info, "one".into()), (Level::Error, "two".into())]
        );
    }

    #[test]
    fn level_names_round_trip() {
        for l in [Level::Info, Level::Warning, Level::Error] {
            assert_eq!(Level::from_str_opt(l.as_str()), Some(l));
        }
        assert_eq!(Level::from_str_opt("DEBUG"), None);
    }
}
