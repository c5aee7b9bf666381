use crate::core::activity::Level;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;

const LINE_PATTERN: &str =
    r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3}) - ([A-Z]+) - (.*)$";

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub level: Level,
    pub message: String,
}

fn line_regex() -> AppResult<Regex> {
    Regex::new(LINE_PATTERN).map_err(|e| AppError::Other(format!("activity log pattern: {e}")))
}

fn parse_with(re: &Regex, line: &str) -> Option<ActivityEntry> {
    let caps = re.captures(line)?;
    Some(ActivityEntry {
        timestamp: caps[1].to_string(),
        level: Level::from_str_opt(&caps[2])?,
        message: caps[3].to_string(),
    })
}

/// Parse one activity line. Lines written by other tools yield `None`.
pub fn parse_line(line: &str) -> AppResult<Option<ActivityEntry>> {
    Ok(parse_with(&line_regex()?, line))
}

/// Read every well-formed entry. A missing file has no entries.
pub fn read_entries(path: &Path) -> AppResult<Vec<ActivityEntry>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let re = line_regex()?;
    Ok(content.lines().filter_map(|l| parse_with(&re, l)).collect())
}

fn color_for_level(level: Level) -> Colour {
    match level {
        Level::Info => Colour::Green,
        Level::Warning => Colour::Yellow,
        Level::Error => Colour::Red,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path, tail: Option<usize>) -> AppResult<()> {
        let entries = read_entries(path)?;

        if entries.is_empty() {
            info(format!("Activity log is empty: {}", path.display()));
            return Ok(());
        }

        let skip = tail.map_or(0, |n| entries.len().saturating_sub(n));

        println!("📜 Activity log ({}):\n", path.display());

        for (idx, entry) in entries.iter().enumerate().skip(skip) {
            let color = color_for_level(entry.level);
            println!(
                "{:>4}: {} | {:<7} => {}",
                idx + 1,
                entry.timestamp,
                color.paint(entry.level.as_str()),
                entry.message
            );
        }

        Ok(())
    }
}
