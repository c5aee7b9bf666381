//! Time utilities: creation stamps for stored artworks.

use chrono::{Local, NaiveDateTime};

/// Layout of `artworks.created_at`.
pub const CREATED_AT_FORMAT: &str = "%d.%m.%Y %H:%M";

pub fn format_created_at(dt: &NaiveDateTime) -> String {
    dt.format(CREATED_AT_FORMAT).to_string()
}

/// Current local time as stored in `created_at`.
pub fn now_created_at() -> String {
    format_created_at(&Local::now().naive_local())
}

pub fn parse_created_at(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, CREATED_AT_FORMAT).ok()
}
