use crate::db::schema::table_exists;
use crate::db::store::{ArtworkStore, StoreResult};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

#[derive(Debug, Clone, PartialEq)]
pub struct DbStats {
    pub path: String,
    pub size_bytes: u64,
    pub artworks: i64,
    pub last_assigned_id: Option<i64>,
    pub oldest_year: Option<i32>,
    pub newest_year: Option<i32>,
}

pub fn collect(store: &ArtworkStore) -> StoreResult<DbStats> {
    store.with_conn(|conn| {
        let artworks: i64 = conn.query_row("SELECT COUNT(*) FROM artworks", [], |row| row.get(0))?;

        // sqlite_sequence keeps the high-water mark even after deletes;
        // it only appears after the first AUTOINCREMENT insert
        let last_assigned_id: Option<i64> = if table_exists(conn, "sqlite_sequence")? {
            conn.query_row(
                "SELECT seq FROM sqlite_sequence WHERE name = 'artworks'",
                [],
                |row| row.get(0),
            )
            .optional()?
        } else {
            None
        };

        let (oldest_year, newest_year): (Option<i32>, Option<i32>) = conn.query_row(
            "SELECT MIN(year), MAX(year) FROM artworks",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        let path = store.path().to_string_lossy().to_string();
        let size_bytes = fs::metadata(store.path()).map(|m| m.len()).unwrap_or(0);

        Ok(DbStats {
            path,
            size_bytes,
            artworks,
            last_assigned_id,
            oldest_year,
            newest_year,
        })
    })
}

/// Run `PRAGMA integrity_check` and return its first line ("ok" when healthy).
pub fn integrity_check(store: &ArtworkStore) -> StoreResult<String> {
    store.with_conn(|conn| conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0)))
}

pub fn vacuum(store: &ArtworkStore) -> StoreResult<()> {
    store.with_conn(|conn| conn.execute_batch("VACUUM;"))
}

pub fn print_db_info(stats: &DbStats) {
    println!();

    let file_mb = (stats.size_bytes as f64) / (1024.0 * 1024.0);
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, stats.path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
    println!(
        "{}• Total artworks:{} {}{}{}",
        CYAN, RESET, GREEN, stats.artworks, RESET
    );

    let fmt_opt = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!(
        "{}• Last assigned id:{} {}",
        CYAN,
        RESET,
        fmt_opt(stats.last_assigned_id)
    );
    println!("{}• Years:{}", CYAN, RESET);
    println!("    from: {}", fmt_opt(stats.oldest_year.map(i64::from)));
    println!("    to:   {}", fmt_opt(stats.newest_year.map(i64::from)));

    println!();
}
