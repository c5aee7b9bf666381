//! Schema bootstrap for the gallery database.

use rusqlite::{Connection, OptionalExtension, Result};

pub const ARTWORKS_TABLE: &str = "artworks";

/// Create the `artworks` table if it is missing.
/// Safe to call on every connection.
pub fn ensure_artworks_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS artworks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            artist      TEXT NOT NULL,
            year        INTEGER NOT NULL,
            style       TEXT NOT NULL,
            price       REAL NOT NULL,
            created_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists in the connected database.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Return the column names of `artworks` in declaration order.
pub fn artworks_columns(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA table_info('artworks')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut out = Vec::new();
    for c in cols {
        out.push(c?);
    }
    Ok(out)
}
