//! SQLite-backed artwork store.
//!
//! Every operation opens its own connection, runs its statement(s) and
//! drops the connection before returning. Writes run inside a transaction
//! that rolls back when dropped without `commit()`.

use crate::core::activity::{ActivityLog, Level};
use crate::core::validator::{ValidationError, validate};
use crate::db::schema::ensure_artworks_table;
use crate::models::Artwork;
use crate::utils::time::now_created_at;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

const ARTWORK_SELECT_SQL: &str =
    "SELECT id, title, artist, year, style, price, created_at FROM artworks";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot open database '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("cannot create database schema: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome of a write that validates first.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<rusqlite::Error> for GalleryError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(StoreError::Sqlite(value))
    }
}

pub type GalleryResult<T> = Result<T, GalleryError>;

pub struct ArtworkStore {
    path: PathBuf,
    activity: Arc<dyn ActivityLog>,
    activity_error: Mutex<Option<io::Error>>,
}

impl ArtworkStore {
    /// Build a store over `path`. Nothing is opened until the first call.
    pub fn new(path: impl Into<PathBuf>, activity: Arc<dyn ActivityLog>) -> Self {
        Self {
            path: path.into(),
            activity,
            activity_error: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a scoped connection with the schema in place.
    fn connect(&self) -> StoreResult<Connection> {
        let conn = Connection::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.display().to_string(),
            source,
        })?;

        ensure_artworks_table(&conn).map_err(StoreError::Schema)?;
        Ok(conn)
    }

    /// Helper to run a closure against a fresh connection.
    pub fn with_conn<F, T>(&self, func: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        let mut conn = self.connect()?;
        Ok(func(&mut conn)?)
    }

    /// Ensure the database file and the `artworks` table exist.
    pub fn initialize(&self) -> StoreResult<()> {
        self.connect().map(|_| ())
    }

    /// Validate and insert `artwork`, returning the assigned id.
    ///
    /// `id` and `created_at` on the input are ignored.
    pub fn add(&self, artwork: &Artwork) -> GalleryResult<i64> {
        validate(artwork)?;

        let mut conn = self.connect()?;
        let created_at = now_created_at();

        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO artworks (title, artist, year, style, price, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                artwork.title,
                artwork.artist,
                artwork.year,
                artwork.style,
                artwork.price,
                created_at,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        self.note(
            Level::Info,
            &format!("Added artwork: {} by {}", artwork.title, artwork.artist),
        );

        Ok(id)
    }

    /// All artworks, most recently inserted first.
    pub fn list_all(&self) -> StoreResult<Vec<Artwork>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{ARTWORK_SELECT_SQL} ORDER BY id DESC"))?;
        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Look up a single artwork.
    pub fn get(&self, id: i64) -> StoreResult<Option<Artwork>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{ARTWORK_SELECT_SQL} WHERE id = ?1"))?;
        Ok(stmt.query_row([id], map_row).optional()?)
    }

    /// Remove the artwork with `id`. Unknown ids are a no-op.
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let mut conn = self.connect()?;

        let tx = conn.transaction()?;
        tx.execute("DELETE FROM artworks WHERE id = ?1", params![id])?;
        tx.commit()?;

        self.note(Level::Info, &format!("Deleted artwork with ID: {id}"));
        Ok(())
    }

    /// Most recent activity-log failure since the last call, if any.
    /// The write it accompanied has already committed.
    pub fn take_activity_error(&self) -> Option<io::Error> {
        match self.activity_error.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }

    // Activity failures never undo a committed write; they are kept for
    // the caller to report.
    fn note(&self, level: Level, message: &str) {
        if let Err(e) = self.activity.record(level, message) {
            match self.activity_error.lock() {
                Ok(mut guard) => *guard = Some(e),
                Err(poisoned) => *poisoned.into_inner() = Some(e),
            }
        }
    }
}

pub fn map_row(row: &Row) -> rusqlite::Result<Artwork> {
    Ok(Artwork {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        artist: row.get("artist")?,
        year: row.get("year")?,
        style: row.get("style")?,
        price: row.get("price")?,
        created_at: row.get("created_at")?,
    })
}
