//! Artwork record, the only entity stored by rGallery.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: Option<i64>,    // ⇔ artworks.id (None until persisted)
    pub title: String,      // ⇔ artworks.title
    pub artist: String,     // ⇔ artworks.artist
    pub year: i32,          // ⇔ artworks.year
    pub style: String,      // ⇔ artworks.style
    pub price: f64,         // ⇔ artworks.price
    pub created_at: String, // ⇔ artworks.created_at (TEXT "DD.MM.YYYY HH:MM")
}

impl Artwork {
    /// Build a transient record: no id, no creation timestamp.
    /// Both are assigned by the store on insert.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        year: i32,
        style: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            artist: artist.into(),
            year,
            style: style.into(),
            price,
            created_at: String::new(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
