use crate::models::Artwork;
use serde::Serialize;

/// Flat row written by CSV and JSON exports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtworkExport {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub year: i32,
    pub style: String,
    pub price: f64,
    pub created_at: String,
}

impl From<&Artwork> for ArtworkExport {
    fn from(a: &Artwork) -> Self {
        Self {
            // rows come from the store, so the id is always set
            id: a.id.unwrap_or_default(),
            title: a.title.clone(),
            artist: a.artist.clone(),
            year: a.year,
            style: a.style.clone(),
            price: a.price,
            created_at: a.created_at.clone(),
        }
    }
}
