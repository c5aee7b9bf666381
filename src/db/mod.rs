pub mod schema;
pub mod stats;
pub mod store;

pub use store::{ArtworkStore, GalleryError, GalleryResult, StoreError, StoreResult};
