pub mod artwork;

pub use artwork::Artwork;
