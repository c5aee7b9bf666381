//! Unified application error type.
//! The store speaks `GalleryError`/`StoreError`; the CLI folds them into
//! AppError so every command reports failures through main() the same way.

use crate::db::{GalleryError, StoreError};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Artwork store
    // ---------------------------
    #[error("{0}")]
    Gallery(#[from] GalleryError),

    #[error("{0}")]
    Store(#[from] StoreError),

    // ---------------------------
    // User input / config / export
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
