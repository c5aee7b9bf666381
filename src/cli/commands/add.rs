use crate::cli::parser::Commands;
use crate::db::{ArtworkStore, GalleryError};
use crate::errors::{AppError, AppResult};
use crate::models::Artwork;
use crate::ui::messages::{error, success, warning};

const NOT_A_NUMBER: &str = "year and price must be numbers";

fn parse_year(raw: &str) -> AppResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::InvalidInput(NOT_A_NUMBER.to_string()))
}

fn parse_price(raw: &str) -> AppResult<f64> {
    match raw.trim().parse::<f64>() {
        // "inf" and "NaN" parse as f64 but are not prices
        Ok(p) if p.is_finite() => Ok(p),
        _ => Err(AppError::InvalidInput(NOT_A_NUMBER.to_string())),
    }
}

/// Report an activity-log write the store could not complete.
pub(crate) fn warn_activity_failure(store: &ArtworkStore) {
    if let Some(e) = store.take_activity_error() {
        warning(format!("Failed to write activity log: {e}"));
    }
}

/// Add an artwork to the collection.
pub fn handle(cmd: &Commands, store: &ArtworkStore) -> AppResult<()> {
    if let Commands::Add {
        title,
        artist,
        year,
        style,
        price,
    } = cmd
    {
        //
        // 1. Parse numeric fields
        //
        let year = parse_year(year)?;
        let price = parse_price(price)?;

        let artwork = Artwork::new(title.as_str(), artist.as_str(), year, style.as_str(), price);

        //
        // 2. Validate + insert
        //
        match store.add(&artwork) {
            Ok(id) => {
                success(format!(
                    "Artwork #{} \"{}\" by {} added.",
                    id, artwork.title, artwork.artist
                ));
                warn_activity_failure(store);
            }
            Err(e @ GalleryError::Validation(_)) => {
                warning("Artwork not saved: please correct the input and retry.");
                return Err(e.into());
            }
            Err(e @ GalleryError::Store(_)) => {
                error("Artwork not saved: the database could not be written.");
                return Err(e.into());
            }
        }
    }

    Ok(())
}
