//! Input checks run before any write to the `artworks` table.

use crate::models::Artwork;
use chrono::{Datelike, Local};
use thiserror::Error;

/// Oldest accepted year of creation.
pub const MIN_YEAR: i32 = 100;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("title empty")]
    TitleEmpty,

    #[error("artist empty")]
    ArtistEmpty,

    #[error("invalid year: {year} (expected 100..={max})")]
    InvalidYear { year: i32, max: i32 },

    #[error("negative price: {0}")]
    NegativePrice(f64),
}

/// Validate against the current calendar year.
pub fn validate(artwork: &Artwork) -> Result<(), ValidationError> {
    validate_at(artwork, Local::now().year())
}

/// Validate with an explicit upper bound for `year`.
/// Checks run in order and stop at the first failure.
pub fn validate_at(artwork: &Artwork, current_year: i32) -> Result<(), ValidationError> {
    if artwork.title.trim().is_empty() {
        return Err(ValidationError::TitleEmpty);
    }

    if artwork.artist.trim().is_empty() {
        return Err(ValidationError::ArtistEmpty);
    }

    if artwork.year < MIN_YEAR || artwork.year > current_year {
        return Err(ValidationError::InvalidYear {
            year: artwork.year,
            max: current_year,
        });
    }

    if artwork.price.is_nan() || artwork.price < 0.0 {
        return Err(ValidationError::NegativePrice(artwork.price));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Artwork {
        Artwork::new("Starry Night", "Van Gogh", 1889, "Post-Impressionism", 100_000_000.0)
    }

    #[test]
    fn accepts_valid_record() {
        assert_eq!(validate_at(&sample(), 2025), Ok(()));
    }

    #[test]
    fn rejects_blank_title() {
        let mut a = sample();
        a.title = "   ".into();
        assert_eq!(validate_at(&a, 2025), Err(ValidationError::TitleEmpty));
    }

    #[test]
    fn rejects_blank_artist() {
        let mut a = sample();
        a.artist = String::new();
        assert_eq!(validate_at(&a, 2025), Err(ValidationError::ArtistEmpty));
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let mut a = sample();
        a.year = 100;
        assert!(validate_at(&a, 2025).is_ok());
        a.year = 2025;
        assert!(validate_at(&a, 2025).is_ok());

        a.year = 99;
        assert_eq!(
            validate_at(&a, 2025),
            Err(ValidationError::InvalidYear { year: 99, max: 2025 })
        );
        a.year = 2026;
        assert!(matches!(
            validate_at(&a, 2025),
            Err(ValidationError::InvalidYear { .. })
        ));
    }

    #[test]
    fn rejects_negative_and_nan_price() {
        let mut a = sample();
        a.price = -0.01;
        assert_eq!(validate_at(&a, 2025), Err(ValidationError::NegativePrice(-0.01)));

        a.price = f64::NAN;
        assert!(matches!(
            validate_at(&a, 2025),
            Err(ValidationError::NegativePrice(_))
        ));

        a.price = 0.0;
        assert!(validate_at(&a, 2025).is_ok());
    }

    #[test]
    fn first_failure_wins() {
        let a = Artwork::new("", "", 1, "", -5.0);
        assert_eq!(validate_at(&a, 2025), Err(ValidationError::TitleEmpty));
    }

    #[test]
    fn current_year_is_accepted() {
        let mut a = sample();
        a.year = Local::now().year();
        assert!(validate(&a).is_ok());
        a.year += 1;
        assert!(validate(&a).is_err());
    }
}
