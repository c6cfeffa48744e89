//! Field rules for video game records.
//!
//! Each rule returns a [`ValidationError`] whose `code` names the kind of
//! violation (`required`, `length`, `range`) and whose `message` is safe to
//! show to API callers. Callers attach the error to the field it belongs to.

use std::borrow::Cow;

use rust_decimal::{Decimal, RoundingStrategy};
use validator::ValidationError;

/// Entity name used in not-found errors and log fields.
pub const ENTITY_NAME: &str = "VideoGame";

pub const TITLE_MAX_LEN: usize = 200;
pub const GENRE_MAX_LEN: usize = 50;
pub const PUBLISHER_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

pub const MIN_RATING: Decimal = Decimal::ZERO;
pub const MAX_RATING: Decimal = Decimal::TEN;
/// Digits kept after the decimal point for `rating` (NUMERIC(3,1)).
pub const RATING_SCALE: u32 = 1;

pub const MIN_PRICE: Decimal = Decimal::ZERO;
/// 9999.99
pub const MAX_PRICE: Decimal = Decimal::from_parts(999_999, 0, 0, false, 2);
/// Digits kept after the decimal point for `price` (NUMERIC(6,2)).
pub const PRICE_SCALE: u32 = 2;

fn violation(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

/// Title must be present, not blank, and at most [`TITLE_MAX_LEN`] characters.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(violation("required", "Title is required".to_string()));
    }
    validate_max_len("Title", title, TITLE_MAX_LEN)
}

/// Optional free-text fields only have an upper length bound.
pub fn validate_optional_text(
    label: &str,
    value: Option<&str>,
    max_len: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(text) => validate_max_len(label, text, max_len),
        None => Ok(()),
    }
}

fn validate_max_len(label: &str, value: &str, max_len: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(violation(
            "length",
            format!("{label} must be at most {max_len} characters, got {len}"),
        ));
    }
    Ok(())
}

pub fn validate_rating(rating: Decimal) -> Result<(), ValidationError> {
    if rating < MIN_RATING || rating > MAX_RATING {
        return Err(violation(
            "range",
            format!("Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"),
        ));
    }
    Ok(())
}

pub fn validate_price(price: Decimal) -> Result<(), ValidationError> {
    if price < MIN_PRICE || price > MAX_PRICE {
        return Err(violation(
            "range",
            format!("Price must be between {MIN_PRICE} and {MAX_PRICE}, got {price}"),
        ));
    }
    Ok(())
}

/// Round a rating to its stored precision.
pub fn round_rating(rating: Decimal) -> Decimal {
    rating.round_dp_with_strategy(RATING_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a price to its stored precision.
pub fn round_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
