use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::shared::constants::{MAX_MONEY_CENTS, MONEY_SCALE};

lazy_static! {
    /// Regex for a well-formed slug
    /// Must be lowercase alphanumeric with single hyphens between segments
    /// - Valid: "zapatos-deportivos", "shoes-2", "a"
    /// - Invalid: "-shoes", "shoes-", "shoes--2", "Shoes", "shoes_2"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Reject strings made only of whitespace (length rules alone accept them).
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Money amounts must fit a `NUMERIC(10, 2)` column: non-negative, at most
/// 99,999,999.99, and no more than two decimal places.
pub fn validate_money(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative").with_message("must not be negative".into()));
    }
    if *value > Decimal::new(MAX_MONEY_CENTS, MONEY_SCALE) {
        return Err(ValidationError::new("too_large")
            .with_message("must not exceed 99999999.99".into()));
    }
    // Trailing zeros ("10.500") are fine
    if value.normalize().scale() > MONEY_SCALE {
        return Err(ValidationError::new("scale")
            .with_message("must have at most 2 decimal places".into()));
    }
    Ok(())
}
