//! Field-level input checks applied before anything reaches the database.
//!
//! Client text fields are restricted to a character whitelist; the other
//! entities only require their fields to be present.

use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::prelude::Date;

use crate::errors::ModelError;

static CLIENT_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_ ]*$").expect("client text pattern compiles"));

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn require_non_empty(label: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{label} is required")));
    }
    Ok(())
}

/// Letters, digits, underscore and space only.
pub fn validate_client_text(label: &str, value: &str) -> Result<(), ModelError> {
    if !CLIENT_TEXT.is_match(value) {
        return Err(ModelError::Validation(format!("{label} may only contain letters, digits, '_' and spaces")));
    }
    Ok(())
}

/// Any finite value, negatives included. SQLite stores NaN as NULL.
pub fn validate_amount(label: &str, value: f64) -> Result<(), ModelError> {
    if !value.is_finite() {
        return Err(ModelError::Validation(format!("{label} must be a number")));
    }
    Ok(())
}

/// Parse a monetary amount typed into a form field.
pub fn parse_amount(label: &str, raw: &str) -> Result<f64, ModelError> {
    require_non_empty(label, raw)?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ModelError::Validation(format!("{label} must be a number")))?;
    validate_amount(label, value)?;
    Ok(value)
}

pub fn parse_id(label: &str, raw: &str) -> Result<i32, ModelError> {
    require_non_empty(label, raw)?;
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ModelError::Validation(format!("{label} must be a positive integer")))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(label: &str, raw: &str) -> Result<Date, ModelError> {
    require_non_empty(label, raw)?;
    Date::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ModelError::Validation(format!("{label} must be a date formatted YYYY-MM-DD")))
}
