//! Domain validation errors.

use std::fmt;

/// Errors that can occur while constructing domain records and value objects.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only.
    EmptyField(&'static str),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// House numbers start at 1.
    InvalidHouseNumber(u32),

    /// A price is negative, NaN or infinite.
    InvalidAmount { field: &'static str, value: f64 },

    /// The brand is not carried in the inventory.
    UnknownBrand(String),

    /// The currency is not accepted for plans.
    UnknownCurrency(String),

    /// Contracts only run for 6, 12 or 24 months.
    InvalidContractLength(String),

    /// The string does not look like a generated serial number.
    InvalidSerialNumber(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{} cannot be empty", field),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidHouseNumber(number) => {
                write!(f, "Invalid house number: {} (must be at least 1)", number)
            }
            Self::InvalidAmount { field, value } => {
                write!(f, "Invalid {}: {} (must be a finite, non-negative amount)", field, value)
            }
            Self::UnknownBrand(brand) => write!(f, "Unknown phone brand: {}", brand),
            Self::UnknownCurrency(currency) => write!(f, "Unsupported currency: {}", currency),
            Self::InvalidContractLength(length) => {
                write!(f, "Invalid contract length: {} (expected 6, 12 or 24 months)", length)
            }
            Self::InvalidSerialNumber(serial) => write!(f, "Invalid serial number: {}", serial),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Convenience type alias for Results with ValidationError
pub type ModelResult<T> = Result<T, ValidationError>;

/// Reject blank text fields. The value is returned as given, not trimmed.
pub(crate) fn require_text(field: &'static str, value: String) -> ModelResult<String> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value)
}

/// Reject amounts that are NaN, infinite or negative.
pub(crate) fn require_amount(field: &'static str, value: f64) -> ModelResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidAmount { field, value });
    }
    Ok(value)
}
