//! Phone serial numbers.
//!
//! A serial number reads `{brand initial}-{model prefix}-{8 digits}`, for
//! example `A-iPh-04821937`. The digits are random, so two phones of the same
//! model almost always differ, but nothing guarantees uniqueness.

use super::errors::{ModelResult, ValidationError};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of random digits at the end of every serial number.
pub const SERIAL_DIGITS: usize = 8;

/// Number of model characters kept in the serial prefix.
pub const MODEL_PREFIX_LEN: usize = 3;

static SERIAL_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<brand>.)-(?P<model>.{1,3})-(?P<digits>[0-9]{8})$")
        .expect("Failed to compile serial number regex")
});

/// A generated phone serial number.
///
/// There is intentionally no `Deserialize` impl: serial numbers are minted by
/// [`generate_serial_number`] and only checked by [`SerialNumber::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerialNumber(String);

impl SerialNumber {
    /// Check an externally supplied string against the serial number layout.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSerialNumber` when the string is not
    /// `<char>-<1..=3 chars>-<8 digits>`.
    pub fn parse(serial: &str) -> Result<Self, ValidationError> {
        if !SERIAL_NUMBER_REGEX.is_match(serial) {
            return Err(ValidationError::InvalidSerialNumber(serial.to_string()));
        }
        Ok(Self(serial.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character of the brand name.
    pub fn brand_initial(&self) -> char {
        // Both constructors guarantee a non-empty brand initial, so the
        // fallback is unreachable.
        self.0.chars().next().unwrap_or_default()
    }

    /// Leading characters of the model name (at most three).
    pub fn model_prefix(&self) -> &str {
        let start = self.brand_initial().len_utf8() + 1;
        let end = self.0.len().saturating_sub(SERIAL_DIGITS + 1);
        self.0.get(start..end).unwrap_or("")
    }

    /// The random digit suffix.
    pub fn digits(&self) -> &str {
        let start = self.0.len().saturating_sub(SERIAL_DIGITS);
        self.0.get(start..).unwrap_or("")
    }
}

impl Serialize for SerialNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SerialNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generate a serial number for a phone using the thread-local RNG.
///
/// # Errors
///
/// Returns `ValidationError::EmptyField` if the brand or model is blank.
pub fn generate_serial_number(brand: &str, model: &str) -> ModelResult<SerialNumber> {
    generate_serial_number_with_rng(brand, model, &mut rand::thread_rng())
}

/// Generate a serial number drawing the digits from `rng`.
///
/// Prefixes are taken per character, so multi-byte model names are never
/// split mid-codepoint. A model shorter than three characters is used whole.
///
/// # Errors
///
/// Returns `ValidationError::EmptyField` if the brand or model is blank.
pub fn generate_serial_number_with_rng<R: Rng + ?Sized>(
    brand: &str,
    model: &str,
    rng: &mut R,
) -> ModelResult<SerialNumber> {
    if brand.trim().is_empty() {
        return Err(ValidationError::EmptyField("brand"));
    }
    if model.trim().is_empty() {
        return Err(ValidationError::EmptyField("model"));
    }

    let initial: String = brand.chars().take(1).collect();
    let prefix: String = model.chars().take(MODEL_PREFIX_LEN).collect();
    let digits: String = (0..SERIAL_DIGITS)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();

    Ok(SerialNumber(format!("{}-{}-{}", initial, prefix, digits)))
}
