//! Postal address of a customer.

use crate::domain::errors::{require_text, ModelResult, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A street address. Displays as `"{street} {number}, {city} {postal_code}"`.
///
/// # Example
///
/// ```
/// use phony_phones::Address;
///
/// let address = Address::new("Main Street", 123, "New York", "10001").unwrap();
/// assert_eq!(address.to_string(), "Main Street 123, New York 10001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AddressFields")]
pub struct Address {
    street: String,
    number: u32,
    city: String,
    postal_code: String,
}

/// Unvalidated wire shape; deserialization funnels through `Address::new`.
#[derive(Deserialize)]
struct AddressFields {
    street: String,
    number: u32,
    city: String,
    postal_code: String,
}

impl TryFrom<AddressFields> for Address {
    type Error = ValidationError;

    fn try_from(fields: AddressFields) -> Result<Self, Self::Error> {
        Address::new(fields.street, fields.number, fields.city, fields.postal_code)
    }
}

impl Address {
    /// Create a new address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` for a blank street, city or postal
    /// code, and `ValidationError::InvalidHouseNumber` for house number 0.
    pub fn new(
        street: impl Into<String>,
        number: u32,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> ModelResult<Self> {
        if number == 0 {
            return Err(ValidationError::InvalidHouseNumber(number));
        }

        Ok(Self {
            street: require_text("street", street.into())?,
            number,
            city: require_text("city", city.into())?,
            postal_code: require_text("postal code", postal_code.into())?,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            self.street, self.number, self.city, self.postal_code
        )
    }
}
