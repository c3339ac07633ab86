//! Customer model.

use super::address::Address;
use crate::domain::errors::{require_text, ModelResult, ValidationError};
use crate::domain::EmailAddress;
use serde::{Deserialize, Serialize};

/// A customer holding one or more plans. Customers have no identity beyond
/// their field values: two customers with equal fields are the same customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CustomerFields")]
pub struct Customer {
    name: String,
    address: Address,
    email: EmailAddress,
}

#[derive(Deserialize)]
struct CustomerFields {
    name: String,
    address: Address,
    email: EmailAddress,
}

impl TryFrom<CustomerFields> for Customer {
    type Error = ValidationError;

    fn try_from(fields: CustomerFields) -> Result<Self, Self::Error> {
        Customer::new(fields.name, fields.address, fields.email)
    }
}

impl Customer {
    /// Create a new customer.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the name is blank.
    pub fn new(name: impl Into<String>, address: Address, email: EmailAddress) -> ModelResult<Self> {
        Ok(Self {
            name: require_text("name", name.into())?,
            address,
            email,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}
