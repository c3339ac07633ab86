//! Phone model for the inventory.

use super::brand::Brand;
use crate::domain::errors::{require_amount, require_text, ModelResult};
use crate::domain::{generate_serial_number_with_rng, SerialNumber};
use rand::Rng;
use serde::Serialize;

/// A phone in stock. The serial number is minted when the phone is created
/// and cannot be supplied or changed by callers.
///
/// Only `Serialize` is implemented; a phone is never rebuilt from external
/// data because that would let the serial number be injected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phone {
    brand: Brand,
    model: String,
    price: f64,
    serial_number: SerialNumber,
}

impl Phone {
    /// Create a new phone with a freshly generated serial number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` for a blank model and
    /// `ValidationError::InvalidAmount` for a negative or non-finite price.
    pub fn new(brand: Brand, model: impl Into<String>, price: f64) -> ModelResult<Self> {
        Self::with_rng(brand, model, price, &mut rand::thread_rng())
    }

    /// Same as [`Phone::new`] but draws the serial digits from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        brand: Brand,
        model: impl Into<String>,
        price: f64,
        rng: &mut R,
    ) -> ModelResult<Self> {
        let model = require_text("model", model.into())?;
        let price = require_amount("price", price)?;
        let serial_number = generate_serial_number_with_rng(brand.as_str(), &model, rng)?;

        tracing::debug!(
            brand = %brand,
            model = %model,
            serial_number = %serial_number,
            "Phone registered"
        );

        Ok(Self {
            brand,
            model,
            price,
            serial_number,
        })
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn serial_number(&self) -> &SerialNumber {
        &self.serial_number
    }
}
