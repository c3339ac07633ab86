//! Domain value objects and types.
//!
//! Type-safe wrappers for email addresses and phone serial numbers, plus the
//! validation error shared by every constructor in the crate.

pub mod email;
pub mod errors;
pub mod serial_number;

pub use email::EmailAddress;
pub use errors::{ModelResult, ValidationError};
pub use serial_number::{generate_serial_number, generate_serial_number_with_rng, SerialNumber};
