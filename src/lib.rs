//! PhonyPhones - customers, phone inventory and subscription plans.
//!
//! A small, strongly typed model of a mobile-phone company's data. The only
//! computed behaviour is serial-number generation for phones and total-price
//! calculation for plans.
//!
//! # Architecture
//!
//! - **domain**: Value objects (email addresses, serial numbers) and validation errors
//! - **models**: Address, Customer, Phone, Plan and the Brand/Contract/Currency enums
//! - **observability**: Hooks notified when a plan is built
//! - **config**: Configuration from environment variables
//! - **error**: Error types for the application shell

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;

pub use config::Config;
pub use domain::{EmailAddress, SerialNumber, ValidationError};
pub use error::ConfigError;
pub use models::{Address, Brand, Contract, Currency, Customer, Phone, Plan, PlanBuilder};
pub use observability::{PlanObserver, StdoutPlanObserver, TracingPlanObserver};
