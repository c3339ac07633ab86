//! Data models for the PhonyPhones plan system.
//!
//! Customers, the phones in the inventory, and the plans that tie them
//! together, plus the closed sets of brands, contract lengths and currencies.

pub mod address;
pub mod brand;
pub mod contract;
pub mod currency;
pub mod customer;
pub mod phone;
pub mod plan;

pub use address::Address;
pub use brand::Brand;
pub use contract::Contract;
pub use currency::Currency;
pub use customer::Customer;
pub use phone::Phone;
pub use plan::{Plan, PlanBuilder};
