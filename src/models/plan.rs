//! Subscription plan linking a customer to a phone.

use super::contract::Contract;
use super::currency::Currency;
use super::customer::Customer;
use super::phone::Phone;
use crate::domain::errors::{require_amount, ModelResult};
use crate::observability::PlanObserver;
use chrono::{DateTime, Months, Utc};
use serde::Serialize;
use std::fmt;

/// A subscription plan.
///
/// Built through [`Plan::builder`]; every optional term has a default and the
/// start date defaults to the moment the plan is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    customer: Customer,
    phone: Phone,
    monthly_price: f64,
    phone_included: bool,
    start_date: DateTime<Utc>,
    contract: Contract,
    currency: Currency,
}

impl Plan {
    /// Start building a plan for `customer` on `phone` at `monthly_price`.
    pub fn builder<'a>(customer: Customer, phone: Phone, monthly_price: f64) -> PlanBuilder<'a> {
        PlanBuilder::new(customer, phone, monthly_price)
    }

    /// Price over the whole contract: monthly price times contract months.
    pub fn total_price(&self) -> f64 {
        self.monthly_price * f64::from(self.contract.months())
    }

    /// Date the contract runs out, in calendar months from the start date.
    ///
    /// `None` only if the result would fall outside chrono's date range.
    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
            .checked_add_months(Months::new(self.contract.months()))
    }

    /// One-line description, e.g.
    /// `John Doe: Apple iPhone 12, 12 months at $99.99/month (total $1199.88)`.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} {}, {} at {}/month (total {})",
            self.customer.name(),
            self.phone.brand(),
            self.phone.model(),
            self.contract,
            self.currency.format_amount(self.monthly_price),
            self.currency.format_amount(self.total_price()),
        )
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn monthly_price(&self) -> f64 {
        self.monthly_price
    }

    pub fn phone_included(&self) -> bool {
        self.phone_included
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn contract(&self) -> Contract {
        self.contract
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> at {} | {} {} (serial {}, {}) | {}/month over {} starting {} | total {} {}",
            self.customer.name(),
            self.customer.email(),
            self.customer.address(),
            self.phone.brand(),
            self.phone.model(),
            self.phone.serial_number(),
            if self.phone_included {
                "phone included"
            } else {
                "SIM only"
            },
            self.currency.format_amount(self.monthly_price),
            self.contract,
            self.start_date.format("%Y-%m-%d"),
            self.currency.format_amount(self.total_price()),
            self.currency,
        )
    }
}

/// Builder for [`Plan`].
///
/// Observers are borrowed for the duration of the build and notified once,
/// after validation succeeds.
pub struct PlanBuilder<'a> {
    customer: Customer,
    phone: Phone,
    monthly_price: f64,
    phone_included: bool,
    start_date: Option<DateTime<Utc>>,
    contract: Contract,
    currency: Currency,
    observers: Vec<&'a dyn PlanObserver>,
}

impl<'a> PlanBuilder<'a> {
    pub fn new(customer: Customer, phone: Phone, monthly_price: f64) -> Self {
        Self {
            customer,
            phone,
            monthly_price,
            phone_included: true,
            start_date: None,
            contract: Contract::default(),
            currency: Currency::default(),
            observers: Vec::new(),
        }
    }

    pub fn with_phone_included(mut self, phone_included: bool) -> Self {
        self.phone_included = phone_included;
        self
    }

    /// Fix the start date instead of using the build time.
    pub fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.contract = contract;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Register a hook to run once the plan has been built.
    pub fn with_observer(mut self, observer: &'a dyn PlanObserver) -> Self {
        self.observers.push(observer);
        self
    }

    /// Validate the terms and produce the plan.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAmount` if the monthly price is
    /// negative or not finite. Observers are not notified on error.
    pub fn build(self) -> ModelResult<Plan> {
        let monthly_price = require_amount("monthly price", self.monthly_price)?;

        let plan = Plan {
            customer: self.customer,
            phone: self.phone,
            monthly_price,
            phone_included: self.phone_included,
            start_date: self.start_date.unwrap_or_else(Utc::now),
            contract: self.contract,
            currency: self.currency,
        };

        for observer in &self.observers {
            observer.plan_created(&plan);
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, ValidationError};
    use crate::models::{Address, Brand};
    use chrono::TimeZone;
    use std::cell::Cell;

    fn customer() -> Customer {
        Customer::new(
            "John Doe",
            Address::new("Main Street", 123, "New York", "10001").unwrap(),
            EmailAddress::new("johndoe@example.com").unwrap(),
        )
        .unwrap()
    }

    fn phone() -> Phone {
        Phone::new(Brand::Apple, "iPhone 12", 999.99).unwrap()
    }

    #[test]
    fn test_plan_defaults() {
        let before = Utc::now();
        let plan = Plan::builder(customer(), phone(), 99.99).build().unwrap();
        let after = Utc::now();

        assert!(plan.phone_included());
        assert_eq!(plan.contract(), Contract::Medium);
        assert_eq!(plan.currency(), Currency::Usd);
        assert!(plan.start_date() >= before && plan.start_date() <= after);
    }

    #[test]
    fn test_total_price_medium() {
        let plan = Plan::builder(customer(), phone(), 99.99)
            .with_contract(Contract::Medium)
            .build()
            .unwrap();
        assert!((plan.total_price() - 1199.88).abs() < 1e-9);
    }

    #[test]
    fn test_total_price_all_contracts() {
        for contract in Contract::ALL {
            let plan = Plan::builder(customer(), phone(), 25.0)
                .with_contract(contract)
                .build()
                .unwrap();
            assert_eq!(plan.total_price(), 25.0 * f64::from(contract.months()));
        }
    }

    #[test]
    fn test_end_date() {
        let start = Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap();
        let plan = Plan::builder(customer(), phone(), 10.0)
            .with_start_date(start)
            .with_contract(Contract::Minimum)
            .build()
            .unwrap();
        assert_eq!(
            plan.end_date(),
            Some(Utc.with_ymd_and_hms(2024, 7, 31, 9, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_rejects_invalid_monthly_price() {
        let result = Plan::builder(customer(), phone(), f64::NAN).build();
        assert!(matches!(
            result,
            Err(ValidationError::InvalidAmount {
                field: "monthly price",
                ..
            })
        ));
    }

    #[test]
    fn test_observer_called_once() {
        let calls = Cell::new(0);
        let observer = |plan: &Plan| {
            assert_eq!(plan.customer().name(), "John Doe");
            calls.set(calls.get() + 1);
        };

        Plan::builder(customer(), phone(), 99.99)
            .with_observer(&observer)
            .build()
            .unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_observer_not_called_on_error() {
        let calls = Cell::new(0);
        let observer = |_: &Plan| calls.set(calls.get() + 1);

        let result = Plan::builder(customer(), phone(), -5.0)
            .with_observer(&observer)
            .build();
        assert!(result.is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_summary_and_display() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let plan = Plan::builder(customer(), phone(), 99.99)
            .with_start_date(start)
            .build()
            .unwrap();

        assert_eq!(
            plan.summary(),
            "John Doe: Apple iPhone 12, 12 months at $99.99/month (total $1199.88)"
        );

        let details = plan.to_string();
        assert!(details.contains("Main Street 123, New York 10001"));
        assert!(details.contains(plan.phone().serial_number().as_str()));
        assert!(details.contains("phone included"));
        assert!(details.contains("starting 2024-03-01"));
    }

    #[test]
    fn test_plan_serialization() {
        let plan = Plan::builder(customer(), phone(), 30.0)
            .with_contract(Contract::Maximum)
            .with_currency(Currency::Eur)
            .with_phone_included(false)
            .build()
            .unwrap();

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["contract"], 24);
        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["phone_included"], false);
        assert_eq!(json["customer"]["email"], "johndoe@example.com");
    }
}
