//! Address and customer records as seen from outside the crate.

use phony_phones::{Address, Customer, EmailAddress, ValidationError};

mod support;
use support::fixtures::*;

#[test]
fn test_address_rendering() {
    assert_eq!(sample_address().to_string(), "Main Street 123, New York 10001");

    let address = Address::new("Rue de Rivoli", 99, "Paris", "75001").unwrap();
    assert_eq!(address.to_string(), "Rue de Rivoli 99, Paris 75001");
}

#[test]
fn test_customer_owns_address() {
    let customer = sample_customer();
    assert_eq!(customer.address(), &sample_address());
    assert_eq!(customer.email().domain(), "example.com");
}

#[test]
fn test_customer_rejects_invalid_input() {
    assert_eq!(
        Customer::new("", sample_address(), EmailAddress::new("a@b.co").unwrap()),
        Err(ValidationError::EmptyField("name"))
    );
    assert!(matches!(
        EmailAddress::new("johndoe.example.com"),
        Err(ValidationError::InvalidEmail(_))
    ));
}

#[test]
fn test_customer_json_round_trip() {
    let customer = sample_customer();
    let json = serde_json::to_string(&customer).unwrap();
    let parsed: Customer = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, customer);
}
