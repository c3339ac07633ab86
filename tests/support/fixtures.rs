//! Test fixtures and sample data.
//!
//! Mirrors the demo data: John Doe on Main Street with an iPhone 12.

#![allow(dead_code)]

use phony_phones::{Address, Brand, Customer, EmailAddress, Phone};

/// The demo address, "Main Street 123, New York 10001".
pub fn sample_address() -> Address {
    Address::new("Main Street", 123, "New York", "10001").expect("valid sample address")
}

/// The demo customer.
pub fn sample_customer() -> Customer {
    Customer::new(
        "John Doe",
        sample_address(),
        EmailAddress::new("johndoe@example.com").expect("valid sample email"),
    )
    .expect("valid sample customer")
}

/// The demo phone, an Apple iPhone 12 at 999.99.
pub fn sample_phone() -> Phone {
    Phone::new(Brand::Apple, "iPhone 12", 999.99).expect("valid sample phone")
}

/// One model per brand, used for serial number checks.
pub fn catalogue() -> Vec<(Brand, &'static str)> {
    vec![
        (Brand::Apple, "iPhone 15 Pro"),
        (Brand::Samsung, "Galaxy S24"),
        (Brand::Google, "Pixel 8"),
        (Brand::Huawei, "P60"),
        (Brand::Xiaomi, "Redmi Note 13"),
        (Brand::Motorola, "Edge 40"),
    ]
}
