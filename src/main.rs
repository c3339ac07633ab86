//! PhonyPhones demo entry point.
//!
//! Builds one customer, one phone and one plan from literal sample data and
//! prints the result. Logs go to stderr; stdout carries only the demo output.

use anyhow::{Context, Result};
use phony_phones::{
    Address, Brand, Config, Customer, EmailAddress, Phone, Plan, StdoutPlanObserver,
    TracingPlanObserver,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over the configured level
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let customer = Customer::new(
        "John Doe",
        Address::new("Main Street", 123, "New York", "10001")?,
        EmailAddress::new("johndoe@example.com")?,
    )?;
    let phone = Phone::new(Brand::Apple, "iPhone 12", 999.99)?;

    let mut builder = Plan::builder(customer, phone, 99.99)
        .with_phone_included(true)
        .with_contract(config.default_contract)
        .with_currency(config.default_currency)
        .with_observer(&TracingPlanObserver);
    if config.announce_plans {
        builder = builder.with_observer(&StdoutPlanObserver);
    }
    let plan = builder.build()?;

    println!("{}", plan.summary());
    println!(
        "Total price: {}",
        plan.currency().format_amount(plan.total_price())
    );
    if let Some(end) = plan.end_date() {
        println!("Contract ends: {}", end.format("%Y-%m-%d"));
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&plan).context("Failed to render plan as JSON")?
    );

    Ok(())
}
