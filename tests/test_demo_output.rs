//! The demo plan as announced on stdout.

use chrono::{TimeZone, Utc};
use phony_phones::{Contract, Currency, Plan, StdoutPlanObserver};

mod support;
use support::fixtures::*;

/// Default demo settings: announcement lines followed by the summary.
#[test]
fn test_demo_plan_announcement() {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let plan = Plan::builder(sample_customer(), sample_phone(), 99.99)
        .with_phone_included(true)
        .with_contract(Contract::Medium)
        .with_currency(Currency::Usd)
        .with_start_date(start)
        .build()
        .unwrap();

    let serial = plan.phone().serial_number().to_string();
    let expected = format!(
        "Plan for John Doe created.\n\
         Plan details: John Doe <johndoe@example.com> at Main Street 123, New York 10001 \
         | Apple iPhone 12 (serial {}, phone included) \
         | $99.99/month over 12 months starting 2024-03-01 | total $1199.88 USD",
        serial
    );
    assert_eq!(StdoutPlanObserver::render(&plan), expected);

    assert_eq!(
        plan.summary(),
        "John Doe: Apple iPhone 12, 12 months at $99.99/month (total $1199.88)"
    );
    assert_eq!(
        plan.end_date().map(|d| d.format("%Y-%m-%d").to_string()),
        Some("2025-03-01".to_string())
    );
}
