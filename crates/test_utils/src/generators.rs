//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money, Percentage};
use domain_premium::{QuoteRequest, Vehicle};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::{ClockFixtures, REFERENCE_YEAR};

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::CAD),
    ]
}

/// Strategy for vehicle values in cents, from 1,000.00 to 150,000.00
///
/// Together with [`year_strategy`] this keeps the applied rate below 100%.
pub fn vehicle_value_strategy() -> impl Strategy<Value = Decimal> {
    (100_000i64..15_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for broker fees in cents, up to 1,000.00
pub fn broker_fee_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for deductible fractions with two decimal places (0.00 to 1.00)
pub fn deductible_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=100i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Strategy for valid Percentage values with four decimal places
pub fn percentage_strategy() -> impl Strategy<Value = Percentage> {
    (0i64..=10_000i64).prop_map(|n| Percentage::new(Decimal::new(n, 4)).unwrap())
}

/// Strategy for manufacture years up to 60 years before the reference year
pub fn year_strategy() -> impl Strategy<Value = i32> {
    (REFERENCE_YEAR - 60)..=REFERENCE_YEAR
}

/// Strategy for valid USD vehicles evaluated in the reference year
pub fn vehicle_strategy() -> impl Strategy<Value = Vehicle> {
    (year_strategy(), vehicle_value_strategy(), deductible_strategy()).prop_map(
        |(year, value, deductible)| {
            Vehicle::with_clock(
                "Toyota",
                "Corolla",
                year,
                Money::new(value, Currency::USD).unwrap(),
                Percentage::new(deductible).unwrap(),
                &ClockFixtures::reference(),
            )
            .unwrap()
        },
    )
}

/// Strategy for quote requests that stay within the applied-rate limit
pub fn quote_request_strategy() -> impl Strategy<Value = QuoteRequest> {
    (
        year_strategy(),
        vehicle_value_strategy(),
        deductible_strategy(),
        broker_fee_strategy(),
    )
        .prop_map(|(year, value, deductible_percentage, broker_fee)| QuoteRequest {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year,
            value,
            deductible_percentage,
            broker_fee,
        })
}
