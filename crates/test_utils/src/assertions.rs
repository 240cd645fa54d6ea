//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::{Currency, Money, Percentage, PercentageError};
use domain_premium::{PremiumError, PremiumResult};
use rust_decimal::Decimal;

/// Asserts that a Money value has exactly the expected amount and currency
///
/// Amounts compare by value, so `10400` equals `10400.0000`.
pub fn assert_money_eq(actual: &Money, expected_amount: Decimal, expected_currency: Currency) {
    assert_eq!(
        actual.currency(),
        expected_currency,
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected_currency
    );
    assert_eq!(
        actual.amount(),
        expected_amount,
        "Amount mismatch: actual={}, expected={}",
        actual.amount(),
        expected_amount
    );
}

/// Asserts that a Percentage holds the expected fraction
pub fn assert_percentage_eq(actual: &Percentage, expected: Decimal) {
    assert_eq!(
        actual.value(),
        expected,
        "Percentage mismatch: actual={} ({}), expected={}",
        actual.value(),
        actual,
        expected
    );
}

/// Asserts every figure of a premium result, all in USD
pub fn assert_premium_result(
    result: &PremiumResult,
    applied_rate: Decimal,
    premium: Decimal,
    policy_limit: Decimal,
    deductible_amount: Decimal,
) {
    assert_percentage_eq(&result.applied_rate, applied_rate);
    assert_money_eq(&result.premium, premium, Currency::USD);
    assert_money_eq(&result.policy_limit, policy_limit, Currency::USD);
    assert_money_eq(&result.deductible_amount, deductible_amount, Currency::USD);
}

/// Asserts that a calculation failed because the applied rate left [0, 1]
pub fn assert_rate_out_of_range<T: std::fmt::Debug>(result: &Result<T, PremiumError>) {
    assert!(
        matches!(
            result,
            Err(PremiumError::Percentage(PercentageError::OutOfRange(_)))
        ),
        "Expected an out-of-range applied rate, got {:?}",
        result
    );
}
