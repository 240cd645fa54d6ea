//! Rating configuration
//!
//! The base rate and coverage percentage are process-wide settings. They are
//! validated once when the service starts and are immutable afterwards; the
//! calculator receives them explicitly rather than reading globals.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, MoneyError};
use crate::error::PremiumError;

/// Default base rate: 0.5% per year of age and per 10,000 of value
pub const DEFAULT_BASE_RATE: Decimal = dec!(0.005);

/// Default coverage: 100% of the vehicle value
pub const DEFAULT_COVERAGE_PERCENTAGE: Decimal = dec!(1.0);

/// Validated rating configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingConfig {
    default_currency: Currency,
    base_rate: Decimal,
    coverage_percentage: Decimal,
}

impl RatingConfig {
    /// Builds a configuration from already-typed values
    ///
    /// # Errors
    ///
    /// Returns `PremiumError::InvalidConfiguration` if `base_rate` is not
    /// positive or `coverage_percentage` is outside (0, 1].
    pub fn new(
        default_currency: Currency,
        base_rate: Decimal,
        coverage_percentage: Decimal,
    ) -> Result<Self, PremiumError> {
        if base_rate <= Decimal::ZERO {
            return Err(PremiumError::configuration(format!(
                "INSURANCE_BASE_RATE must be positive, got {}",
                base_rate
            )));
        }
        if coverage_percentage <= Decimal::ZERO || coverage_percentage > Decimal::ONE {
            return Err(PremiumError::configuration(format!(
                "INSURANCE_COVERAGE_PERCENTAGE must be in (0, 1], got {}",
                coverage_percentage
            )));
        }

        Ok(Self {
            default_currency,
            base_rate,
            coverage_percentage,
        })
    }

    /// Builds a configuration from a raw currency code
    ///
    /// # Errors
    ///
    /// As [`RatingConfig::new`], and additionally when `currency_code` is
    /// not exactly three alphabetic characters.
    pub fn from_parts(
        currency_code: &str,
        base_rate: Decimal,
        coverage_percentage: Decimal,
    ) -> Result<Self, PremiumError> {
        let currency = Currency::new(currency_code).map_err(|_| {
            PremiumError::configuration(format!(
                "DEFAULT_CURRENCY must be a 3-letter ISO code, got {:?}",
                currency_code
            ))
        })?;
        Self::new(currency, base_rate, coverage_percentage)
    }

    pub fn default_currency(&self) -> Currency {
        self.default_currency
    }

    /// Creates an amount in the configured default currency
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if `amount` is negative.
    pub fn money(&self, amount: Decimal) -> Result<Money, MoneyError> {
        Money::new(amount, self.default_currency)
    }

    pub fn base_rate(&self) -> Decimal {
        self.base_rate
    }

    pub fn coverage_percentage(&self) -> Decimal {
        self.coverage_percentage
    }
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            default_currency: Currency::USD,
            base_rate: DEFAULT_BASE_RATE,
            coverage_percentage: DEFAULT_COVERAGE_PERCENTAGE,
        }
    }
}
