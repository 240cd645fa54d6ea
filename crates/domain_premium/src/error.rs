//! Rating domain errors
//!
//! This module defines all error types that can occur while building a
//! vehicle, loading rating configuration or calculating a premium.

use core_kernel::{MoneyError, PercentageError};
use thiserror::Error;

/// Errors that can occur in the rating domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PremiumError {
    /// Manufacture year lies after the current calendar year
    #[error("Vehicle manufacturing year {year} cannot be in the future (current year is {current_year})")]
    FutureManufactureYear {
        year: i32,
        current_year: i32,
    },

    /// A monetary amount failed validation
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// A rate failed validation, including an applied rate above 100%
    #[error("Percentage error: {0}")]
    Percentage(#[from] PercentageError),

    /// Broker fee and vehicle value are in different currencies
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        expected: String,
        actual: String,
    },

    /// Decimal arithmetic overflowed
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),

    /// Rating configuration is unusable; fatal at startup
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl PremiumError {
    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        PremiumError::InvalidConfiguration(message.into())
    }

    /// Returns true for errors caused by the quote inputs rather than by
    /// the service's own setup
    pub fn is_business_rule_violation(&self) -> bool {
        !matches!(self, PremiumError::InvalidConfiguration(_))
    }
}
