//! Percentage value object
//!
//! A fraction in the closed interval [0, 1], where 1 means 100%.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::numeric::{self, InvalidType};

/// Errors that can occur when constructing a percentage
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PercentageError {
    #[error(transparent)]
    InvalidType(#[from] InvalidType),

    #[error("Percentage out of range: {0} (must be between 0 and 1)")]
    OutOfRange(Decimal),
}

/// A rate between 0% and 100%, stored as a decimal fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percentage {
    value: Decimal,
}

impl Percentage {
    pub const ZERO: Percentage = Percentage { value: Decimal::ZERO };
    pub const ONE: Percentage = Percentage { value: Decimal::ONE };

    /// Creates a percentage from a decimal fraction (e.g. 0.15 for 15%)
    ///
    /// # Errors
    ///
    /// Returns `PercentageError::OutOfRange` if `value` is below 0 or above 1.
    /// Both bounds are inclusive.
    pub fn new(value: Decimal) -> Result<Self, PercentageError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(PercentageError::OutOfRange(value));
        }
        Ok(Self { value })
    }

    /// Creates a percentage from a loosely typed JSON value
    pub fn from_json(value: &Value) -> Result<Self, PercentageError> {
        let value = numeric::exact_from_json(value)?;
        Self::new(value)
    }

    /// Returns the fraction (0.15 for 15%)
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the value scaled to percent (15 for 0.15)
    pub fn as_percent(&self) -> Decimal {
        self.value * dec!(100)
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = PercentageError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Percentage::new(value)
    }
}

impl From<Percentage> for Decimal {
    fn from(percentage: Percentage) -> Self {
        percentage.value
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", numeric::format_fixed(self.as_percent(), 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(Percentage::new(dec!(0)).unwrap(), Percentage::ZERO);
        assert_eq!(Percentage::new(dec!(1)).unwrap(), Percentage::ONE);
        assert_eq!(
            Percentage::new(dec!(1.5)),
            Err(PercentageError::OutOfRange(dec!(1.5)))
        );
        assert_eq!(
            Percentage::new(dec!(-0.1)),
            Err(PercentageError::OutOfRange(dec!(-0.1)))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Percentage::new(dec!(0.255)).unwrap().to_string(), "25.50%");
        assert_eq!(Percentage::new(dec!(0.115)).unwrap().to_string(), "11.50%");
        assert_eq!(Percentage::ONE.to_string(), "100.00%");
    }
}
