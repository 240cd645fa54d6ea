//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal so amounts reconcile to the cent.
//!
//! Money deliberately exposes no arithmetic operators. Calculations work
//! on raw `Decimal` amounts and wrap the outcome into `Money` once a step
//! is complete, which is where the non-negative invariant is checked.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::numeric::{self, InvalidType};

/// ISO 4217 style currency code: exactly three ASCII letters, upper-case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

impl Currency {
    pub const USD: Currency = Currency(*b"USD");
    pub const EUR: Currency = Currency(*b"EUR");
    pub const GBP: Currency = Currency(*b"GBP");
    pub const CAD: Currency = Currency(*b"CAD");

    /// Parses a currency code
    ///
    /// Lower-case letters are accepted and normalised to upper-case.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidCurrency` unless the code is exactly
    /// three alphabetic ASCII characters.
    pub fn new(code: &str) -> Result<Self, MoneyError> {
        match code.as_bytes() {
            [a, b, c] if code.bytes().all(|byte| byte.is_ascii_alphabetic()) => Ok(Self([
                a.to_ascii_uppercase(),
                b.to_ascii_uppercase(),
                c.to_ascii_uppercase(),
            ])),
            _ => Err(MoneyError::InvalidCurrency(code.to_string())),
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &str {
        // ASCII by construction
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

/// Errors that can occur when constructing money values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error(transparent)]
    InvalidType(#[from] InvalidType),

    #[error("Invalid amount: {0} (amount cannot be negative)")]
    InvalidAmount(Decimal),

    #[error("Invalid currency code: {0:?} (expected a 3-letter ISO code)")]
    InvalidCurrency(String),
}

/// A non-negative monetary amount with associated currency
///
/// The amount is kept at full decimal precision. Rounding to the cent
/// happens only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

#[derive(Deserialize)]
struct MoneyRepr {
    amount: Decimal,
    currency: Currency,
}

impl TryFrom<MoneyRepr> for Money {
    type Error = MoneyError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Money::new(repr.amount, repr.currency)
    }
}

impl Money {
    /// Creates a new Money value
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if `amount` is negative.
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::InvalidAmount(amount));
        }
        Ok(Self { amount, currency })
    }

    /// Creates Money from a loosely typed JSON value
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidType` unless `value` is a JSON number with
    /// an exact decimal representation, then applies the rules of [`Money::new`].
    pub fn from_json(value: &Value, currency: Currency) -> Result<Self, MoneyError> {
        let amount = numeric::exact_from_json(value)?;
        Self::new(amount, currency)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        !self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.currency,
            numeric::format_grouped(self.amount, 2)
        )
    }
}
