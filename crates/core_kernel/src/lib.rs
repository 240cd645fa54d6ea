//! Core Kernel - Foundational value objects for the premium quote service
//!
//! This crate provides the building blocks the rating domain is expressed in:
//! - Money with a currency code and a non-negative exact decimal amount
//! - Percentage constrained to the closed interval [0, 1]
//! - Exact decimal conversion for loosely typed input
//! - A calendar clock so "the current year" can be pinned in tests

pub mod money;
pub mod percentage;
pub mod numeric;
pub mod temporal;

pub use money::{Money, Currency, MoneyError};
pub use percentage::{Percentage, PercentageError};
pub use numeric::InvalidType;
pub use temporal::{Clock, SystemClock, FixedClock};
