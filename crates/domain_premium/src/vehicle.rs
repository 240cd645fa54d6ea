//! Vehicle entity
//!
//! A vehicle carries everything the rating formula needs: its market value,
//! the deductible the insured has chosen and the manufacture year from which
//! its age is derived.

use serde::Serialize;

use core_kernel::{Clock, Money, Percentage, SystemClock};
use crate::error::PremiumError;

/// Immutable vehicle submitted for a quote
///
/// The only rule checked here is that the vehicle was not manufactured in
/// the future. Value and deductible are already guaranteed by `Money` and
/// `Percentage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    make: String,
    model: String,
    year: i32,
    value: Money,
    deductible_percentage: Percentage,
}

impl Vehicle {
    /// Creates a vehicle, checking the year against the system clock
    ///
    /// # Errors
    ///
    /// Returns `PremiumError::FutureManufactureYear` if `year` is after the
    /// current calendar year.
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        value: Money,
        deductible_percentage: Percentage,
    ) -> Result<Self, PremiumError> {
        Self::with_clock(make, model, year, value, deductible_percentage, &SystemClock)
    }

    /// Creates a vehicle, checking the year against the given clock
    pub fn with_clock(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        value: Money,
        deductible_percentage: Percentage,
        clock: &dyn Clock,
    ) -> Result<Self, PremiumError> {
        let current_year = clock.current_year();
        if year > current_year {
            return Err(PremiumError::FutureManufactureYear { year, current_year });
        }

        Ok(Self {
            make: make.into(),
            model: model.into(),
            year,
            value,
            deductible_percentage,
        })
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Manufacture year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Market value
    pub fn value(&self) -> &Money {
        &self.value
    }

    pub fn deductible_percentage(&self) -> &Percentage {
        &self.deductible_percentage
    }

    /// Age in whole calendar years according to the system clock
    ///
    /// Recomputed on every call, so the same vehicle ages by one when a year
    /// boundary passes between two calls.
    pub fn age(&self) -> i64 {
        self.age_with_clock(&SystemClock)
    }

    /// Age in whole calendar years according to `clock`
    ///
    /// Widened to `i64` so that any `i32` year yields an age without
    /// overflow.
    pub fn age_with_clock(&self, clock: &dyn Clock) -> i64 {
        i64::from(clock.current_year()) - i64::from(self.year)
    }
}
