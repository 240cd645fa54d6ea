//! Premium calculation
//!
//! The calculator turns a vehicle and a broker fee into an applied rate, a
//! premium, a policy limit and the deductible amount. It holds nothing but
//! the immutable rating configuration and a clock, so a single instance is
//! shared freely across request handlers.
//!
//! # Formula
//!
//! ```text
//! applied rate  = base rate × age + base rate × (value / 10,000)
//! base premium  = value × applied rate
//! premium       = base premium − base premium × deductible + broker fee
//! base limit    = value × coverage percentage
//! deductible    = base limit × deductible
//! policy limit  = base limit − deductible
//! ```
//!
//! The applied rate is not clamped. Old or expensive vehicles can push it
//! past 100%, in which case the calculation fails with
//! `PercentageError::OutOfRange` before any amount is computed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use core_kernel::{Clock, Money, Percentage, SystemClock};
use crate::config::RatingConfig;
use crate::error::PremiumError;
use crate::vehicle::Vehicle;

/// Vehicle value is rated per block of this size
pub const VALUE_RATING_UNIT: Decimal = dec!(10000);

/// Primitive inputs for a single quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub value: Decimal,
    pub deductible_percentage: Decimal,
    pub broker_fee: Decimal,
}

/// Outcome of a premium calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PremiumResult {
    /// Combined age and value rate
    pub applied_rate: Percentage,
    /// Premium after the deductible discount, broker fee included
    pub premium: Money,
    /// Maximum payout after the deductible
    pub policy_limit: Money,
    /// Portion of the covered value borne by the insured
    pub deductible_amount: Money,
}

/// Stateless premium calculator
#[derive(Clone)]
pub struct PremiumCalculator {
    config: RatingConfig,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for PremiumCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PremiumCalculator")
            .field("config", &self.config)
            .field("current_year", &self.clock.current_year())
            .finish()
    }
}

impl PremiumCalculator {
    /// Creates a calculator reading the year from the system clock
    pub fn new(config: RatingConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used for vehicle ages
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Year the calculator rates vehicles against
    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    /// Builds the vehicle and broker fee from primitive inputs and
    /// calculates the premium
    ///
    /// Amounts are taken to be in the configured default currency.
    ///
    /// # Errors
    ///
    /// Any validation failure of the value, deductible, year or broker fee,
    /// followed by any failure of [`PremiumCalculator::calculate`].
    pub fn quote(&self, request: &QuoteRequest) -> Result<PremiumResult, PremiumError> {
        let vehicle = Vehicle::with_clock(
            &request.make,
            &request.model,
            request.year,
            self.config.money(request.value)?,
            Percentage::new(request.deductible_percentage)?,
            self.clock.as_ref(),
        )?;
        let broker_fee = self.config.money(request.broker_fee)?;

        self.calculate(&vehicle, &broker_fee)
    }

    /// Calculates the premium for a vehicle
    ///
    /// # Arguments
    ///
    /// * `vehicle` - The vehicle to rate
    /// * `broker_fee` - Flat fee added to the premium
    ///
    /// # Errors
    ///
    /// * `PremiumError::CurrencyMismatch` if the broker fee is not in the
    ///   vehicle value's currency
    /// * `PremiumError::Percentage` if the applied rate falls outside [0, 1]
    /// * `PremiumError::Money` if a resulting amount would be negative
    /// * `PremiumError::Overflow` if decimal arithmetic overflows
    pub fn calculate(
        &self,
        vehicle: &Vehicle,
        broker_fee: &Money,
    ) -> Result<PremiumResult, PremiumError> {
        let currency = vehicle.value().currency();
        if broker_fee.currency() != currency {
            return Err(PremiumError::CurrencyMismatch {
                expected: currency.to_string(),
                actual: broker_fee.currency().to_string(),
            });
        }

        let base_rate = self.config.base_rate();
        let value = vehicle.value().amount();
        let deductible = vehicle.deductible_percentage().value();
        let age = vehicle.age_with_clock(self.clock.as_ref());

        // Rate
        let age_rate = base_rate
            .checked_mul(Decimal::from(age))
            .ok_or(PremiumError::Overflow("age rate"))?;
        let value_rate = value
            .checked_div(VALUE_RATING_UNIT)
            .and_then(|units| base_rate.checked_mul(units))
            .ok_or(PremiumError::Overflow("value rate"))?;
        let applied_rate = age_rate
            .checked_add(value_rate)
            .ok_or(PremiumError::Overflow("applied rate"))?;
        let rate = Percentage::new(applied_rate)?;

        // Premium
        let base_premium = value
            .checked_mul(applied_rate)
            .ok_or(PremiumError::Overflow("base premium"))?;
        let deductible_discount = base_premium
            .checked_mul(deductible)
            .ok_or(PremiumError::Overflow("deductible discount"))?;
        let final_premium = base_premium
            .checked_sub(deductible_discount)
            .and_then(|net| net.checked_add(broker_fee.amount()))
            .ok_or(PremiumError::Overflow("premium"))?;
        let premium = Money::new(final_premium, currency)?;

        // Policy limit
        let base_policy_limit = value
            .checked_mul(self.config.coverage_percentage())
            .ok_or(PremiumError::Overflow("base policy limit"))?;
        let deductible_amount = base_policy_limit
            .checked_mul(deductible)
            .ok_or(PremiumError::Overflow("deductible amount"))?;
        let final_policy_limit = base_policy_limit
            .checked_sub(deductible_amount)
            .ok_or(PremiumError::Overflow("policy limit"))?;
        let policy_limit = Money::new(final_policy_limit, currency)?;

        debug!(
            make = vehicle.make(),
            model = vehicle.model(),
            age,
            %age_rate,
            %value_rate,
            %applied_rate,
            %base_premium,
            %deductible_discount,
            %base_policy_limit,
            "Premium calculated"
        );

        Ok(PremiumResult {
            applied_rate: rate,
            premium,
            policy_limit,
            deductible_amount: Money::new(deductible_amount, currency)?,
        })
    }
}
