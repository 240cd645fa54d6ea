//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{Currency, FixedClock, Money, Percentage};
use domain_premium::{PremiumError, QuoteRequest, Vehicle};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::REFERENCE_YEAR;

/// Builder for constructing test vehicles
pub struct TestVehicleBuilder {
    make: String,
    model: String,
    year: i32,
    value: Decimal,
    currency: Currency,
    deductible_percentage: Decimal,
    clock: FixedClock,
}

impl Default for TestVehicleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestVehicleBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
            value: dec!(30000.00),
            currency: Currency::USD,
            deductible_percentage: dec!(0.1),
            clock: FixedClock::new(REFERENCE_YEAR),
        }
    }

    /// Sets the make
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = make.into();
        self
    }

    /// Sets the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the manufacture year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the market value
    pub fn with_value(mut self, value: Decimal) -> Self {
        self.value = value;
        self
    }

    /// Sets the currency of the market value
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the deductible fraction
    pub fn with_deductible(mut self, deductible_percentage: Decimal) -> Self {
        self.deductible_percentage = deductible_percentage;
        self
    }

    /// Sets the year the vehicle is validated against
    pub fn as_of(mut self, current_year: i32) -> Self {
        self.clock = FixedClock::new(current_year);
        self
    }

    /// Builds the vehicle, surfacing any validation error
    pub fn try_build(self) -> Result<Vehicle, PremiumError> {
        let value = Money::new(self.value, self.currency)?;
        let deductible = Percentage::new(self.deductible_percentage)?;
        Vehicle::with_clock(self.make, self.model, self.year, value, deductible, &self.clock)
    }

    /// Builds the vehicle
    ///
    /// # Panics
    ///
    /// Panics if the configured values are invalid
    pub fn build(self) -> Vehicle {
        let description = format!("{} {} {}", self.year, self.make, self.model);
        self.try_build()
            .unwrap_or_else(|e| panic!("invalid test vehicle {}: {}", description, e))
    }
}

/// Builder for constructing quote requests
pub struct QuoteRequestBuilder {
    request: QuoteRequest,
}

impl Default for QuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRequestBuilder {
    /// Creates a new builder with the scenario-two inputs
    pub fn new() -> Self {
        Self {
            request: QuoteRequest {
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: 2020,
                value: dec!(30000.00),
                deductible_percentage: dec!(0.1),
                broker_fee: dec!(50.00),
            },
        }
    }

    /// Sets the manufacture year
    pub fn with_year(mut self, year: i32) -> Self {
        self.request.year = year;
        self
    }

    /// Sets the market value
    pub fn with_value(mut self, value: Decimal) -> Self {
        self.request.value = value;
        self
    }

    /// Sets the deductible fraction
    pub fn with_deductible(mut self, deductible_percentage: Decimal) -> Self {
        self.request.deductible_percentage = deductible_percentage;
        self
    }

    /// Sets the broker fee
    pub fn with_broker_fee(mut self, broker_fee: Decimal) -> Self {
        self.request.broker_fee = broker_fee;
        self
    }

    /// Builds the request
    pub fn build(self) -> QuoteRequest {
        self.request
    }
}
