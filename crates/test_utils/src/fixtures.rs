//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the rating domain. Every fixture that
//! depends on the calendar is pinned to [`REFERENCE_YEAR`] so the expected
//! figures never drift with the wall clock.

use core_kernel::{Currency, FixedClock, Money, Percentage};
use domain_premium::{PremiumCalculator, QuoteRequest, RatingConfig, Vehicle};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

/// Calendar year the reference scenarios are evaluated in
pub const REFERENCE_YEAR: i32 = 2025;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a USD amount
    pub fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD).unwrap()
    }

    /// Standard broker fee used by the reference scenarios
    pub fn broker_fee() -> Money {
        Self::usd(dec!(50.00))
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR).unwrap()
    }
}

/// Fixture for Percentage test data
pub struct PercentageFixtures;

impl PercentageFixtures {
    /// The 10% deductible used by the reference scenarios
    pub fn ten_percent() -> Percentage {
        Percentage::new(dec!(0.1)).unwrap()
    }
}

/// Fixture for clocks and calculators
pub struct ClockFixtures;

impl ClockFixtures {
    /// Clock pinned to the reference year
    pub fn reference() -> FixedClock {
        FixedClock::new(REFERENCE_YEAR)
    }

    /// Calculator with default configuration running in the reference year
    pub fn calculator() -> PremiumCalculator {
        PremiumCalculator::new(RatingConfig::default()).with_clock(Self::reference())
    }

    /// Calculator with a custom configuration running in the reference year
    pub fn calculator_with(config: RatingConfig) -> PremiumCalculator {
        PremiumCalculator::new(config).with_clock(Self::reference())
    }
}

/// Fixture for vehicles
pub struct VehicleFixtures;

impl VehicleFixtures {
    /// 2012 Toyota Corolla valued at 100,000.00 with a 10% deductible
    ///
    /// Expected in 2025: applied rate 11.50%, premium 10,400.00, policy
    /// limit 90,000.00, deductible 10,000.00.
    pub fn scenario_one() -> Vehicle {
        Vehicle::with_clock(
            "Toyota",
            "Corolla",
            2012,
            MoneyFixtures::usd(dec!(100000.00)),
            PercentageFixtures::ten_percent(),
            &ClockFixtures::reference(),
        )
        .unwrap()
    }

    /// 2020 Toyota Corolla valued at 30,000.00 with a 10% deductible
    ///
    /// Expected in 2025: applied rate 4.00%, premium 1,130.00, policy
    /// limit 27,000.00, deductible 3,000.00.
    pub fn scenario_two() -> Vehicle {
        Vehicle::with_clock(
            "Toyota",
            "Corolla",
            2020,
            MoneyFixtures::usd(dec!(30000.00)),
            PercentageFixtures::ten_percent(),
            &ClockFixtures::reference(),
        )
        .unwrap()
    }

    /// A vintage, high-value vehicle whose applied rate exceeds 100%
    ///
    /// Age 75 and value 2,000,000.00 give 0.375 + 1.0 = 1.375.
    pub fn rate_overflow() -> Vehicle {
        Vehicle::with_clock(
            "Ferrari",
            "250 GTO",
            1950,
            MoneyFixtures::usd(dec!(2000000.00)),
            PercentageFixtures::ten_percent(),
            &ClockFixtures::reference(),
        )
        .unwrap()
    }
}

/// Fixture for quote requests and their JSON payloads
pub struct QuoteFixtures;

impl QuoteFixtures {
    /// Primitive inputs of scenario one
    pub fn scenario_one() -> QuoteRequest {
        QuoteRequest {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2012,
            value: dec!(100000.00),
            deductible_percentage: dec!(0.1),
            broker_fee: dec!(50.00),
        }
    }

    /// JSON body for the calculate endpoint
    ///
    /// Amounts are given as literal JSON number text (`"30000.00"`) and end
    /// up in the body digit for digit.
    pub fn payload(year: i32, value: &str, deductible_percentage: &str, broker_fee: &str) -> Value {
        let body = format!(
            r#"{{"make":"Toyota","model":"Corolla","year":{},"value":{},"deductible_percentage":{},"broker_fee":{}}}"#,
            year, value, deductible_percentage, broker_fee
        );
        serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("invalid payload literal {}: {}", body, e))
    }
}
