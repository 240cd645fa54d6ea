//! Motor Premium Rating Domain
//!
//! This crate implements the car-insurance quote calculation. It is
//! infrastructure-agnostic: callers hand in validated primitives or value
//! objects and receive a [`PremiumResult`] or a [`PremiumError`].
//!
//! # Architecture
//!
//! - **Entity**: [`Vehicle`], validated on construction
//! - **Configuration**: [`RatingConfig`], built once at startup
//! - **Use case**: [`PremiumCalculator`], a pure function of its inputs
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_premium::{PremiumCalculator, QuoteRequest, RatingConfig};
//!
//! let calculator = PremiumCalculator::new(RatingConfig::default());
//! let result = calculator.quote(&QuoteRequest {
//!     make: "Toyota".into(),
//!     model: "Corolla".into(),
//!     year: 2012,
//!     value: dec!(100000.00),
//!     deductible_percentage: dec!(0.1),
//!     broker_fee: dec!(50.00),
//! })?;
//! println!("{}", result.premium);
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod vehicle;

pub use calculator::{PremiumCalculator, PremiumResult, QuoteRequest, VALUE_RATING_UNIT};
pub use config::{RatingConfig, DEFAULT_BASE_RATE, DEFAULT_COVERAGE_PERCENTAGE};
pub use error::PremiumError;
pub use vehicle::Vehicle;
