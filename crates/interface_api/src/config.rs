//! API configuration
//!
//! Two groups of settings are read from the environment at startup:
//!
//! * [`ApiConfig`] - server settings, prefixed with `API_`
//! * [`RatingSettings`] - rating constants, unprefixed (`DEFAULT_CURRENCY`,
//!   `INSURANCE_BASE_RATE`, `INSURANCE_COVERAGE_PERCENTAGE`)

use rust_decimal::Decimal;
use serde::Deserialize;

use domain_premium::{PremiumError, RatingConfig};

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Log output format: "pretty" or "json"
    pub log_format: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("API"))
    }

    fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", defaults.log_format)?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns true when logs should be emitted as JSON lines
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// Raw rating settings as found in the environment
#[derive(Debug, Clone, Deserialize)]
pub struct RatingSettings {
    pub default_currency: String,
    pub insurance_base_rate: Decimal,
    pub insurance_coverage_percentage: Decimal,
}

impl RatingSettings {
    /// Reads rating settings from the process environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::default())
    }

    fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("default_currency", "USD")?
            .set_default("insurance_base_rate", "0.005")?
            .set_default("insurance_coverage_percentage", "1.0")?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Validates the settings
    ///
    /// # Errors
    ///
    /// Returns `PremiumError::InvalidConfiguration` if any value is outside
    /// its permitted range.
    pub fn into_rating_config(self) -> Result<RatingConfig, PremiumError> {
        RatingConfig::from_parts(
            &self.default_currency,
            self.insurance_base_rate,
            self.insurance_coverage_percentage,
        )
    }

    /// Reads and validates rating configuration in one step
    ///
    /// Unparseable values (e.g. a non-numeric base rate) are reported as
    /// `InvalidConfiguration` as well.
    pub fn load() -> Result<RatingConfig, PremiumError> {
        Self::from_env()
            .map_err(|e| PremiumError::configuration(e.to_string()))?
            .into_rating_config()
    }
}
