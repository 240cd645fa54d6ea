//! Insurance quote DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::numeric::{deserialize_exact, digit_counts};
use domain_premium::{PremiumResult, QuoteRequest};

use crate::error::{field_messages, ApiError};

/// Premium calculation request
///
/// Monetary and percentage fields must be JSON numbers; strings are
/// rejected before validation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InsuranceRequest {
    #[validate(length(min = 2, max = 50, message = "must be between 2 and 50 characters"))]
    pub make: String,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub model: String,
    #[validate(range(min = 1900, message = "must be 1900 or later"))]
    pub year: i32,
    #[serde(deserialize_with = "deserialize_exact")]
    pub value: Decimal,
    #[serde(deserialize_with = "deserialize_exact")]
    pub deductible_percentage: Decimal,
    #[serde(deserialize_with = "deserialize_exact")]
    pub broker_fee: Decimal,
}

/// Digit limits for a decimal field
struct DecimalRule {
    field: &'static str,
    max_digits: u32,
    max_places: u32,
}

const VALUE_RULE: DecimalRule = DecimalRule {
    field: "value",
    max_digits: 12,
    max_places: 2,
};

const DEDUCTIBLE_RULE: DecimalRule = DecimalRule {
    field: "deductible_percentage",
    max_digits: 3,
    max_places: 2,
};

const BROKER_FEE_RULE: DecimalRule = DecimalRule {
    field: "broker_fee",
    max_digits: 10,
    max_places: 2,
};

impl DecimalRule {
    fn check(&self, value: Decimal, problems: &mut Vec<String>) {
        let (digits, places) = digit_counts(value);
        if places > self.max_places {
            problems.push(format!(
                "{}: must have at most {} decimal places",
                self.field, self.max_places
            ));
        }
        if digits > self.max_digits {
            problems.push(format!(
                "{}: must have at most {} digits",
                self.field, self.max_digits
            ));
        }
    }
}

impl InsuranceRequest {
    /// Runs field validation against the given year
    ///
    /// Collects every problem rather than stopping at the first one.
    ///
    /// # Errors
    ///
    /// `ApiError::InvalidFields` listing each failing field.
    pub fn check(&self, current_year: i32) -> Result<(), ApiError> {
        let mut problems = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => field_messages(&errors),
        };

        if self.year > current_year {
            problems.push(format!("year: must not be later than {}", current_year));
        }

        if self.value <= Decimal::ZERO {
            problems.push("value: must be greater than 0".to_string());
        }
        VALUE_RULE.check(self.value, &mut problems);

        if self.deductible_percentage < Decimal::ZERO || self.deductible_percentage > Decimal::ONE
        {
            problems.push("deductible_percentage: must be between 0 and 1".to_string());
        }
        DEDUCTIBLE_RULE.check(self.deductible_percentage, &mut problems);

        if self.broker_fee < Decimal::ZERO {
            problems.push("broker_fee: must not be negative".to_string());
        }
        BROKER_FEE_RULE.check(self.broker_fee, &mut problems);

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ApiError::InvalidFields(problems))
        }
    }
}

impl From<InsuranceRequest> for QuoteRequest {
    fn from(request: InsuranceRequest) -> Self {
        QuoteRequest {
            make: request.make,
            model: request.model,
            year: request.year,
            value: request.value,
            deductible_percentage: request.deductible_percentage,
            broker_fee: request.broker_fee,
        }
    }
}

/// Premium calculation response, every figure pre-formatted for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceResponse {
    pub applied_rate: String,
    pub calculated_premium: String,
    pub policy_limit: String,
    pub deductible_value: String,
}

impl From<PremiumResult> for InsuranceResponse {
    fn from(result: PremiumResult) -> Self {
        Self {
            applied_rate: result.applied_rate.to_string(),
            calculated_premium: result.premium.to_string(),
            policy_limit: result.policy_limit.to_string(),
            deductible_value: result.deductible_amount.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request() -> InsuranceRequest {
        InsuranceRequest {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
            value: dec!(30000.00),
            deductible_percentage: dec!(0.1),
            broker_fee: dec!(50.00),
        }
    }

    fn problems(request: &InsuranceRequest) -> Vec<String> {
        match request.check(2025) {
            Err(ApiError::InvalidFields(problems)) => problems,
            other => panic!("expected invalid fields, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().check(2025).is_ok());
    }

    #[test]
    fn test_boundaries_are_accepted() {
        let mut req = request();
        req.year = 1900;
        req.deductible_percentage = dec!(1.00);
        req.broker_fee = dec!(0);
        req.value = dec!(9999999999.99);
        assert!(req.check(2025).is_ok());
    }

    #[test]
    fn test_future_year() {
        let mut req = request();
        req.year = 2026;
        assert_eq!(problems(&req), vec!["year: must not be later than 2025"]);
    }

    #[test]
    fn test_year_before_1900() {
        let mut req = request();
        req.year = 1899;
        assert_eq!(problems(&req), vec!["year: must be 1900 or later"]);
    }

    #[test]
    fn test_make_length() {
        let mut req = request();
        req.make = "T".to_string();
        assert_eq!(
            problems(&req),
            vec!["make: must be between 2 and 50 characters"]
        );
    }

    #[test]
    fn test_decimal_places() {
        let mut req = request();
        req.value = dec!(30000.001);
        assert_eq!(
            problems(&req),
            vec!["value: must have at most 2 decimal places"]
        );
    }

    #[test]
    fn test_trailing_zeros_do_not_count() {
        let mut req = request();
        req.value = dec!(30000.0000);
        req.deductible_percentage = dec!(0.100);
        assert!(req.check(2025).is_ok());
    }

    #[test]
    fn test_too_many_digits() {
        let mut req = request();
        req.broker_fee = dec!(123456789.99);
        req.value = dec!(12345678901.99);
        assert_eq!(
            problems(&req),
            vec![
                "value: must have at most 12 digits",
                "broker_fee: must have at most 10 digits",
            ]
        );
    }

    #[test]
    fn test_ranges() {
        let mut req = request();
        req.value = dec!(0);
        req.deductible_percentage = dec!(1.5);
        req.broker_fee = dec!(-1);
        assert_eq!(
            problems(&req),
            vec![
                "value: must be greater than 0",
                "deductible_percentage: must be between 0 and 1",
                "broker_fee: must not be negative",
            ]
        );
    }

    #[test]
    fn test_over_precise_literals_reach_validation_intact() {
        let body = r#"{"make":"Toyota","model":"Corolla","year":2020,
            "value":30000.0000000000000001,"deductible_percentage":0.1,"broker_fee":50.00}"#;
        let req: InsuranceRequest = serde_json::from_str(body).unwrap();

        assert_eq!(req.value, dec!(30000.0000000000000001));
        assert_eq!(
            problems(&req),
            vec![
                "value: must have at most 2 decimal places",
                "value: must have at most 12 digits",
            ]
        );
    }

    #[test]
    fn test_string_amount_is_rejected() {
        let body = r#"{"make":"Toyota","model":"Corolla","year":2020,
            "value":"30000","deductible_percentage":0.1,"broker_fee":50}"#;
        assert!(serde_json::from_str::<InsuranceRequest>(body).is_err());
    }
}
