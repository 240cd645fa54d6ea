//! Exact decimal conversion and formatting
//!
//! Amounts and rates must reconcile to the cent, so nothing in this crate
//! accepts binary floating point. Loosely typed input (JSON) is converted
//! through its textual form, which either parses as an exact decimal or is
//! rejected with [`InvalidType`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// Input was not an exact decimal number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid type: expected an exact decimal number, got {0}")]
pub struct InvalidType(pub String);

/// Parses decimal text without rounding
///
/// Plain (`"1500.75"`) and scientific (`"1.5e3"`) notation are accepted.
/// Text that would lose precision is rejected.
pub fn parse_exact(text: &str) -> Result<Decimal, InvalidType> {
    let trimmed = text.trim();
    Decimal::from_str_exact(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| InvalidType(format!("\"{}\"", text)))
}

/// Converts a JSON value into an exact decimal
///
/// Only JSON numbers qualify. Strings, booleans, null, arrays and objects
/// are rejected even when their content looks numeric.
///
/// serde_json is built with `arbitrary_precision`, so a parsed number keeps
/// its literal text and is never narrowed to `f64` on the way here.
pub fn exact_from_json(value: &Value) -> Result<Decimal, InvalidType> {
    match value {
        Value::Number(number) => parse_exact(&number.to_string()),
        other => Err(InvalidType(json_kind(other).to_string())),
    }
}

/// Serde adapter for `#[serde(deserialize_with = "...")]` on decimal fields
pub fn deserialize_exact<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    exact_from_json(&value).map_err(serde::de::Error::custom)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Total significant digits and decimal places of a value
///
/// Trailing fractional zeros are ignored, so `100.50` has 4 digits and
/// 1 decimal place.
pub fn digit_counts(value: Decimal) -> (u32, u32) {
    let normalized = value.normalize();
    let scale = normalized.scale();
    let mantissa_digits = normalized.mantissa().unsigned_abs().to_string().len() as u32;
    (mantissa_digits.max(scale), scale)
}

/// Formats a value with a fixed number of decimal places
///
/// Rounds half to even, matching how decimal amounts are conventionally
/// presented to the cent.
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let (negative, digits) = fixed_parts(value, dp);
    if negative {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Formats a value with a fixed number of decimal places and comma
/// separated thousands (`1234567.891` -> `"1,234,567.89"`)
pub fn format_grouped(value: Decimal, dp: u32) -> String {
    let (negative, digits) = fixed_parts(value, dp);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + whole.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn fixed_parts(value: Decimal, dp: u32) -> (bool, String) {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(dp);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    (negative, rounded.abs().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_parse_exact_plain_and_scientific() {
        assert_eq!(parse_exact("1500.75").unwrap(), dec!(1500.75));
        assert_eq!(parse_exact("1.5e3").unwrap(), dec!(1500));
        assert!(parse_exact("abc").is_err());
    }

    #[test]
    fn test_exact_from_json_rejects_non_numbers() {
        assert_eq!(exact_from_json(&json!(0.1)).unwrap(), dec!(0.1));
        assert_eq!(exact_from_json(&json!(35000)).unwrap(), dec!(35000));
        assert_eq!(
            exact_from_json(&json!("0.5")),
            Err(InvalidType("string".to_string()))
        );
        assert!(exact_from_json(&json!(true)).is_err());
        assert!(exact_from_json(&Value::Null).is_err());
    }

    #[test]
    fn test_json_numbers_keep_their_literal_digits() {
        let value: Value = serde_json::from_str("30000.0000000000000001").unwrap();
        let exact = exact_from_json(&value).unwrap();
        assert_eq!(exact, dec!(30000.0000000000000001));
        assert_eq!(digit_counts(exact), (21, 16));

        let value: Value = serde_json::from_str("50.004999999999999999").unwrap();
        assert_eq!(exact_from_json(&value).unwrap(), dec!(50.004999999999999999));
    }

    #[test]
    fn test_digit_counts() {
        assert_eq!(digit_counts(dec!(100000.00)), (6, 0));
        assert_eq!(digit_counts(dec!(1500.75)), (6, 2));
        assert_eq!(digit_counts(dec!(0.1)), (1, 1));
        assert_eq!(digit_counts(dec!(0.125)), (3, 3));
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(dec!(1500.75), 2), "1,500.75");
        assert_eq!(format_grouped(dec!(1234567.891), 2), "1,234,567.89");
        assert_eq!(format_grouped(dec!(999), 2), "999.00");
        assert_eq!(format_grouped(dec!(0), 2), "0.00");
    }

    #[test]
    fn test_format_rounds_half_to_even() {
        assert_eq!(format_fixed(dec!(0.125), 2), "0.12");
        assert_eq!(format_fixed(dec!(0.135), 2), "0.14");
        assert_eq!(format_fixed(dec!(25.5), 2), "25.50");
    }
}
