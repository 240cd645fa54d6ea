//! Unit tests for the Percentage value object

use core_kernel::{Percentage, PercentageError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

mod range {
    use super::*;

    #[test]
    fn test_valid_percentage() {
        let pct = Percentage::new(dec!(0.15)).unwrap();
        assert_eq!(pct.value(), dec!(0.15));
    }

    #[test]
    fn test_boundaries_are_accepted() {
        assert!(Percentage::new(dec!(0)).is_ok());
        assert!(Percentage::new(dec!(1)).is_ok());
        assert!(Percentage::new(dec!(1.000)).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(Percentage::new(dec!(1.5)), Err(PercentageError::OutOfRange(_))));
        assert!(matches!(Percentage::new(dec!(-0.1)), Err(PercentageError::OutOfRange(_))));
        assert!(matches!(
            Percentage::new(dec!(1.0000000001)),
            Err(PercentageError::OutOfRange(_))
        ));
    }
}

mod exact_input {
    use super::*;

    #[test]
    fn test_requires_json_number() {
        for value in [json!("0.5"), json!(true), json!(null)] {
            let result = Percentage::from_json(&value);
            assert!(matches!(result, Err(PercentageError::InvalidType(_))));
        }
    }

    #[test]
    fn test_accepts_json_number() {
        let pct = Percentage::from_json(&json!(0.5)).unwrap();
        assert_eq!(pct.value(), dec!(0.5));
    }

    #[test]
    fn test_invalid_type_message() {
        let err = Percentage::from_json(&json!("0.5")).unwrap_err();
        assert!(err.to_string().contains("expected an exact decimal number"));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_two_places() {
        assert_eq!(Percentage::new(dec!(0.255)).unwrap().to_string(), "25.50%");
        assert_eq!(Percentage::new(dec!(0.04)).unwrap().to_string(), "4.00%");
        assert_eq!(Percentage::ZERO.to_string(), "0.00%");
    }

    #[test]
    fn test_as_percent() {
        assert_eq!(Percentage::new(dec!(0.055)).unwrap().as_percent(), dec!(5.5));
    }
}

mod serde_validation {
    use super::*;

    #[test]
    fn test_deserialize_enforces_range() {
        let ok: Percentage = serde_json::from_value(json!("0.25")).unwrap();
        assert_eq!(ok.value(), dec!(0.25));

        let bad: Result<Percentage, _> = serde_json::from_value(json!("1.25"));
        assert!(bad.is_err());
    }

    #[test]
    fn test_serializes_as_decimal() {
        let pct = Percentage::new(dec!(0.1)).unwrap();
        let back: Decimal = serde_json::from_value(serde_json::to_value(pct).unwrap()).unwrap();
        assert_eq!(back, dec!(0.1));
    }
}
