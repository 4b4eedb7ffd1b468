//! Unit tests for the Amount module
//!
//! Tests cover the textual rule, the positivity requirement, textual
//! equality, numeric access and JSON serialization.

use core_kernel::{Amount, AmountError};
use rust_decimal_macros::dec;
use std::str::FromStr;

mod creation {
    use super::*;

    #[test]
    fn test_accepts_whole_amounts() {
        let a = Amount::new("1200").unwrap();
        assert_eq!(a.as_str(), "1200");
        assert_eq!(a.value(), dec!(1200));
    }

    #[test]
    fn test_accepts_one_and_two_decimal_places() {
        assert_eq!(Amount::new("99.5").unwrap().value(), dec!(99.5));
        assert_eq!(Amount::new("99.50").unwrap().value(), dec!(99.50));
    }

    #[test]
    fn test_rejects_malformed_strings() {
        for bad in ["", "12.345", ".5", "12.", "1,200", "+5", "12a", "5 "] {
            assert!(
                matches!(Amount::new(bad), Err(AmountError::InvalidFormat { .. })),
                "{bad:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn test_rejects_zero_in_any_spelling() {
        for zero in ["0", "0.0", "0.00", "00"] {
            assert!(
                matches!(Amount::new(zero), Err(AmountError::NotPositive { .. })),
                "{zero:?} should be rejected as non-positive"
            );
        }
    }

    #[test]
    fn test_rejects_negative_amounts_as_malformed() {
        // The sign never makes it past the textual rule.
        assert!(matches!(
            Amount::new("-3"),
            Err(AmountError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_from_str_matches_new() {
        let parsed = Amount::from_str("10.50").unwrap();
        let built = Amount::new("10.50").unwrap();
        assert_eq!(parsed, built);
    }
}

mod equality {
    use super::*;

    #[test]
    fn test_equality_is_textual() {
        let short = Amount::new("1.5").unwrap();
        let long = Amount::new("1.50").unwrap();
        assert_ne!(short, long);
        assert_eq!(short.value(), long.value());
    }

    #[test]
    fn test_display_preserves_the_original_spelling() {
        assert_eq!(Amount::new("250.00").unwrap().to_string(), "250.00");
        assert_eq!(Amount::new("250").unwrap().to_string(), "250");
    }

    #[test]
    fn test_numeric_comparison_goes_through_value() {
        let smaller = Amount::new("99.99").unwrap();
        let larger = Amount::new("100").unwrap();
        assert!(smaller.value() < larger.value());
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_serializes_as_the_original_string() {
        let a = Amount::new("149.99").unwrap();
        assert_eq!(serde_json::to_string(&a).unwrap(), "\"149.99\"");
    }

    #[test]
    fn test_json_roundtrip_is_exact() {
        let a = Amount::new("0.01").unwrap();
        let json = serde_json::to_string(&a).unwrap();
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
        assert_eq!(back.as_str(), "0.01");
    }

    #[test]
    fn test_deserialization_revalidates() {
        assert!(serde_json::from_str::<Amount>("\"12.345\"").is_err());
        assert!(serde_json::from_str::<Amount>("\"0.00\"").is_err());
    }
}
