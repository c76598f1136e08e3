//! Input validation functions
//!
//! Range checks for the personal inputs accepted by the calculator, plus the
//! helpers that parse raw form values into numbers. Bounds are inclusive.

use crate::errors::EngineError;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Form field keys accepted by the calculator
pub mod field {
    pub const HEIGHT: &str = "height";
    pub const WEIGHT: &str = "weight";
    pub const AGE: &str = "age";
    pub const GENDER: &str = "gender";
    pub const ACTIVITY_LEVEL: &str = "activityLevel";
    pub const DAYS: &str = "days";
    pub const HOURS: &str = "hours";
    pub const GOAL: &str = "goal";
}

pub const HEIGHT_CM_RANGE: RangeInclusive<f64> = 100.0..=250.0;
pub const WEIGHT_KG_RANGE: RangeInclusive<f64> = 30.0..=300.0;
pub const AGE_YEARS_RANGE: RangeInclusive<i32> = 15..=100;
pub const DAYS_AVAILABLE_RANGE: RangeInclusive<i32> = 1..=7;
pub const HOURS_PER_DAY_RANGE: RangeInclusive<f64> = 0.5..=4.0;

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if !HEIGHT_CM_RANGE.contains(&height_cm) {
        return Err("Height must be between 100 and 250 cm.".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if !WEIGHT_KG_RANGE.contains(&weight_kg) {
        return Err("Weight must be between 30 and 300 kg.".to_string());
    }
    Ok(())
}

/// Validate age in whole years
pub fn validate_age_years(age_years: i32) -> Result<(), String> {
    if !AGE_YEARS_RANGE.contains(&age_years) {
        return Err("Age must be between 15 and 100 years.".to_string());
    }
    Ok(())
}

/// Validate training days per week
pub fn validate_days_available(days: i32) -> Result<(), String> {
    if !DAYS_AVAILABLE_RANGE.contains(&days) {
        return Err("Days available must be between 1 and 7.".to_string());
    }
    Ok(())
}

/// Validate training hours per session
pub fn validate_hours_per_day(hours: f64) -> Result<(), String> {
    if !HOURS_PER_DAY_RANGE.contains(&hours) {
        return Err("Hours per day must be between 0.5 and 4.".to_string());
    }
    Ok(())
}

// ============================================================================
// Raw Value Parsing
// ============================================================================

/// Parse a decimal form value. Missing, empty and non-finite values are malformed.
pub fn parse_number(field: &str, raw: Option<&str>) -> Result<f64, EngineError> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| EngineError::malformed(field))
}

/// Parse a whole-number form value. `"30.5"` is malformed, not truncated.
pub fn parse_integer(field: &str, raw: Option<&str>) -> Result<i32, EngineError> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<i32>().ok())
        .ok_or_else(|| EngineError::malformed(field))
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map form field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "height" => "Height",
        "weight" => "Weight",
        "age" => "Age",
        "gender" => "Gender",
        "activityLevel" => "Activity Level",
        "days" => "Days Available",
        "hours" => "Hours Per Day",
        "goal" => "Goal",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }
}

/// Run a range validator and attribute its failure to `field`
pub fn check(field: &str, result: Result<(), String>) -> Result<(), EngineError> {
    result.map_err(|msg| EngineError::OutOfRange(ValidationError::new(field, &msg)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_validate_height_cm() {
        assert!(validate_height_cm(170.0).is_ok());
        assert!(validate_height_cm(100.0).is_ok()); // Minimum
        assert!(validate_height_cm(250.0).is_ok()); // Maximum

        assert!(validate_height_cm(99.9).is_err());
        assert!(validate_height_cm(250.1).is_err());
        assert!(validate_height_cm(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_weight_kg() {
        assert!(validate_weight_kg(70.0).is_ok());
        assert!(validate_weight_kg(30.0).is_ok());
        assert!(validate_weight_kg(300.0).is_ok());
        assert!(validate_weight_kg(29.99).is_err());
        assert!(validate_weight_kg(300.5).is_err());
    }

    #[rstest]
    #[case(15, true)]
    #[case(100, true)]
    #[case(14, false)]
    #[case(101, false)]
    #[case(-3, false)]
    fn test_validate_age_years(#[case] age: i32, #[case] ok: bool) {
        assert_eq!(validate_age_years(age).is_ok(), ok);
    }

    #[rstest]
    #[case(1, true)]
    #[case(7, true)]
    #[case(0, false)]
    #[case(8, false)]
    fn test_validate_days_available(#[case] days: i32, #[case] ok: bool) {
        assert_eq!(validate_days_available(days).is_ok(), ok);
    }

    #[test]
    fn test_validate_hours_per_day() {
        assert!(validate_hours_per_day(0.5).is_ok());
        assert!(validate_hours_per_day(4.0).is_ok());
        assert!(validate_hours_per_day(0.49).is_err());
        assert!(validate_hours_per_day(4.01).is_err());
    }

    #[test]
    fn test_range_messages() {
        assert_eq!(
            validate_weight_kg(10.0).unwrap_err(),
            "Weight must be between 30 and 300 kg."
        );
        assert_eq!(
            validate_hours_per_day(5.0).unwrap_err(),
            "Hours per day must be between 0.5 and 4."
        );
    }

    #[rstest]
    #[case(Some("180"), Some(180.0))]
    #[case(Some(" 72.5 "), Some(72.5))]
    #[case(Some("1e2"), Some(100.0))]
    #[case(Some(""), None)]
    #[case(Some("abc"), None)]
    #[case(Some("NaN"), None)]
    #[case(Some("inf"), None)]
    #[case(None, None)]
    fn test_parse_number(#[case] raw: Option<&str>, #[case] expected: Option<f64>) {
        assert_eq!(parse_number(field::HEIGHT, raw).ok(), expected);
    }

    #[rstest]
    #[case(Some("30"), Some(30))]
    #[case(Some(" 7"), Some(7))]
    #[case(Some("-1"), Some(-1))]
    #[case(Some("30.5"), None)]
    #[case(Some("thirty"), None)]
    #[case(None, None)]
    fn test_parse_integer(#[case] raw: Option<&str>, #[case] expected: Option<i32>) {
        assert_eq!(parse_integer(field::AGE, raw).ok(), expected);
    }

    #[test]
    fn test_parse_failure_names_field() {
        let err = parse_integer(field::DAYS, Some("x")).unwrap_err();
        assert_eq!(err, EngineError::malformed("days"));
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("activityLevel"), "Activity Level");
        assert_eq!(get_field_display_label("days"), "Days Available");
        assert_eq!(get_field_display_label("hours"), "Hours Per Day");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    #[test]
    fn test_validation_error() {
        let err = ValidationError::new("height", "must be at least 100 cm");
        assert_eq!(err.field, "height");
        assert_eq!(err.display_label, "Height");
        assert_eq!(err.message, "must be at least 100 cm");
    }

    #[test]
    fn test_check_wraps_out_of_range() {
        let err = check(field::AGE, validate_age_years(12)).unwrap_err();
        match err {
            EngineError::OutOfRange(v) => {
                assert_eq!(v.field, "age");
                assert_eq!(v.message, "Age must be between 15 and 100 years.");
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_height_range(height in 100.0f64..=250.0) {
            prop_assert!(validate_height_cm(height).is_ok(),
                "Height {} should be valid", height);
        }

        #[test]
        fn prop_invalid_height_below_min(height in 0.0f64..100.0) {
            prop_assert!(validate_height_cm(height).is_err());
        }

        #[test]
        fn prop_invalid_weight_above_max(weight in 300.01f64..1000.0) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        #[test]
        fn prop_integer_text_round_trips(n in any::<i32>()) {
            prop_assert_eq!(parse_integer(field::AGE, Some(&n.to_string())).ok(), Some(n));
        }
    }
}
