//! Profile form: date bounds, enumerated choice and integer range.

use crate::common::{fixtures, init_logging};
use chrono::NaiveDate;
use form_schema::{FieldValue, Validator, ValidatorConfig};

fn validate(candidate: &form_schema::CandidateRecord) -> form_schema::ValidationResult {
    fixtures::validate_at_reference(&fixtures::profile_schema(), candidate)
}

#[test]
fn test_conforming_profile_is_normalized() {
    init_logging();
    let record = assert_valid!(validate(&fixtures::valid_profile()));

    assert_eq!(
        record.get("DOB"),
        Some(&FieldValue::Date(NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()))
    );
    assert_eq!(record.get("yearsOfExperience"), Some(&FieldValue::Integer(7)));
    assert_eq!(
        record.get("role").and_then(FieldValue::as_text),
        Some("developer")
    );
}

#[test]
fn test_date_of_birth_lower_bound_is_inclusive() {
    let result = validate(&fixtures::valid_profile().with("DOB", "1900-01-01"));
    assert!(result.is_valid());

    let result = validate(&fixtures::valid_profile().with("DOB", "1899-12-31"));
    assert_field_error!(result, "DOB", "Too old");
}

#[test]
fn test_future_date_of_birth_rejected() {
    let today = fixtures::reference_date();

    let result = validate(&fixtures::valid_profile().with("DOB", today.to_string()));
    assert!(result.is_valid());

    let tomorrow = today.succ_opt().unwrap();
    let result = validate(&fixtures::valid_profile().with("DOB", tomorrow.to_string()));
    assert_field_error!(result, "DOB", "Too young!");
}

#[test]
fn test_today_defaults_to_local_date() {
    let schema = fixtures::profile_schema();
    let far_future = fixtures::valid_profile().with("DOB", "2999-01-01");
    let result = Validator::new(&schema).validate(&far_future);
    assert_field_error!(result, "DOB", "Too young!");
}

#[test]
fn test_unparseable_date_uses_field_type_message() {
    let result = validate(&fixtures::valid_profile().with("DOB", "yesterday"));
    assert_field_error!(result, "DOB", "Enter a valid date");

    let result = validate(&fixtures::valid_profile().with("DOB", ""));
    assert_field_error!(result, "DOB", "Enter a valid date");
}

#[test]
fn test_role_choices() {
    let result = validate(&fixtures::valid_profile().with("role", ""));
    assert_field_error!(result, "role", "Select a role");

    let result = validate(&fixtures::valid_profile().with("role", "manager"));
    assert_field_error!(result, "role", "Invalid role");

    for role in ["developer", "designer", "tester"] {
        assert!(validate(&fixtures::valid_profile().with("role", role)).is_valid());
    }
}

#[test]
fn test_role_missing_counts_as_empty() {
    let mut candidate = fixtures::valid_profile();
    candidate.insert("role", serde_json::Value::Null);
    assert_field_error!(validate(&candidate), "role", "Select a role");
}

#[test]
fn test_experience_range() {
    let result = validate(&fixtures::valid_profile().with("yearsOfExperience", "-1"));
    assert_field_error!(result, "yearsOfExperience", "Experience cannot be negative");

    let result = validate(&fixtures::valid_profile().with("yearsOfExperience", 61));
    assert_field_error!(result, "yearsOfExperience", "Experience is too high");

    let result = validate(&fixtures::valid_profile().with("yearsOfExperience", "seven"));
    assert_field_error!(
        result,
        "yearsOfExperience",
        "Experience must be a whole number"
    );

    assert!(validate(&fixtures::valid_profile().with("yearsOfExperience", "0")).is_valid());
    assert!(validate(&fixtures::valid_profile().with("yearsOfExperience", 60)).is_valid());
}

#[test]
fn test_reference_date_moves_today_bound() {
    let schema = fixtures::profile_schema();
    let candidate = fixtures::valid_profile().with("DOB", "2030-01-01");

    let earlier = ValidatorConfig::default()
        .with_reference_date(NaiveDate::from_ymd_opt(2029, 12, 31).unwrap());
    let later = ValidatorConfig::default()
        .with_reference_date(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());

    assert!(!Validator::with_config(&schema, earlier).validate(&candidate).is_valid());
    assert!(Validator::with_config(&schema, later).validate(&candidate).is_valid());
}
