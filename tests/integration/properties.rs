//! Property-Based Testing for form validation
//!
//! Validation must be total (any candidate yields a result, never a panic),
//! idempotent, and must never report an error on a field the schema does not
//! declare.

use crate::common::fixtures;
use form_schema::{CandidateRecord, ValidationResult};
use proptest::prelude::*;
use serde_json::{Value, json};

/// Raw values a form layer, or a hostile client, might submit
fn raw_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(|n| json!(n)),
        ".{0,30}".prop_map(Value::from),
        "[0-9]{4}-[0-9]{2}-[0-9]{2}".prop_map(Value::from),
        "https?://[a-z]{1,10}\\.[a-z]{2,3}(/[a-z]{0,5})?".prop_map(Value::from),
        "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,4}".prop_map(Value::from),
        prop::collection::vec(any::<i32>().prop_map(Value::from), 0..3).prop_map(Value::from),
    ]
}

fn field_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "username",
            "email",
            "website",
            "githubUrl",
            "password",
            "confirmPassword",
            "firstName",
            "DOB",
            "role",
            "yearsOfExperience",
        ])
        .prop_map(str::to_string),
        "[a-zA-Z]{1,12}",
    ]
}

prop_compose! {
    fn candidate_strategy()
        (entries in prop::collection::vec((field_name_strategy(), raw_value_strategy()), 0..12))
        -> CandidateRecord {
        entries.into_iter().collect()
    }
}

proptest! {
    #[test]
    fn prop_validation_is_total_and_idempotent(candidate in candidate_strategy()) {
        for schema in [fixtures::signup_schema(), fixtures::profile_schema()] {
            let first = fixtures::validate_at_reference(&schema, &candidate);
            let second = fixtures::validate_at_reference(&schema, &candidate);
            prop_assert_eq!(&first, &second);

            match first {
                ValidationResult::Valid(record) => {
                    prop_assert_eq!(record.len(), schema.fields().len());
                }
                ValidationResult::Invalid(errors) => {
                    prop_assert!(!errors.is_empty());
                    for name in errors.names() {
                        prop_assert!(
                            schema.field(name).is_some(),
                            "error on undeclared field {}",
                            name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn prop_username_length_errors_match_bounds(username in ".{0,30}") {
        let schema = fixtures::signup_schema();
        let candidate = fixtures::valid_signup().with("username", username.clone());
        let result = fixtures::validate_at_reference(&schema, &candidate);

        let length = username.chars().count();
        let expected = if length < 2 {
            Some("Username is too short")
        } else if length > 20 {
            Some("Username is too long")
        } else {
            None
        };
        prop_assert_eq!(result.error_for("username"), expected);
    }
}
