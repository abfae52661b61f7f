//! Signup form: text lengths, email and URL formats, substring checks and the
//! password confirmation rule.

use crate::common::{fixtures, init_logging};
use form_schema::{
    CrossFieldPolicy, FieldValue, ValidationResult, Validator, ValidatorConfig, validate,
};
use serde_json::{Value, json};

#[test]
fn test_conforming_record_is_valid() {
    init_logging();
    let schema = fixtures::signup_schema();
    let record = assert_valid!(validate(&schema, &fixtures::valid_signup()));

    let names: Vec<_> = record.names().collect();
    assert_eq!(
        names,
        vec![
            "username",
            "email",
            "website",
            "githubUrl",
            "password",
            "confirmPassword"
        ]
    );
    assert_eq!(
        record.get("username"),
        Some(&FieldValue::Text("alice".to_string()))
    );
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "username": "alice",
            "email": "a@b.com",
            "website": "https://x.com",
            "githubUrl": "https://github.com/a",
            "password": "password1",
            "confirmPassword": "password1"
        })
    );
}

#[test]
fn test_password_mismatch_is_attributed_to_confirmation() {
    init_logging();
    let schema = fixtures::signup_schema();
    let candidate = fixtures::valid_signup()
        .with("password", "abc12345")
        .with("confirmPassword", "different");

    let result = validate(&schema, &candidate);
    assert_field_error!(result, "confirmPassword", "Passwords do not match");
    assert_no_field_error!(result, "password");
    assert_eq!(result.errors().unwrap().len(), 1);
}

#[test]
fn test_short_mismatched_confirmation_keeps_field_error() {
    // Only the cross-field rule inspects confirmPassword, so give it a
    // length constraint through a derived schema to observe precedence.
    let mut document: Value =
        serde_json::from_str(&fixtures::signup_schema().to_json_string().unwrap()).unwrap();
    document["fields"][5]["constraints"] = json!([
        { "check": { "minLength": 8 }, "message": "Confirmation is too short" }
    ]);
    let schema = form_schema::Schema::from_json_str(&document.to_string()).unwrap();

    let candidate = fixtures::valid_signup()
        .with("password", "abc12345")
        .with("confirmPassword", "abc");

    let result = validate(&schema, &candidate);
    assert_field_error!(result, "confirmPassword", "Confirmation is too short");

    let config = ValidatorConfig::default().with_cross_field_policy(CrossFieldPolicy::LastRuleWins);
    let result = Validator::with_config(&schema, config).validate(&candidate);
    assert_field_error!(result, "confirmPassword", "Passwords do not match");
}

#[test]
fn test_mismatch_is_checked_even_when_password_fails() {
    let schema = fixtures::signup_schema();
    let candidate = fixtures::valid_signup()
        .with("password", "short")
        .with("confirmPassword", "other");

    let result = validate(&schema, &candidate);
    assert_field_error!(result, "password", "Password is too short");
    assert_field_error!(result, "confirmPassword", "Passwords do not match");
}

#[test]
fn test_username_length_bounds() {
    let schema = fixtures::signup_schema();

    let result = validate(&schema, &fixtures::valid_signup().with("username", "a"));
    assert_field_error!(result, "username", "Username is too short");

    let result = validate(&schema, &fixtures::valid_signup().with("username", ""));
    assert_field_error!(result, "username", "Username is too short");

    let result = validate(&schema, &fixtures::valid_signup().with("username", "a".repeat(21)));
    assert_field_error!(result, "username", "Username is too long");

    assert!(validate(&schema, &fixtures::valid_signup().with("username", "ab")).is_valid());
    let longest = fixtures::valid_signup().with("username", "a".repeat(20));
    assert!(validate(&schema, &longest).is_valid());
}

#[test]
fn test_email_and_website_formats() {
    let schema = fixtures::signup_schema();

    let result = validate(&schema, &fixtures::valid_signup().with("email", "not-an-email"));
    assert_field_error!(result, "email", "Invalid email format");

    let result = validate(&schema, &fixtures::valid_signup().with("website", "x.com"));
    assert_field_error!(result, "website", "Invalid website URL");
}

#[test]
fn test_github_url_checks_in_order() {
    let schema = fixtures::signup_schema();

    // Fails both isUrl and mustInclude: the first declared wins
    let result = validate(&schema, &fixtures::valid_signup().with("githubUrl", "nope"));
    assert_field_error!(result, "githubUrl", "Invalid Github URL");

    let result = validate(
        &schema,
        &fixtures::valid_signup().with("githubUrl", "https://gitlab.com/a"),
    );
    assert_field_error!(result, "githubUrl", "Must be a GitHub URL");
}

#[test]
fn test_empty_record_reports_every_failing_field() {
    init_logging();
    let schema = fixtures::signup_schema();
    let result = validate(&schema, &form_schema::CandidateRecord::new());

    let ValidationResult::Invalid(errors) = result else {
        panic!("empty signup must be invalid");
    };
    let failing: Vec<_> = errors.iter().collect();
    assert_eq!(
        failing,
        vec![
            ("username", &"Username is too short".to_string()),
            ("email", &"Invalid email format".to_string()),
            ("website", &"Invalid website URL".to_string()),
            ("githubUrl", &"Invalid Github URL".to_string()),
            ("password", &"Password is too short".to_string()),
        ]
    );
}

#[test]
fn test_invalid_result_serializes_for_the_form_layer() {
    let schema = fixtures::signup_schema();
    let candidate = fixtures::valid_signup()
        .with("email", "bad")
        .with("confirmPassword", "nope");

    assert_eq!(
        serde_json::to_value(validate(&schema, &candidate)).unwrap(),
        json!({
            "status": "invalid",
            "fields": {
                "email": "Invalid email format",
                "confirmPassword": "Passwords do not match"
            }
        })
    );
}
