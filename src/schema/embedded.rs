//! Embedded example form schemas.
//!
//! The two demo forms are shipped as JSON strings so a registry can be built
//! without any schema files on disk.

/// Returns the signup form schema as a JSON string.
///
/// Username, email, website, GitHub URL and a password confirmed by a second
/// entry. A mismatch is reported on `confirmPassword`.
pub fn signup_schema() -> &'static str {
    r#"{
  "name": "signup",
  "description": "Account registration form",
  "fields": [
    {
      "name": "username",
      "kind": "text",
      "constraints": [
        { "check": { "minLength": 2 }, "message": "Username is too short" },
        { "check": { "maxLength": 20 }, "message": "Username is too long" }
      ]
    },
    {
      "name": "email",
      "kind": "email",
      "constraints": [
        { "check": "isEmail", "message": "Invalid email format" }
      ]
    },
    {
      "name": "website",
      "kind": "url",
      "constraints": [
        { "check": "isUrl", "message": "Invalid website URL" }
      ]
    },
    {
      "name": "githubUrl",
      "kind": "url",
      "constraints": [
        { "check": "isUrl", "message": "Invalid Github URL" },
        { "check": { "mustInclude": "github.com" }, "message": "Must be a GitHub URL" }
      ]
    },
    {
      "name": "password",
      "kind": "text",
      "constraints": [
        { "check": { "minLength": 8 }, "message": "Password is too short" },
        { "check": { "maxLength": 20 }, "message": "Password is too long" }
      ]
    },
    {
      "name": "confirmPassword",
      "kind": "text"
    }
  ],
  "crossFieldRules": [
    {
      "check": { "fieldsMatch": { "field": "confirmPassword", "other": "password" } },
      "message": "Passwords do not match",
      "targetPath": "confirmPassword"
    }
  ]
}"#
}

/// Returns the profile form schema as a JSON string.
///
/// Name, date of birth bounded by 1900-01-01 and today, a role picked from a
/// fixed list, and years of experience.
pub fn profile_schema() -> &'static str {
    r#"{
  "name": "profile",
  "description": "Personal profile form",
  "fields": [
    {
      "name": "firstName",
      "kind": "text",
      "constraints": [
        { "check": "required", "message": "First name is required" },
        { "check": { "maxLength": 50 }, "message": "First name is too long" }
      ]
    },
    {
      "name": "DOB",
      "kind": "date",
      "typeMessage": "Enter a valid date",
      "constraints": [
        { "check": { "minDate": "1900-01-01" }, "message": "Too old" },
        { "check": { "maxDate": "today" }, "message": "Too young!" }
      ]
    },
    {
      "name": "role",
      "kind": "enum",
      "constraints": [
        { "check": "required", "message": "Select a role" },
        { "check": { "isOneOf": ["developer", "designer", "tester"] }, "message": "Invalid role" }
      ]
    },
    {
      "name": "yearsOfExperience",
      "kind": "integer",
      "typeMessage": "Experience must be a whole number",
      "constraints": [
        { "check": { "minValue": 0 }, "message": "Experience cannot be negative" },
        { "check": { "maxValue": 60 }, "message": "Experience is too high" }
      ]
    }
  ]
}"#
}
