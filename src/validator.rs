//! Validation of candidate records against a form schema.
//!
//! Validation runs in two passes. Each field is coerced to its kind and checked
//! against its constraints in declaration order, stopping at the first failure.
//! Cross-field rules then run against the raw candidate record, so a rule can
//! still compare fields that failed their own checks.
//!
//! Failures are data: [`validate`] always returns a [`ValidationResult`] and
//! never panics, whatever shape the candidate record has.
//!
//! # Examples
//!
//! ```rust
//! use form_schema::{CandidateRecord, SchemaRegistry, ValidationResult};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::with_embedded_schemas()?;
//! let signup = registry.require_schema("signup")?;
//!
//! let candidate = CandidateRecord::new()
//!     .with("username", "alice")
//!     .with("email", "a@b.com")
//!     .with("website", "https://x.com")
//!     .with("githubUrl", "https://github.com/a")
//!     .with("password", "abc12345")
//!     .with("confirmPassword", "different");
//!
//! let result = signup.validate(&candidate);
//! assert!(!result.is_valid());
//! assert_eq!(result.error_for("confirmPassword"), Some("Passwords do not match"));
//! assert_eq!(result.error_for("password"), None);
//! # Ok(())
//! # }
//! ```

use crate::record::{CandidateRecord, FieldErrors, FieldValue, NormalizedRecord};
use crate::schema::{FieldSpec, Schema};
use chrono::{Local, NaiveDate};
use log::{debug, trace, warn};
use serde::Serialize;

/// How a failing cross-field rule interacts with an existing error on its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossFieldPolicy {
    /// A field's own constraint message is kept; the rule is dropped.
    #[default]
    PerFieldWins,
    /// The rule's message replaces whatever is recorded for the target,
    /// including an earlier rule's message.
    LastRuleWins,
}

/// Validator settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Date that `today` bounds resolve to. Defaults to the local date at
    /// the time of each validation.
    pub reference_date: Option<NaiveDate>,

    /// Precedence between per-field and cross-field errors.
    pub cross_field_policy: CrossFieldPolicy,
}

impl ValidatorConfig {
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn with_cross_field_policy(mut self, policy: CrossFieldPolicy) -> Self {
        self.cross_field_policy = policy;
        self
    }

    fn today(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Outcome of validating one candidate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "fields", rename_all = "camelCase")]
pub enum ValidationResult {
    /// Every field coerced and passed; values are in declaration order.
    Valid(NormalizedRecord),
    /// At most one message per failing field, in declaration order.
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn record(&self) -> Option<&NormalizedRecord> {
        match self {
            Self::Valid(record) => Some(record),
            Self::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Message to display next to `field`, if any.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors()?.get(field).map(String::as_str)
    }

    pub fn into_result(self) -> Result<NormalizedRecord, FieldErrors> {
        match self {
            Self::Valid(record) => Ok(record),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

/// Validates candidate records against one schema.
#[derive(Debug, Clone)]
pub struct Validator<'a> {
    schema: &'a Schema,
    config: ValidatorConfig,
}

impl<'a> Validator<'a> {
    /// Create a validator with default configuration.
    pub fn new(schema: &'a Schema) -> Self {
        Self::with_config(schema, ValidatorConfig::default())
    }

    pub fn with_config(schema: &'a Schema, config: ValidatorConfig) -> Self {
        Self { schema, config }
    }

    pub fn schema(&self) -> &Schema {
        self.schema
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a candidate record.
    pub fn validate(&self, candidate: &CandidateRecord) -> ValidationResult {
        let today = self.config.today();
        let mut normalized = NormalizedRecord::new();
        let mut errors = FieldErrors::new();

        debug!(
            "Validating {} submitted field(s) against schema '{}'",
            candidate.len(),
            self.schema.name()
        );

        for field in self.schema.fields() {
            match check_field(field, candidate, today) {
                Ok(value) => normalized.insert(field.name.as_str(), value),
                Err(message) => {
                    trace!("Field '{}' failed: {}", field.name, message);
                    errors.insert(field.name.as_str(), message.to_string());
                }
            }
        }

        for rule in self.schema.cross_field_rules() {
            if rule.check.passes(candidate) {
                continue;
            }
            let target = rule.target_path.as_str();
            match self.config.cross_field_policy {
                CrossFieldPolicy::PerFieldWins if errors.contains(target) => {
                    trace!(
                        "Cross-field rule on '{}' failed but the field already has an error",
                        target
                    );
                }
                _ => {
                    trace!("Cross-field rule on '{}' failed: {}", target, rule.message);
                    errors.insert(target, rule.message.clone());
                }
            }
        }

        for key in candidate.keys() {
            if self.schema.field(key).is_none() {
                warn!(
                    "Ignoring field '{}' not declared by schema '{}'",
                    key,
                    self.schema.name()
                );
            }
        }

        if errors.is_empty() {
            debug!("Schema '{}': candidate is valid", self.schema.name());
            ValidationResult::Valid(normalized)
        } else {
            errors.sort_by_rank(|name| self.schema.position(name).unwrap_or(usize::MAX));
            debug!(
                "Schema '{}': {} field(s) failed validation",
                self.schema.name(),
                errors.len()
            );
            ValidationResult::Invalid(errors)
        }
    }
}

/// Coerce one field and run its constraints, returning the first failure message.
fn check_field<'s>(
    field: &'s FieldSpec,
    candidate: &CandidateRecord,
    today: NaiveDate,
) -> Result<FieldValue, &'s str> {
    let value = field
        .kind
        .coerce(candidate.get(&field.name))
        .ok_or_else(|| field.type_message())?;

    match field
        .constraints
        .iter()
        .find(|constraint| !constraint.check.passes(&value, today))
    {
        Some(failed) => Err(failed.message.as_str()),
        None => Ok(value),
    }
}

/// Validate with the default configuration.
pub fn validate(schema: &Schema, candidate: &CandidateRecord) -> ValidationResult {
    Validator::new(schema).validate(candidate)
}

impl Schema {
    /// Validate a candidate record with the default configuration.
    pub fn validate(&self, candidate: &CandidateRecord) -> ValidationResult {
        validate(self, candidate)
    }
}
