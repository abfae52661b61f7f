//! Core schema type definitions.
//!
//! This module contains the data structures that describe a form: its fields,
//! the kind each field coerces to, and the cross-field rules evaluated once
//! every field has been checked.

use super::builder::SchemaBuilder;
use super::constraint::Constraint;
use crate::error::{SchemaError, SchemaResult};
use crate::record::{CandidateRecord, FieldValue};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A form schema.
///
/// Built once through [`SchemaBuilder`] (or loaded from JSON, which goes
/// through the same builder) and read-only afterwards, so a single schema can
/// be shared by every validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SchemaDocument")]
pub struct Schema {
    pub(super) name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub(super) description: String,
    pub(super) fields: Vec<FieldSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(super) cross_field_rules: Vec<CrossFieldRule>,
}

/// Unchecked wire form of a [`Schema`].
///
/// Converting it into a [`Schema`] replays every field and rule through
/// [`SchemaBuilder`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub cross_field_rules: Vec<CrossFieldRule>,
}

impl TryFrom<SchemaDocument> for Schema {
    type Error = SchemaError;

    fn try_from(document: SchemaDocument) -> SchemaResult<Self> {
        let mut builder = SchemaBuilder::new(document.name);
        builder.with_description(document.description);
        for field in document.fields {
            builder.define(field)?;
        }
        for rule in document.cross_field_rules {
            builder.add_cross_field_rule(rule.check, rule.message, rule.target_path)?;
        }
        Ok(builder.build())
    }
}

impl Schema {
    /// Start building a schema.
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name)
    }

    /// Load a schema from JSON, applying every construction check.
    pub fn from_json_str(content: &str) -> SchemaResult<Self> {
        let document: SchemaDocument = serde_json::from_str(content)?;
        Self::try_from(document)
    }

    /// Serialize the schema to pretty-printed JSON.
    pub fn to_json_string(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Declaration index of a field, used to order error output.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    pub fn cross_field_rules(&self) -> &[CrossFieldRule] {
        &self.cross_field_rules
    }
}

/// One named field of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    /// Evaluated in order; the first failure is reported.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
    /// Overrides the kind's default coercion-failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_message: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            constraints: Vec::new(),
            type_message: None,
        }
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_type_message(mut self, message: impl Into<String>) -> Self {
        self.type_message = Some(message.into());
        self
    }

    /// Message reported when the raw value cannot be coerced to this field's kind.
    pub fn type_message(&self) -> &str {
        self.type_message
            .as_deref()
            .unwrap_or(self.kind.default_type_message())
    }
}

/// The primitive a field's raw input is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Url,
    /// Calendar date, `YYYY-MM-DD` or an RFC 3339 timestamp
    Date,
    Integer,
    /// One of a closed set of strings, enforced with an `isOneOf` constraint
    Enum,
}

impl FieldKind {
    /// Whether values of this kind coerce to text.
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Text | Self::Email | Self::Url | Self::Enum)
    }

    pub fn default_type_message(&self) -> &'static str {
        match self {
            Self::Text | Self::Email | Self::Url | Self::Enum => "Expected a string",
            Self::Integer => "Expected a number",
            Self::Date => "Invalid date",
        }
    }

    /// Coerce a raw form value.
    ///
    /// Absent and `null` input count as empty: textual kinds yield an empty
    /// string, dates and integers have nothing to parse and fail.
    pub fn coerce(&self, raw: Option<&Value>) -> Option<FieldValue> {
        let raw = raw.filter(|value| !value.is_null());
        match self {
            Self::Text | Self::Email | Self::Url | Self::Enum => match raw {
                None => Some(FieldValue::Text(String::new())),
                Some(Value::String(text)) => Some(FieldValue::Text(text.clone())),
                Some(_) => None,
            },
            Self::Integer => match raw? {
                Value::Number(number) => number.as_i64().map(FieldValue::Integer),
                Value::String(text) => text.trim().parse().ok().map(FieldValue::Integer),
                _ => None,
            },
            Self::Date => match raw? {
                Value::String(text) => parse_date(text.trim()).map(FieldValue::Date),
                _ => None,
            },
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Url => "url",
            Self::Date => "date",
            Self::Integer => "integer",
            Self::Enum => "enum",
        };
        f.write_str(name)
    }
}

/// Parse a date input, delegating to chrono for calendar validity.
fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// A rule over the whole candidate record, reported against one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossFieldRule {
    pub check: RecordCheck,
    pub message: String,
    /// Field the error is attached to; need not be one the check reads
    pub target_path: String,
}

/// Predicates over a candidate record.
///
/// Comparisons use raw values, so they still run when a referenced field
/// failed its own constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordCheck {
    /// `field` must equal `other`
    FieldsMatch { field: String, other: String },
    /// `field` must differ from `other`
    FieldsDiffer { field: String, other: String },
}

impl RecordCheck {
    pub fn fields_match(field: impl Into<String>, other: impl Into<String>) -> Self {
        Self::FieldsMatch {
            field: field.into(),
            other: other.into(),
        }
    }

    pub fn fields_differ(field: impl Into<String>, other: impl Into<String>) -> Self {
        Self::FieldsDiffer {
            field: field.into(),
            other: other.into(),
        }
    }

    /// Field names the predicate reads.
    pub fn referenced_fields(&self) -> [&str; 2] {
        match self {
            Self::FieldsMatch { field, other } | Self::FieldsDiffer { field, other } => {
                [field.as_str(), other.as_str()]
            }
        }
    }

    pub fn passes(&self, record: &CandidateRecord) -> bool {
        match self {
            Self::FieldsMatch { field, other } => {
                record.comparable(field) == record.comparable(other)
            }
            Self::FieldsDiffer { field, other } => {
                record.comparable(field) != record.comparable(other)
            }
        }
    }
}
