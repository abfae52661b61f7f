//! Per-field constraints.
//!
//! A constraint pairs a [`Check`] with the message shown when it fails. Checks
//! are plain data so schemas can be inspected, compared and loaded from JSON.

use super::formats::{is_valid_email, is_valid_url};
use super::types::FieldKind;
use crate::record::FieldValue;
use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A single pass/fail rule on one field and the message reported on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub check: Check,
    pub message: String,
}

/// The predicate side of a [`Constraint`].
///
/// String checks count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Check {
    /// Text must not be empty. Only textual kinds accept it: an empty integer or
    /// date already fails coercion with the field's type message.
    Required,
    MinLength(usize),
    MaxLength(usize),
    IsEmail,
    IsUrl,
    MustInclude(String),
    /// Inclusive lower date bound
    MinDate(DateBound),
    /// Inclusive upper date bound
    MaxDate(DateBound),
    MinValue(i64),
    MaxValue(i64),
    IsOneOf(Vec<String>),
}

/// A date bound: either fixed, or the validation reference date.
///
/// Serialized as `"today"` or an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateBound {
    Fixed(NaiveDate),
    Today,
}

impl DateBound {
    /// Resolve against the reference date of the current validation.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Fixed(date) => *date,
            Self::Today => today,
        }
    }
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Today => write!(f, "today"),
        }
    }
}

impl From<NaiveDate> for DateBound {
    fn from(date: NaiveDate) -> Self {
        Self::Fixed(date)
    }
}

impl Serialize for DateBound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateBound {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if text == "today" {
            return Ok(Self::Today);
        }
        NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .map(Self::Fixed)
            .map_err(|_| de::Error::custom(format!("invalid date bound '{}'", text)))
    }
}

impl Check {
    /// Name used in schema JSON and construction errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength(_) => "minLength",
            Self::MaxLength(_) => "maxLength",
            Self::IsEmail => "isEmail",
            Self::IsUrl => "isUrl",
            Self::MustInclude(_) => "mustInclude",
            Self::MinDate(_) => "minDate",
            Self::MaxDate(_) => "maxDate",
            Self::MinValue(_) => "minValue",
            Self::MaxValue(_) => "maxValue",
            Self::IsOneOf(_) => "isOneOf",
        }
    }

    /// Whether this check can be meaningfully applied to a field of `kind`.
    pub fn applies_to(&self, kind: FieldKind) -> bool {
        match self {
            Self::Required
            | Self::MinLength(_)
            | Self::MaxLength(_)
            | Self::IsEmail
            | Self::IsUrl
            | Self::MustInclude(_)
            | Self::IsOneOf(_) => kind.is_textual(),
            Self::MinDate(_) | Self::MaxDate(_) => kind == FieldKind::Date,
            Self::MinValue(_) | Self::MaxValue(_) => kind == FieldKind::Integer,
        }
    }

    /// Evaluate against a coerced value.
    ///
    /// A value of the wrong shape fails; schema construction rules this out.
    pub fn passes(&self, value: &FieldValue, today: NaiveDate) -> bool {
        match (self, value) {
            (Self::Required, FieldValue::Text(text)) => !text.is_empty(),
            (Self::MinLength(min), FieldValue::Text(text)) => text.chars().count() >= *min,
            (Self::MaxLength(max), FieldValue::Text(text)) => text.chars().count() <= *max,
            (Self::IsEmail, FieldValue::Text(text)) => is_valid_email(text),
            (Self::IsUrl, FieldValue::Text(text)) => is_valid_url(text),
            (Self::MustInclude(needle), FieldValue::Text(text)) => text.contains(needle.as_str()),
            (Self::IsOneOf(allowed), FieldValue::Text(text)) => {
                allowed.iter().any(|option| option == text)
            }
            (Self::MinDate(bound), FieldValue::Date(date)) => *date >= bound.resolve(today),
            (Self::MaxDate(bound), FieldValue::Date(date)) => *date <= bound.resolve(today),
            (Self::MinValue(min), FieldValue::Integer(number)) => number >= min,
            (Self::MaxValue(max), FieldValue::Integer(number)) => number <= max,
            _ => false,
        }
    }
}

impl Constraint {
    pub fn new(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(Check::Required, message)
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::new(Check::MinLength(min), message)
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::new(Check::MaxLength(max), message)
    }

    pub fn is_email(message: impl Into<String>) -> Self {
        Self::new(Check::IsEmail, message)
    }

    pub fn is_url(message: impl Into<String>) -> Self {
        Self::new(Check::IsUrl, message)
    }

    pub fn must_include(needle: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Check::MustInclude(needle.into()), message)
    }

    pub fn min_date(bound: impl Into<DateBound>, message: impl Into<String>) -> Self {
        Self::new(Check::MinDate(bound.into()), message)
    }

    pub fn max_date(bound: impl Into<DateBound>, message: impl Into<String>) -> Self {
        Self::new(Check::MaxDate(bound.into()), message)
    }

    pub fn min_value(min: i64, message: impl Into<String>) -> Self {
        Self::new(Check::MinValue(min), message)
    }

    pub fn max_value(max: i64, message: impl Into<String>) -> Self {
        Self::new(Check::MaxValue(max), message)
    }

    pub fn is_one_of<I, S>(allowed: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            Check::IsOneOf(allowed.into_iter().map(Into::into).collect()),
            message,
        )
    }
}
