//! Schema construction.
//!
//! The builder is the only place a [`Schema`] is mutated. Every authoring
//! mistake it can detect (duplicate fields, rules pointing at fields that do
//! not exist, constraints that cannot apply to a field's kind) is rejected
//! here so validation never has to deal with a malformed schema.

use super::constraint::Constraint;
use super::types::{CrossFieldRule, FieldKind, FieldSpec, RecordCheck, Schema};
use crate::error::{SchemaError, SchemaResult};
use log::trace;

/// Incremental builder for a [`Schema`].
///
/// ```rust
/// use form_schema::schema::{Constraint, FieldKind, RecordCheck, SchemaBuilder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut builder = SchemaBuilder::new("signup");
/// builder
///     .define_field(
///         "password",
///         FieldKind::Text,
///         vec![Constraint::min_length(8, "Password is too short")],
///     )?
///     .define_field("confirmPassword", FieldKind::Text, vec![])?
///     .add_cross_field_rule(
///         RecordCheck::fields_match("confirmPassword", "password"),
///         "Passwords do not match",
///         "confirmPassword",
///     )?;
/// let schema = builder.build();
/// assert_eq!(schema.fields().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: String,
    description: String,
    fields: Vec<FieldSpec>,
    cross_field_rules: Vec<CrossFieldRule>,
}

impl SchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            fields: Vec::new(),
            cross_field_rules: Vec::new(),
        }
    }

    pub fn with_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Append a field with its ordered constraints.
    pub fn define_field(
        &mut self,
        name: impl Into<String>,
        kind: FieldKind,
        constraints: Vec<Constraint>,
    ) -> SchemaResult<&mut Self> {
        let mut spec = FieldSpec::new(name, kind);
        spec.constraints = constraints;
        self.define(spec)
    }

    /// Append a fully specified field.
    pub fn define(&mut self, spec: FieldSpec) -> SchemaResult<&mut Self> {
        if spec.name.is_empty() {
            return Err(SchemaError::EmptyFieldName {
                schema: self.name.clone(),
            });
        }
        if self.is_defined(&spec.name) {
            return Err(SchemaError::duplicate_field(&self.name, &spec.name));
        }
        if let Some(constraint) = spec
            .constraints
            .iter()
            .find(|constraint| !constraint.check.applies_to(spec.kind))
        {
            return Err(SchemaError::incompatible(
                &spec.name,
                spec.kind.to_string(),
                constraint.check.name(),
            ));
        }

        trace!(
            "Schema '{}': defined {} field '{}' with {} constraint(s)",
            self.name,
            spec.kind,
            spec.name,
            spec.constraints.len()
        );
        self.fields.push(spec);
        Ok(self)
    }

    /// Append a cross-field rule.
    ///
    /// The target and every field the check reads must already be defined.
    pub fn add_cross_field_rule(
        &mut self,
        check: RecordCheck,
        message: impl Into<String>,
        target_path: impl Into<String>,
    ) -> SchemaResult<&mut Self> {
        let target_path = target_path.into();
        if !self.is_defined(&target_path) {
            return Err(SchemaError::unknown_target(&self.name, target_path));
        }
        if let Some(field) = check
            .referenced_fields()
            .into_iter()
            .find(|field| !self.is_defined(field))
        {
            return Err(SchemaError::unknown_reference(&self.name, field));
        }

        self.cross_field_rules.push(CrossFieldRule {
            check,
            message: message.into(),
            target_path,
        });
        Ok(self)
    }

    pub fn build(self) -> Schema {
        Schema {
            name: self.name,
            description: self.description,
            fields: self.fields,
            cross_field_rules: self.cross_field_rules,
        }
    }

    fn is_defined(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }
}
