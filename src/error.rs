//! Error types for schema construction and record intake.
//!
//! Field-level validation failures are never errors: they are reported as data
//! through [`crate::validator::ValidationResult`]. The types here cover the two
//! places where something can genuinely go wrong: authoring a schema, and
//! handing the validator something that is not a record at all.

/// Errors raised while building or loading a schema.
///
/// These are programming errors in the schema definition and should be caught
/// during development rather than on user input.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A field name was defined twice in the same schema
    #[error("Field '{field}' is already defined in schema '{schema}'")]
    DuplicateField { schema: String, field: String },

    /// Field names cannot be empty
    #[error("Schema '{schema}' contains a field with an empty name")]
    EmptyFieldName { schema: String },

    /// A cross-field rule points its error at a field that does not exist
    #[error("Cross-field rule targets undefined field '{target}' in schema '{schema}'")]
    UnknownTargetPath { schema: String, target: String },

    /// A cross-field predicate reads a field that does not exist
    #[error("Cross-field rule references undefined field '{field}' in schema '{schema}'")]
    UnknownReferencedField { schema: String, field: String },

    /// A constraint cannot apply to the kind of value its field produces
    #[error("Constraint '{constraint}' cannot apply to {kind} field '{field}'")]
    IncompatibleConstraint {
        field: String,
        kind: String,
        constraint: String,
    },

    /// Two schemas with the same name were registered
    #[error("Schema '{name}' is already registered")]
    DuplicateSchema { name: String },

    /// Schema lookup by name failed
    #[error("Schema not found: {name}")]
    SchemaNotFound { name: String },

    /// Schema files could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised when turning raw input into a candidate record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The input was valid JSON but not an object
    #[error("Candidate record must be a JSON object, got {actual}")]
    NotAnObject { actual: String },

    /// JSON parse errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Create a duplicate field error
    pub fn duplicate_field(schema: impl Into<String>, field: impl Into<String>) -> Self {
        Self::DuplicateField {
            schema: schema.into(),
            field: field.into(),
        }
    }

    /// Create an unknown target path error
    pub fn unknown_target(schema: impl Into<String>, target: impl Into<String>) -> Self {
        Self::UnknownTargetPath {
            schema: schema.into(),
            target: target.into(),
        }
    }

    /// Create an unknown referenced field error
    pub fn unknown_reference(schema: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownReferencedField {
            schema: schema.into(),
            field: field.into(),
        }
    }

    /// Create an incompatible constraint error
    pub fn incompatible(
        field: impl Into<String>,
        kind: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        Self::IncompatibleConstraint {
            field: field.into(),
            kind: kind.into(),
            constraint: constraint.into(),
        }
    }

    /// Create a schema not found error
    pub fn schema_not_found(name: impl Into<String>) -> Self {
        Self::SchemaNotFound { name: name.into() }
    }
}

// Result type aliases for convenience
pub type SchemaResult<T> = Result<T, SchemaError>;
pub type RecordResult<T> = Result<T, RecordError>;
