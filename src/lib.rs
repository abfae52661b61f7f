//! Declarative form schemas for Rust.
//!
//! Describe a form as data (fields, kinds, ordered constraints, cross-field
//! rules), then validate submitted records against it. A validation either
//! yields a normalized record with every field coerced to its kind, or an
//! ordered map of one message per failing field, ready to render next to the
//! matching input.
//!
//! # Core Components
//!
//! - [`Schema`] / [`SchemaBuilder`] - Form description and its construction checks
//! - [`SchemaRegistry`] - Named schemas, seeded from embedded JSON or a directory
//! - [`Validator`] - Runs a schema against a [`CandidateRecord`]
//! - [`ValidationResult`] - `Valid(normalized)` or `Invalid(errors by field)`
//!
//! # Quick Start
//!
//! ```rust
//! use form_schema::{CandidateRecord, SchemaRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::with_embedded_schemas()?;
//! let profile = registry.require_schema("profile")?;
//!
//! let result = profile.validate(&CandidateRecord::new().with("role", "manager"));
//! assert_eq!(result.error_for("role"), Some("Invalid role"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod record;
pub mod schema;
pub mod validator;

// Re-export commonly used types for convenience
pub use error::{RecordError, RecordResult, SchemaError, SchemaResult};
pub use record::{CandidateRecord, FieldErrors, FieldMap, FieldValue, NormalizedRecord};
pub use schema::{
    Constraint, CrossFieldRule, FieldKind, FieldSpec, RecordCheck, Schema, SchemaBuilder,
    SchemaRegistry,
};
pub use validator::{CrossFieldPolicy, ValidationResult, Validator, ValidatorConfig, validate};
