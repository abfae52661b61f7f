//! Schema definitions for form validation.
//!
//! A schema describes a flat record: named fields, the kind each one coerces
//! to, the ordered constraints on each field, and cross-field rules whose
//! failures are attributed to a designated target field.
//!
//! # Key Types
//!
//! - [`Schema`] - Immutable form schema
//! - [`SchemaBuilder`] - The single construction path, enforcing authoring rules
//! - [`SchemaRegistry`] - Named schemas, including the embedded example forms
//! - [`Constraint`] / [`CrossFieldRule`] - Per-field and whole-record rules
//!
//! # Examples
//!
//! ```rust
//! use form_schema::schema::SchemaRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::with_embedded_schemas()?;
//! let profile = registry.require_schema("profile")?;
//! assert_eq!(profile.fields().len(), 4);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod constraint;
pub mod embedded;
pub mod formats;
pub mod registry;
pub mod types;


// Re-export the main types for convenience
pub use builder::SchemaBuilder;
pub use constraint::{Check, Constraint, DateBound};
pub use registry::{PROFILE_SCHEMA, SIGNUP_SCHEMA, SchemaRegistry};
pub use types::{CrossFieldRule, FieldKind, FieldSpec, RecordCheck, Schema, SchemaDocument};
