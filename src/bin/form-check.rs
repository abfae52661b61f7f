//! # Form Check
//!
//! A command-line utility for validating a JSON record against a form schema,
//! the same way a form submission would be validated.
//!
//! ## Usage
//!
//! ### Validate against an embedded schema
//!
//! ```bash
//! cargo run --bin form-check signup record.json
//! ```
//!
//! ### Validate against a schema file
//!
//! ```bash
//! cargo run --bin form-check schemas/signup.json record.json
//! ```
//!
//! ### Print a schema
//!
//! ```bash
//! cargo run --bin form-check profile
//! ```
//!
//! ## Output Examples
//!
//! ```text
//! Validating record.json against schema 'signup'
//! ❌ 1 field(s) failed:
//!   confirmPassword: Passwords do not match
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: The record is valid (or a schema was printed)
//! - `1`: The record is invalid, or the schema/record could not be loaded

use form_schema::schema::SchemaRegistry;
use form_schema::{CandidateRecord, Schema, ValidationResult};
use std::env;
use std::fs;
use std::path::Path;
use std::process;
use std::sync::Arc;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <schema-name|schema.json> [record.json]", args[0]);
        eprintln!();
        eprintln!("Embedded schemas: signup, profile");
        eprintln!("Examples:");
        eprintln!("  {} signup record.json", args[0]);
        eprintln!("  {} ./schemas/profile.json record.json", args[0]);
        process::exit(1);
    }

    let schema = match load_schema(&args[1]) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("❌ Failed to load schema '{}': {}", args[1], e);
            process::exit(1);
        }
    };

    let Some(record_path) = args.get(2) else {
        print_schema_summary(&schema);
        return;
    };

    let candidate = match fs::read_to_string(record_path)
        .map_err(|e| e.to_string())
        .and_then(|content| CandidateRecord::from_json_str(&content).map_err(|e| e.to_string()))
    {
        Ok(candidate) => candidate,
        Err(e) => {
            eprintln!("❌ Failed to read record '{}': {}", record_path, e);
            process::exit(1);
        }
    };

    println!(
        "Validating {} against schema '{}'",
        record_path,
        schema.name()
    );

    match schema.validate(&candidate) {
        ValidationResult::Valid(record) => {
            println!("✓ Record is valid!");
            for (name, value) in record.iter() {
                println!("  {}: {}", name, value);
            }
        }
        ValidationResult::Invalid(errors) => {
            eprintln!("❌ {} field(s) failed:", errors.len());
            for (name, message) in errors.iter() {
                eprintln!("  {}: {}", name, message);
            }
            process::exit(1);
        }
    }
}

/// Resolve a schema argument: an existing file path, else an embedded schema name.
fn load_schema(argument: &str) -> Result<Arc<Schema>, Box<dyn std::error::Error>> {
    let path = Path::new(argument);
    if path.is_file() {
        return Ok(Arc::new(SchemaRegistry::load_schema_from_file(path)?));
    }
    let registry = SchemaRegistry::with_embedded_schemas()?;
    Ok(registry.require_schema(argument)?)
}

fn print_schema_summary(schema: &Schema) {
    println!("Schema Summary:");
    println!("  Name: {}", schema.name());
    if !schema.description().is_empty() {
        println!("  Description: {}", schema.description());
    }
    println!("  Fields: {}", schema.fields().len());
    for field in schema.fields() {
        let checks: Vec<&str> = field
            .constraints
            .iter()
            .map(|constraint| constraint.check.name())
            .collect();
        println!("    - {} ({}): {}", field.name, field.kind, checks.join(", "));
    }
    if !schema.cross_field_rules().is_empty() {
        println!("  Cross-field rules: {}", schema.cross_field_rules().len());
        for rule in schema.cross_field_rules() {
            println!("    - {} -> {}", rule.message, rule.target_path);
        }
    }
}
