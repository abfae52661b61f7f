//! Schema registry for loading, managing, and accessing form schemas.
//!
//! The registry maps schema names to shared, immutable [`Schema`] values. It
//! can be seeded from the embedded example forms or from a directory of JSON
//! schema files.

use super::{embedded, types::Schema};
use crate::error::{SchemaError, SchemaResult};
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Name of the embedded signup form schema.
pub const SIGNUP_SCHEMA: &str = "signup";
/// Name of the embedded profile form schema.
pub const PROFILE_SCHEMA: &str = "profile";

/// Registry of form schemas keyed by name.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Arc<Schema>>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the embedded signup and profile schemas.
    pub fn with_embedded_schemas() -> SchemaResult<Self> {
        let mut registry = Self::new();
        registry.add_schema(Schema::from_json_str(embedded::signup_schema())?)?;
        registry.add_schema(Schema::from_json_str(embedded::profile_schema())?)?;
        info!("Loaded {} embedded form schemas", registry.len());
        Ok(registry)
    }

    /// Create a registry by loading every `*.json` file in a directory.
    pub fn from_schema_dir<P: AsRef<Path>>(schema_dir: P) -> SchemaResult<Self> {
        let mut registry = Self::new();
        let mut paths = Vec::new();
        for entry in fs::read_dir(schema_dir.as_ref())? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        // read_dir order is platform dependent
        paths.sort();

        for path in paths {
            debug!("Loading schema file {}", path.display());
            registry.add_schema(Self::load_schema_from_file(&path)?)?;
        }
        info!(
            "Loaded {} form schemas from {}",
            registry.len(),
            schema_dir.as_ref().display()
        );
        Ok(registry)
    }

    /// Load a single schema from a JSON file.
    pub fn load_schema_from_file<P: AsRef<Path>>(path: P) -> SchemaResult<Schema> {
        let content = fs::read_to_string(&path)?;
        Schema::from_json_str(&content)
    }

    /// Register a schema. Names must be unique.
    pub fn add_schema(&mut self, schema: Schema) -> SchemaResult<Arc<Schema>> {
        if self.schemas.contains_key(schema.name()) {
            return Err(SchemaError::DuplicateSchema {
                name: schema.name().to_string(),
            });
        }
        let schema = Arc::new(schema);
        self.schemas.insert(schema.name().to_string(), Arc::clone(&schema));
        Ok(schema)
    }

    /// Get a schema by name.
    pub fn get_schema(&self, name: &str) -> Option<Arc<Schema>> {
        self.schemas.get(name).cloned()
    }

    /// Get a schema by name, failing if it is not registered.
    pub fn require_schema(&self, name: &str) -> SchemaResult<Arc<Schema>> {
        self.get_schema(name).ok_or_else(|| SchemaError::schema_not_found(name))
    }

    /// Registered schema names, sorted.
    pub fn schema_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
