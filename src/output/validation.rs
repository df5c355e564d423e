//! JSON Schema validation of output documents.
//!
//! Validation never blocks output: violations come back as [`SchemaWarning`]
//! values and are logged at `warn` level. Only an unusable schema is an error.

use crate::parser::schema::SimulationRun;
use crate::utils::config::DEFAULT_SCHEMA;
use crate::utils::error::OutputError;
use log::{debug, warn};
use serde_json::Value;
use std::path::Path;

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaWarning {
    /// JSON pointer into the document (empty for the root)
    pub instance_path: String,
    pub message: String,
}

impl std::fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = if self.instance_path.is_empty() {
            "/"
        } else {
            self.instance_path.as_str()
        };
        write!(f, "{}: {}", path, self.message)
    }
}

/// Compiled schema ready to check documents
pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    /// Validator for the schema embedded in the binary
    pub fn embedded() -> Result<Self, OutputError> {
        let schema: Value = serde_json::from_str(DEFAULT_SCHEMA)
            .map_err(|e| OutputError::InvalidSchema(format!("embedded schema: {}", e)))?;
        Self::from_value(&schema)
    }

    /// Load a schema file from disk
    ///
    /// # Errors
    /// * `OutputError::ReadFailed` - File read error
    /// * `OutputError::InvalidSchema` - not JSON, or not a valid schema
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, OutputError> {
        let path = path.as_ref();
        debug!("Loading schema from: {}", path.display());

        let contents = std::fs::read_to_string(path).map_err(OutputError::ReadFailed)?;
        let schema: Value = serde_json::from_str(&contents)
            .map_err(|e| OutputError::InvalidSchema(format!("{}: {}", path.display(), e)))?;
        Self::from_value(&schema)
    }

    pub fn from_value(schema: &Value) -> Result<Self, OutputError> {
        let validator = jsonschema::validator_for(schema)
            .map_err(|e| OutputError::InvalidSchema(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Check a raw JSON document
    pub fn validate(&self, document: &Value) -> Vec<SchemaWarning> {
        let warnings: Vec<SchemaWarning> = self
            .validator
            .iter_errors(document)
            .map(|e| SchemaWarning {
                instance_path: e.instance_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        for warning in &warnings {
            warn!("Schema validation: {}", warning);
        }

        warnings
    }

    /// Check a parsed run as it will be serialized
    pub fn validate_run(&self, run: &SimulationRun) -> Result<Vec<SchemaWarning>, OutputError> {
        let document = serde_json::to_value(run)?;
        Ok(self.validate(&document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{Plot, SimType, SimulationGroup, Trace, Unit};
    use serde_json::json;

    #[test]
    fn test_embedded_schema_compiles() {
        assert!(SchemaValidator::embedded().is_ok());
    }

    #[test]
    fn test_valid_run_has_no_warnings() {
        let mut trace = Trace::new("out", Some(Unit::Volt));
        trace.data.push(1.0);
        let run = SimulationRun {
            groups: vec![SimulationGroup {
                sim_type: SimType::Ac,
                plots: vec![Plot::new(vec![trace])],
            }],
        };

        let validator = SchemaValidator::embedded().unwrap();
        assert!(validator.validate_run(&run).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_sim_type_is_reported() {
        let validator = SchemaValidator::embedded().unwrap();
        let document = json!([{ "sim_type": "noise", "plots": [] }]);

        let warnings = validator.validate(&document);
        assert!(!warnings.is_empty());
        assert!(warnings.iter().any(|w| w.instance_path == "/0/sim_type"));
    }

    #[test]
    fn test_missing_data_is_reported() {
        let validator = SchemaValidator::embedded().unwrap();
        let document = json!([{ "sim_type": "tran", "plots": [[{ "name": "out" }]] }]);

        assert!(!validator.validate(&document).is_empty());
    }

    #[test]
    fn test_invalid_schema_is_error() {
        let result = SchemaValidator::from_value(&json!({ "type": 12 }));
        assert!(matches!(result, Err(OutputError::InvalidSchema(_))));
    }
}
