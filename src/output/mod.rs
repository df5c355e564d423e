//! Output writers and schema validation for simulation documents.
//!
//! This module handles:
//! - JSON documents (pretty and compact)
//! - Reading documents back for validation
//! - JSON Schema checks that warn instead of failing

pub mod json;
pub mod validation;

// Re-export main functions
pub use json::{
    read_run, read_run_str, run_to_string, validate_output_path, write_run, write_run_to,
};
pub use validation::{SchemaValidator, SchemaWarning};
