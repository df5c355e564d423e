use crate::output::{read_run_str, SchemaValidator, SchemaWarning};
use crate::utils::config::{DEFAULT_SCHEMA, SCHEMA_VERSION};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Validate an existing JSON document
///
/// Fails when the file is unreadable or is not a SimulationRun at all.
/// Schema violations are printed and returned, not raised.
pub fn validate_document_file(file_path: &Path, schema: Option<&PathBuf>) -> Result<Vec<SchemaWarning>> {
    println!("Validating document: {}", file_path.display());

    let contents = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let document: serde_json::Value =
        serde_json::from_str(&contents).context("File is not valid JSON")?;

    let validator = match schema {
        Some(path) => SchemaValidator::from_file(path)
            .with_context(|| format!("Failed to load schema {}", path.display()))?,
        None => SchemaValidator::embedded().context("Failed to load embedded schema")?,
    };
    let warnings = validator.validate(&document);

    let run = read_run_str(&contents).context("Document is not a simulation run")?;

    if warnings.is_empty() {
        println!("✓ Valid simulation JSON");
    } else {
        println!("⚠ Document has {} schema issue(s):", warnings.len());
        for warning in &warnings {
            println!("  - {}", warning);
        }
    }
    println!("  Groups: {}", run.groups.len());
    for group in &run.groups {
        println!("    {}: {} plot(s)", group.sim_type, group.plots.len());
    }

    Ok(warnings)
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("chi-to-json Output Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("{}", DEFAULT_SCHEMA);
    } else {
        println!("Schema Structure:");
        println!("  [ ]                       - One entry per simulation type");
        println!("    sim_type: string        - \"tran\", \"dc\" or \"ac\"");
        println!("    plots: array            - Tables in order of appearance");
        println!("      [ ]                   - Traces sharing one row index");
        println!("        name: string        - Node or element name");
        println!("        unit: string?       - V, A, s, Hz, dB or °");
        println!("        data: number[]      - Samples in row order");
        println!();
        println!("Use --show for the full JSON Schema");
    }
}

/// Display version information
pub fn display_version() {
    println!("chi-to-json v{}", env!("CARGO_PKG_VERSION"));
    println!("Output Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Converts ELDO .chi simulation logs into schema-validated JSON.");
}
