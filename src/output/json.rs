//! JSON document output writer.
//!
//! Writes SimulationRun documents to JSON files with proper formatting.

use crate::parser::schema::SimulationRun;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a run to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `run` - Parsed simulation data to write
/// * `output_path` - Path to output JSON file
/// * `pretty` - Indent the document instead of writing it on one line
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_run(
    run: &SimulationRun,
    output_path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);
    write_run_to(run, &mut writer, pretty)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "JSON written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a run into any writer (stdout, buffers)
pub fn write_run_to<W: Write>(
    run: &SimulationRun,
    writer: W,
    pretty: bool,
) -> Result<(), OutputError> {
    if pretty {
        serde_json::to_writer_pretty(writer, run)?;
    } else {
        serde_json::to_writer(writer, run)?;
    }
    Ok(())
}

/// Serialize a run to a string (for testing or in-memory use)
pub fn run_to_string(run: &SimulationRun, pretty: bool) -> Result<String, OutputError> {
    let json = if pretty {
        serde_json::to_string_pretty(run)?
    } else {
        serde_json::to_string(run)?
    };
    Ok(json)
}

/// Validate that output path is writable
///
/// **Public** - also used by the convert command for early argument checks
pub fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            // This is okay - we'll create it
            debug!("Parent directory will be created: {}", parent.display());
        }
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a run back from a JSON file
///
/// # Errors
/// * `OutputError::ReadFailed` - File read error
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_run(input_path: impl AsRef<Path>) -> Result<SimulationRun, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading JSON from: {}", input_path.display());

    let contents = std::fs::read_to_string(input_path).map_err(OutputError::ReadFailed)?;
    let run = read_run_str(&contents)?;

    debug!(
        "Loaded {} groups, {} plots",
        run.groups.len(),
        run.plot_count()
    );

    Ok(run)
}

/// Parse a run from a JSON string
pub fn read_run_str(json: &str) -> Result<SimulationRun, OutputError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{Plot, SimType, SimulationGroup, Trace, Unit};
    use tempfile::NamedTempFile;

    fn create_test_run() -> SimulationRun {
        let mut time = Trace::new("time", Some(Unit::Second));
        time.data = vec![0.0, 1.0e-9];
        let mut out = Trace::new("out", Some(Unit::Volt));
        out.data = vec![0.1, 0.2];

        SimulationRun {
            groups: vec![SimulationGroup {
                sim_type: SimType::Transient,
                plots: vec![Plot::new(vec![time, out])],
            }],
        }
    }

    #[test]
    fn test_write_and_read_run() {
        let run = create_test_run();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_run(&run, path, true).unwrap();
        let loaded = read_run(path).unwrap();

        assert_eq!(loaded, run);
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let json = run_to_string(&create_test_run(), false).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with(r#"[{"sim_type":"tran","plots":[[{"name":"time","unit":"s""#));
    }

    #[test]
    fn test_validate_output_path_empty() {
        let result = validate_output_path(Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/run.json");

        write_run(&create_test_run(), &nested_path, false).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = read_run(temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(OutputError::ReadFailed(_))));
    }
}
