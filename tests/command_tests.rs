use chi_to_json::commands::{execute_convert, validate_args, validate_document_file, ConvertArgs};
use chi_to_json::output::read_run;
use chi_to_json::parser::SimType;
use chi_to_json::utils::config::DEFAULT_SCHEMA;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/amplifier.chi")
}

#[test]
fn test_validate_args_valid() {
    let args = ConvertArgs {
        input: fixture(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_output_is_directory() {
    let dir = tempdir().unwrap();
    let args = ConvertArgs {
        input: fixture(),
        output: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_schema_ignored_without_validation() {
    let args = ConvertArgs {
        input: fixture(),
        schema: Some(PathBuf::from("/definitely/not/here.json")),
        validate: false,
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_missing_schema() {
    let args = ConvertArgs {
        input: fixture(),
        schema: Some(PathBuf::from("/definitely/not/here.json")),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_cli_no_validate_with_schema_from_env() {
    let dir = tempdir().unwrap();
    let schema = dir.path().join("schema.json");
    std::fs::write(&schema, DEFAULT_SCHEMA).unwrap();
    let output = dir.path().join("amplifier.json");

    let status = Command::new(env!("CARGO_BIN_EXE_chi-to-json"))
        .env("CHI_TO_JSON_SCHEMA", &schema)
        .arg("convert")
        .arg(fixture())
        .arg("--no-validate")
        .arg("--compact")
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    let written = read_run(&output).unwrap();
    assert_eq!(written.groups.len(), 3);
}

#[test]
fn test_convert_writes_json() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("amplifier.json");
    let args = ConvertArgs {
        input: fixture(),
        output: Some(output.clone()),
        ..Default::default()
    };

    let outcome = execute_convert(args).unwrap();
    assert!(outcome.warnings.is_empty());

    let written = read_run(&output).unwrap();
    assert_eq!(written, outcome.run);
    assert_eq!(written.groups[0].sim_type, SimType::DcSweep);
}

#[test]
fn test_convert_parse_error_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.chi");
    std::fs::write(&input, "TRANSIENT ANALYSIS\nTIME V(OUT)\nX\n0.0\nY\n").unwrap();
    let output = dir.path().join("broken.json");

    let args = ConvertArgs {
        input,
        output: Some(output.clone()),
        ..Default::default()
    };

    let err = execute_convert(args).unwrap_err();
    assert!(format!("{:#}", err).contains("line 4"));
    assert!(!output.exists());
}

#[test]
fn test_validate_document_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("amplifier.json");
    execute_convert(ConvertArgs {
        input: fixture(),
        output: Some(output.clone()),
        pretty: false,
        ..Default::default()
    })
    .unwrap();

    let warnings = validate_document_file(&output, None).unwrap();
    assert!(warnings.is_empty());
}

#[test]
fn test_validate_document_with_schema_issue() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("odd.json");
    // Empty trace name deserializes fine but violates minLength
    std::fs::write(&file, r#"[{"sim_type":"tran","plots":[[{"name":"","data":[1.0]}]]}]"#).unwrap();

    let warnings = validate_document_file(&file, None).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].instance_path, "/0/plots/0/0/name");
}

#[test]
fn test_validate_document_not_a_run() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("other.json");
    std::fs::write(&file, r#"{"hello": "world"}"#).unwrap();

    assert!(validate_document_file(&file, None).is_err());
}
