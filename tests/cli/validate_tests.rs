//! Validate command tests

use schema_validator::cli::CliError;
use schema_validator::cli::commands::validate::{ValidateArgs, handle_validate, run_validate};
use schema_validator::validation::SchemaValidationError;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

fn args(schema: &NamedTempFile, document: &NamedTempFile) -> ValidateArgs {
    ValidateArgs {
        schema: schema.path().to_string_lossy().into_owned(),
        document: document.path().to_string_lossy().into_owned(),
    }
}

#[test]
fn test_cli_validate_valid_document() {
    let schema = write_temp(r#"{"type":"number"}"#);
    let document = write_temp("42");

    let (rendered, report) = run_validate(&args(&schema, &document)).unwrap();
    assert!(report.is_valid());
    assert_eq!(rendered, "Schema: {\"type\":\"number\"}\nDocument: 42\n");
    assert!(handle_validate(&args(&schema, &document)).is_ok());
}

#[test]
fn test_cli_validate_reports_problems() {
    let schema = write_temp(r#"{"type":"object","required":["name","id"]}"#);
    let document = write_temp("{}");

    let (rendered, report) = run_validate(&args(&schema, &document)).unwrap();
    assert_eq!(report.len(), 2);
    assert!(rendered.contains("Problem 1: "));
    assert!(rendered.contains("Problem 2: "));

    let result = handle_validate(&args(&schema, &document));
    assert!(matches!(result, Err(CliError::ProblemsFound(2))));
}

#[test]
fn test_cli_validate_invalid_document() {
    let schema = write_temp(r#"{"type":"object"}"#);
    let document = write_temp("{oops");

    let result = run_validate(&args(&schema, &document));
    assert!(matches!(
        result,
        Err(CliError::ValidationError(
            SchemaValidationError::DocumentSyntax(_)
        ))
    ));
}

#[test]
fn test_cli_validate_missing_file() {
    let schema = write_temp("{}");
    let result = run_validate(&ValidateArgs {
        schema: schema.path().to_string_lossy().into_owned(),
        document: "/definitely/not/a/file.json".to_string(),
    });
    assert!(matches!(result, Err(CliError::FileNotFound(_))));
}

#[test]
fn test_cli_validate_rejects_double_stdin() {
    let result = run_validate(&ValidateArgs {
        schema: "-".to_string(),
        document: "-".to_string(),
    });
    assert!(matches!(result, Err(CliError::InvalidArgument(_))));
}
