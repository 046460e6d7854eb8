//! Validate command implementation

use crate::cli::error::CliError;
use crate::validation::{DocumentValidator, InputLimits, ValidationReport, render_report};
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Clone)]
pub struct ValidateArgs {
    /// Schema file path or '-' for stdin
    pub schema: String,
    /// Document file path or '-' for stdin
    pub document: String,
}

/// Load input content from file or stdin
pub fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        if !path.exists() {
            return Err(CliError::FileNotFound(path));
        }
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Validate the inputs and return the rendered report alongside the result
pub fn run_validate(args: &ValidateArgs) -> Result<(String, ValidationReport), CliError> {
    if args.schema == "-" && args.document == "-" {
        return Err(CliError::InvalidArgument(
            "Only one of --schema and --document can read from stdin".to_string(),
        ));
    }

    let schema = load_input(&args.schema)?;
    let document = load_input(&args.document)?;
    let (schema, document) = (schema.trim_end(), document.trim_end());

    InputLimits::default().check_submission(schema, document)?;
    let report = DocumentValidator::new().validate(schema, document)?;

    Ok((render_report(schema, document, &report), report))
}

/// Handle the validate command
pub fn handle_validate(args: &ValidateArgs) -> Result<(), CliError> {
    let (rendered, report) = run_validate(args)?;
    print!("{}", rendered);

    if !report.is_valid() {
        return Err(CliError::ProblemsFound(report.len()));
    }

    println!("Validation successful");
    Ok(())
}
