//! JSON Schema validation of submitted documents
//!
//! Wraps the `jsonschema` crate behind a small contract: given the literal
//! text of a schema and of a document, produce either an ordered list of
//! violations or an error explaining which of the two inputs could not be
//! used. Draft detection and keyword semantics are left to the library.

use jsonschema::error::ValidationErrorKind;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Path label used when a violation applies to the document root
pub const ROOT_PATH: &str = "(root)";

/// Keyword label for a boolean `false` (sub)schema
pub const FALSE_SCHEMA_KEYWORD: &str = "false";

/// Errors that prevent a document from being evaluated at all.
///
/// These are distinct from violations: a violation means the document was
/// evaluated and found lacking, while these mean evaluation never happened.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaValidationError {
    /// Schema text is not valid JSON
    #[error("schema could not be parsed: {0}")]
    SchemaSyntax(String),

    /// Schema is valid JSON but not a usable JSON Schema
    #[error("schema could not be compiled: {0}")]
    InvalidSchema(String),

    /// Document text is not valid JSON
    #[error("document could not be parsed: {0}")]
    DocumentSyntax(String),
}

/// A single way in which a document fails its schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer into the document, or `(root)`
    pub instance_path: String,
    /// Schema keyword that failed (e.g. `type`, `required`)
    pub keyword: String,
    /// Expected vs. actual condition as reported by the validator
    pub message: String,
}

impl Violation {
    /// Human-readable description combining path, keyword and message
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.instance_path, self.keyword, self.message)
    }
}

/// Outcome of evaluating a document against a schema.
///
/// Violations are kept in the order the validator reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use = "validation reports should be checked for violations"]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// True when the document satisfied every constraint
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations found
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Problem descriptions in reported order
    pub fn problems(&self) -> Vec<String> {
        self.violations.iter().map(Violation::description).collect()
    }
}

/// Document validator
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentValidator;

impl DocumentValidator {
    /// Create a new document validator
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_validator::validation::DocumentValidator;
    ///
    /// let report = DocumentValidator::new()
    ///     .validate(r#"{"type":"number"}"#, "42")
    ///     .unwrap();
    /// assert!(report.is_valid());
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Validate `document` against `schema`, both given as literal JSON text.
    ///
    /// The schema is parsed and compiled before the document is parsed, so a
    /// broken schema is reported even when the document is broken too.
    ///
    /// # Returns
    ///
    /// A `ValidationReport` listing every violation, or a
    /// `SchemaValidationError` if either input could not be evaluated.
    pub fn validate(
        &self,
        schema: &str,
        document: &str,
    ) -> Result<ValidationReport, SchemaValidationError> {
        let schema: Value = serde_json::from_str(schema)
            .map_err(|e| SchemaValidationError::SchemaSyntax(e.to_string()))?;

        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| SchemaValidationError::InvalidSchema(e.to_string()))?;

        let instance: Value = serde_json::from_str(document)
            .map_err(|e| SchemaValidationError::DocumentSyntax(e.to_string()))?;

        let violations: Vec<Violation> = validator
            .iter_errors(&instance)
            .map(|error| {
                let instance_path = error.instance_path().to_string();
                // A `false` subschema's location ends in the property name, not a keyword
                let keyword = match error.kind() {
                    ValidationErrorKind::FalseSchema { .. } => FALSE_SCHEMA_KEYWORD.to_string(),
                    _ => keyword_from_schema_path(&error.schema_path().to_string()),
                };
                Violation {
                    instance_path: if instance_path.is_empty() {
                        ROOT_PATH.to_string()
                    } else {
                        instance_path
                    },
                    keyword,
                    message: error.to_string(),
                }
            })
            .collect();

        debug!(violations = violations.len(), "Document evaluated");

        Ok(ValidationReport { violations })
    }
}

/// Last segment of a schema location, i.e. the keyword that failed.
fn keyword_from_schema_path(schema_path: &str) -> String {
    match schema_path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.replace("~1", "/").replace("~0", "~"),
        _ => "schema".to_string(),
    }
}
