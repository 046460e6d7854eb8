//! Input size checks for submitted schema and document text.
//!
//! Validation is synchronous and bounded by the size of its input, so each
//! submitted field is capped before it reaches the validator.
//!
//! # Security
//!
//! The caps prevent a single request from forcing unbounded memory use while
//! the schema and document are parsed into JSON values.

use thiserror::Error;

/// Default maximum size of a single submitted field (1MB)
pub const DEFAULT_MAX_FIELD_BYTES: usize = 1024 * 1024;

/// Default maximum size of a whole request body (2MB + form encoding slack)
pub const DEFAULT_MAX_BODY_BYTES: usize = 3 * 1024 * 1024;

/// Errors that can occur while checking submitted input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    /// Input exceeds maximum allowed size
    #[error("{field} exceeds maximum size (max: {max} bytes, got: {actual} bytes)")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Result type for input checks.
pub type InputResult<T> = Result<T, InputError>;

/// Size limits applied to submitted fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    pub max_field_bytes: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_field_bytes: DEFAULT_MAX_FIELD_BYTES,
        }
    }
}

impl InputLimits {
    /// Check a single named field.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_validator::validation::input::InputLimits;
    ///
    /// let limits = InputLimits { max_field_bytes: 4 };
    /// assert!(limits.check_field("schema", "{}").is_ok());
    /// assert!(limits.check_field("schema", "[1,2,3]").is_err());
    /// ```
    pub fn check_field(&self, field: &'static str, value: &str) -> InputResult<()> {
        if value.len() > self.max_field_bytes {
            return Err(InputError::TooLong {
                field,
                max: self.max_field_bytes,
                actual: value.len(),
            });
        }
        Ok(())
    }

    /// Check both fields of a validation request, schema first.
    pub fn check_submission(&self, schema: &str, document: &str) -> InputResult<()> {
        self.check_field("schema", schema)?;
        self.check_field("document", document)
    }
}
