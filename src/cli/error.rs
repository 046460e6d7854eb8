//! CLI-specific error types

use crate::server::config::ConfigError;
use crate::validation::{InputError, SchemaValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("{0}")]
    InputError(#[from] InputError),

    #[error("{0}")]
    ValidationError(#[from] SchemaValidationError),

    #[error("Document has {0} problem(s)")]
    ProblemsFound(usize),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("IO error: {0}")]
    IoError(String),
}
