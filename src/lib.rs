//! schema-validator - validate JSON documents against JSON Schemas over HTTP
//!
//! Provides:
//! - Document validation against a JSON Schema (delegated to `jsonschema`)
//! - Plain-text problem reports
//! - An axum server exposing the validation endpoint and a static web UI
//! - Configuration and logging setup shared by the CLI

#[cfg(feature = "cli")]
pub mod cli;
pub mod logging;
pub mod server;
pub mod validation;

pub use server::{AppState, ServerConfig, router, serve};
pub use validation::{
    DocumentValidator, InputError, InputLimits, SchemaValidationError, ValidationReport,
    Violation, render_report,
};
