//! Validation functionality
//!
//! Provides validation logic for:
//! - Documents against JSON Schemas (via the `jsonschema` crate)
//! - Input size checks (resource limits)
//! - Plain-text report rendering

pub mod input;
pub mod report;
pub mod schema;

pub use input::{InputError, InputLimits};
pub use report::render_report;
pub use schema::{DocumentValidator, SchemaValidationError, ValidationReport, Violation};
