//! Plain-text rendering of validation reports

use super::schema::ValidationReport;
use std::fmt::Write;

/// Render the response body for a validation request.
///
/// The submitted schema and document are echoed back on labelled lines,
/// followed by one `Problem <n>: <description>` line per violation, numbered
/// from 1 in reported order. A valid document produces no problem lines.
pub fn render_report(schema: &str, document: &str, report: &ValidationReport) -> String {
    let mut out = String::with_capacity(schema.len() + document.len() + 32);
    let _ = writeln!(out, "Schema: {}", schema);
    let _ = writeln!(out, "Document: {}", document);
    for (i, violation) in report.violations.iter().enumerate() {
        let _ = writeln!(out, "Problem {}: {}", i + 1, violation);
    }
    out
}
