//! CLI tests module

#[cfg(feature = "cli")]
pub mod serve_tests;
#[cfg(feature = "cli")]
pub mod validate_tests;
