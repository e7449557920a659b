//! Error types for the cost engine.
//!
//! The calculations themselves are total: missing business data is reported
//! through warnings, never through errors. This module covers the two places
//! that can fail: loading configuration and validating upstream records
//! before they reach the engine.

use thiserror::Error;

/// The main error type for the cost engine.
///
/// # Example
///
/// ```
/// use cost_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but contained an out-of-range value.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration key.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee '{employee_id}' field '{field}': {message}")]
    InvalidEmployee {
        /// The ID of the invalid employee.
        employee_id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The overhead record contained an invalid value.
    #[error("Invalid overhead field '{field}': {message}")]
    InvalidOverhead {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A financial document's extracted data was invalid.
    #[error("Invalid document '{document_id}': {message}")]
    InvalidDocument {
        /// The ID of the invalid document.
        document_id: String,
        /// A description of what made the document invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
