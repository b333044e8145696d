//! # Error Types
//!
//! Structured error types for girder_core. Every variant carries enough
//! context to tell the caller which input was wrong and why.
//!
//! Note that "no section satisfies the check" is not an error. It is a
//! regular outcome, see [`DesignOutcome`](crate::calculations::DesignOutcome).
//!
//! ## Example
//!
//! ```rust
//! use girder_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for girder_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Section name not present in the catalog
    #[error("Section not found: {name}")]
    SectionNotFound { name: String },

    /// Steel grade name not recognized
    #[error("Steel grade not found: {name}")]
    GradeNotFound { name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Settings or catalog text could not be parsed
    #[error("Parse error in {source_name}: {reason}")]
    ParseError { source_name: String, reason: String },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(name: impl Into<String>) -> Self {
        CalcError::SectionNotFound { name: name.into() }
    }

    /// Create a GradeNotFound error
    pub fn grade_not_found(name: impl Into<String>) -> Self {
        CalcError::GradeNotFound { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ParseError
    pub fn parse_error(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ParseError {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CalcError::GradeNotFound { .. } => "GRADE_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::ParseError { .. } => "PARSE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject NaN and infinities before they reach the formulas.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"))
    }
}

/// Strictly positive and finite.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

/// Zero or positive, and finite.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must not be negative"));
    }
    Ok(())
}
