//! # Error Types
//!
//! Structured error types for steel_core. Every detected failure is fatal to
//! the single evaluation call that produced it; there is nothing to retry.
//! Errors carry the key that failed (restraint code, field name, etc.) so a
//! caller can report exactly which lookup or formula rejected the input.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::errors::{CalcError, CalcResult};
//!
//! fn check_length(length_mm: f64) -> CalcResult<()> {
//!     if length_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "length_mm",
//!             length_mm.to_string(),
//!             "Member length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for steel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for design calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, unordered, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A per-segment array does not match the number of segments
    #[error("Arity mismatch for '{field}': expected {expected} entries (one per segment), got {actual}")]
    ArityMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// A restraint type or restraint-pair code is not recognised
    #[error("Invalid restraint code: '{code}'")]
    InvalidRestraintCode { code: String },

    /// A load-position tag is not recognised
    #[error("Invalid load position: '{code}'")]
    InvalidLoadPosition { code: String },

    /// A derived denominator vanished or a formula left its real domain
    #[error("Numeric domain failure in {calculation}: {reason}")]
    NumericDomain { calculation: String, reason: String },

    /// Section designation not found in the catalogue
    #[error("Section not found: {designation}")]
    SectionNotFound { designation: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
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

    /// Create an ArityMismatch error
    pub fn arity_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        CalcError::ArityMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Create an InvalidRestraintCode error
    pub fn invalid_restraint_code(code: impl Into<String>) -> Self {
        CalcError::InvalidRestraintCode { code: code.into() }
    }

    /// Create an InvalidLoadPosition error
    pub fn invalid_load_position(code: impl Into<String>) -> Self {
        CalcError::InvalidLoadPosition { code: code.into() }
    }

    /// Create a NumericDomain error
    pub fn numeric_domain(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::NumericDomain {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(designation: impl Into<String>) -> Self {
        CalcError::SectionNotFound {
            designation: designation.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ArityMismatch { .. } => "ARITY_MISMATCH",
            CalcError::InvalidRestraintCode { .. } => "INVALID_RESTRAINT_CODE",
            CalcError::InvalidLoadPosition { .. } => "INVALID_LOAD_POSITION",
            CalcError::NumericDomain { .. } => "NUMERIC_DOMAIN",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
