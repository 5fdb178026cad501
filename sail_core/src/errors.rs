//! # Error Types
//!
//! Structured error types for sail_core. Every failure a customer can cause
//! is a validation-level value, never a panic, so the engine can be called
//! speculatively on each keystroke. Errors serialize to JSON so the UI layer
//! can render them field by field.
//!
//! Typo suggestions are not errors; see
//! [`crate::measurements::validation::FieldAssessment`].
//!
//! ## Example
//!
//! ```rust
//! use sail_core::errors::{SailError, SailResult};
//!
//! fn check_edge(length_mm: f64) -> SailResult<()> {
//!     if length_mm <= 0.0 {
//!         return Err(SailError::invalid_input(
//!             "AB",
//!             length_mm.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_edge(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sail_core operations
pub type SailResult<T> = Result<T, SailError>;

/// Structured error type for measurement, geometry and pricing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SailError {
    /// An input value is malformed (negative, NaN, wrong key for the shape)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A measurement lies outside the absolute bounds and no typo correction applies
    #[error("'{field}' is out of range: {value} - {reason}")]
    OutOfRange {
        field: String,
        value: String,
        reason: String,
    },

    /// A triangulation wedge violates the triangle inequality
    #[error("Triangle {wedge} cannot be built: {reason}")]
    GeometryViolation {
        wedge: String,
        reason: String,
        shortfall_mm: f64,
    },

    /// Measurement key is not an edge or diagonal of the current shape
    #[error("Unknown measurement '{key}' for a {corners}-corner sail")]
    UnknownMeasurementKey { key: String, corners: u8 },

    /// Only 3 to 6 corner sails are manufactured
    #[error("Unsupported corner count: {corners} (expected 3 to 6)")]
    UnsupportedCornerCount { corners: u8 },

    /// Unrecognized fabric, edge type, currency or other option code
    #[error("Unknown {kind}: '{value}'")]
    UnknownOption { kind: String, value: String },

    /// File I/O error (CLI configuration files)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Quote schema version mismatch
    #[error("Version mismatch: quote version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl SailError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        SailError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        SailError::OutOfRange {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a GeometryViolation error
    pub fn geometry_violation(wedge: impl Into<String>, reason: impl Into<String>, shortfall_mm: f64) -> Self {
        SailError::GeometryViolation {
            wedge: wedge.into(),
            reason: reason.into(),
            shortfall_mm,
        }
    }

    /// Create an UnknownOption error
    pub fn unknown_option(kind: impl Into<String>, value: impl Into<String>) -> Self {
        SailError::UnknownOption {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        SailError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error should stop an order from being submitted.
    ///
    /// Everything except file/serialization plumbing is a customer-facing
    /// blocker.
    pub fn blocks_order(&self) -> bool {
        !matches!(
            self,
            SailError::FileError { .. } | SailError::SerializationError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SailError::InvalidInput { .. } => "INVALID_INPUT",
            SailError::OutOfRange { .. } => "OUT_OF_RANGE",
            SailError::GeometryViolation { .. } => "GEOMETRY_VIOLATION",
            SailError::UnknownMeasurementKey { .. } => "UNKNOWN_MEASUREMENT_KEY",
            SailError::UnsupportedCornerCount { .. } => "UNSUPPORTED_CORNER_COUNT",
            SailError::UnknownOption { .. } => "UNKNOWN_OPTION",
            SailError::FileError { .. } => "FILE_ERROR",
            SailError::SerializationError { .. } => "SERIALIZATION_ERROR",
            SailError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for SailError {
    fn from(e: serde_json::Error) -> Self {
        SailError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SailError::out_of_range("AB", "50", "did you enter cm instead of mm?");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"OutOfRange\""));
        let roundtrip: SailError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SailError::UnsupportedCornerCount { corners: 7 }.error_code(),
            "UNSUPPORTED_CORNER_COUNT"
        );
        assert_eq!(
            SailError::geometry_violation("ABC", "AB + BC <= AC", 12.0).error_code(),
            "GEOMETRY_VIOLATION"
        );
    }

    #[test]
    fn test_display_messages() {
        let err = SailError::UnknownMeasurementKey {
            key: "AE".to_string(),
            corners: 4,
        };
        assert_eq!(err.to_string(), "Unknown measurement 'AE' for a 4-corner sail");
    }

    #[test]
    fn test_blocks_order() {
        assert!(SailError::out_of_range("AB", "1", "too small").blocks_order());
        assert!(!SailError::SerializationError { reason: "eof".into() }.blocks_order());
    }
}
