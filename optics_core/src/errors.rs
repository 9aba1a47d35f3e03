//! # Error Types
//!
//! Structured error types for optics_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Every formula in this crate is a leaf computation: nothing is recovered
//! internally, and every domain violation surfaces to the caller instead of
//! propagating NaN or infinity into downstream lens-grinding decisions.
//!
//! ## Example
//!
//! ```rust
//! use optics_core::errors::{OpticsError, OpticsResult};
//!
//! fn validate_diameter(diameter_mm: f64) -> OpticsResult<()> {
//!     if diameter_mm <= 0.0 {
//!         return Err(OpticsError::InvalidInput {
//!             field: "diameter_mm".to_string(),
//!             value: diameter_mm.to_string(),
//!             reason: "Lens diameter must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for optics_core operations
pub type OpticsResult<T> = Result<T, OpticsError>;

/// Structured error type for optical calculations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum OpticsError {
    /// An input is outside the mathematically valid range of a formula
    /// (zero denominator, negative square-root term, etc.)
    #[error("Domain error for '{field}': {value} - {reason}")]
    Domain {
        field: String,
        value: String,
        reason: String,
    },

    /// An input value is invalid for a composite calculation
    /// (out of physical range, inconsistent with other inputs, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A formula has no defined result for the given inputs
    /// (decision-table fallthrough, indeterminate direction, etc.)
    #[error("Undefined result in {operation}: {reason}")]
    Undefined { operation: String, reason: String },
}

impl OpticsError {
    /// Create a Domain error
    pub fn domain(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        OpticsError::Domain {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        OpticsError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an Undefined error
    pub fn undefined(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        OpticsError::Undefined {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            OpticsError::Domain { .. } => "DOMAIN_ERROR",
            OpticsError::InvalidInput { .. } => "INVALID_INPUT",
            OpticsError::Undefined { .. } => "UNDEFINED_RESULT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = OpticsError::domain("distance_cm", "0", "Vergence is undefined at the lens");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: OpticsError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            OpticsError::domain("index", "1", "division by zero").error_code(),
            "DOMAIN_ERROR"
        );
        assert_eq!(
            OpticsError::undefined("eye_resolver", "no table entry").error_code(),
            "UNDEFINED_RESULT"
        );
    }

    #[test]
    fn test_display_includes_context() {
        let error = OpticsError::invalid_input("diameter_mm", "-60", "must be positive");
        let text = error.to_string();
        assert!(text.contains("diameter_mm"));
        assert!(text.contains("-60"));
    }
}
