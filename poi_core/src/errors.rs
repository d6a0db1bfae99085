//! # Error Types
//!
//! Structured error types for poi_core. Each variant carries enough context
//! to understand and fix the problem programmatically, and every error is
//! JSON-serializable for API consumers.
//!
//! ## Example
//!
//! ```rust
//! use poi_core::errors::{PoiError, PoiResult};
//!
//! fn validate_moment(moment_ftkips: f64) -> PoiResult<()> {
//!     if moment_ftkips < 0.0 {
//!         return Err(PoiError::InvalidInput {
//!             field: "required_moment_ftkips".to_string(),
//!             value: moment_ftkips.to_string(),
//!             reason: "Required moment cannot be negative".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for poi_core operations
pub type PoiResult<T> = Result<T, PoiError>;

/// Structured error type for inventory loading and analysis operations.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic error handling by callers and front ends.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PoiError {
    /// An input value in the requirement spec is invalid
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An inventory record's field cannot be parsed or violates a load-time
    /// invariant (negative numeric, duplicate id)
    #[error("Malformed inventory data at record {row}, field '{field}': {value} - {reason}")]
    DataFormat {
        row: usize,
        field: String,
        value: String,
        reason: String,
    },

    /// The inventory is empty where an average is required
    #[error("Insufficient data: {reason}")]
    InsufficientData { reason: String },

    /// A denominator in the estimate formula is zero
    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },

    /// File I/O error while loading an inventory source
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl PoiError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PoiError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DataFormat error
    pub fn data_format(
        row: usize,
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PoiError::DataFormat {
            row,
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InsufficientData error
    pub fn insufficient_data(reason: impl Into<String>) -> Self {
        PoiError::InsufficientData {
            reason: reason.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        PoiError::DivisionByZero {
            context: context.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PoiError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PoiError::InvalidInput { .. } => "INVALID_INPUT",
            PoiError::DataFormat { .. } => "DATA_FORMAT",
            PoiError::InsufficientData { .. } => "INSUFFICIENT_DATA",
            PoiError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            PoiError::FileError { .. } => "FILE_ERROR",
            PoiError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
