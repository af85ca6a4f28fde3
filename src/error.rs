//! Error types for configuration, scenario loading, and report output
//!
//! The projectors themselves never fail; only the layers that touch files
//! and parse external data return these errors.

use thiserror::Error;

/// Errors raised outside the pure projection core
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scenario row names a mode other than LumpSum or SIP
    #[error("Unknown investment mode: {0}")]
    UnknownMode(String),

    /// A loaded numeric field is not a finite number
    #[error("Invalid value for {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },
}

/// Result alias for fallible calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;
