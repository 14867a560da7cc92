//! Error types for quelea-align organized by processing stage.

use thiserror::Error;

/// Pipeline error variants organized by processing stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Timestamp normalization stage error
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// Timestamp parsing errors.
#[derive(Debug, Error)]
pub enum TimestampError {
    /// Wrong number of colon-separated fields
    #[error("expected HH:MM:SS.mmm, got {input:?}")]
    FieldCount { input: String },

    /// Seconds field carries no fractional part
    #[error("missing fractional seconds in {input:?}")]
    MissingFraction { input: String },

    /// Non-numeric or overlong component
    #[error("invalid component {component:?} in {input:?}")]
    InvalidComponent { input: String, component: String },

    /// Component exceeds its maximum value
    #[error("component {value} exceeds maximum {max} in {input:?}")]
    OutOfRange { input: String, value: u32, max: u32 },
}

/// Result type alias for quelea-align operations.
pub type Result<T> = std::result::Result<T, Error>;
