//! Model error types.

use thiserror::Error;

/// Errors raised while parsing or checking model values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Layout version string is not `major.minor[.patch[.build]]`.
    #[error("Invalid layout version: {0}")]
    InvalidVersion(String),

    /// Coordinate pair is not `x,y`.
    #[error("Invalid coordinate pair: {0}")]
    InvalidPair(String),

    /// Size has a negative or non-finite dimension.
    #[error("Invalid size {width}x{height}: dimensions must be finite and non-negative")]
    InvalidSize { width: f64, height: f64 },

    /// A real-valued field is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Unknown grid direction name or index.
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
