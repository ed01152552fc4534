//! Persistence error types.
//!
//! All persistence operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;
use thiserror::Error;

/// Layout load/save error.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The input has no decodable envelope (empty, truncated, or not JSON).
    #[error("Malformed layout header: {reason}")]
    MalformedEnvelope {
        reason: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The envelope decodes but declares another file version.
    ///
    /// Recoverable: load again with `force_load` after confirmation.
    #[error("Layout file version {found} does not match the expected version {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    /// Neither the container nor the bare object list decodes.
    #[error(
        "Unsupported layout format (as container: {envelope}; as object list: {bare_array})"
    )]
    UnsupportedFormat {
        #[source]
        envelope: serde_json::Error,
        bare_array: serde_json::Error,
    },

    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to a stream failed.
    #[error("Failed to {operation} layout stream")]
    Stream {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// An object holds a value the file format cannot represent.
    #[error("Object {index} ('{identifier}') cannot be saved")]
    InvalidObject {
        index: usize,
        identifier: String,
        #[source]
        source: layout_model::ModelError,
    },

    /// Serialization error.
    #[error("Failed to serialize layout data")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A blocking load/save task panicked or was cancelled.
    #[error("Background layout task failed")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl LayoutError {
    /// Whether the caller may retry with a forced load.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::VersionMismatch { .. })
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedEnvelope { .. } | Self::UnsupportedFormat { .. } => {
                "The file could not be opened. It is not a layout file or it is damaged."
                    .to_string()
            }
            Self::VersionMismatch { found, expected } => {
                format!(
                    "This layout was saved with file version {found}, but version {expected} \
                    is expected. Loading it anyway may lose or misread some objects."
                )
            }
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::Stream { operation, .. } => {
                format!("Could not {operation} the layout data.")
            }
            Self::InvalidObject {
                identifier, source, ..
            } => {
                format!("The object '{identifier}' cannot be saved: {source}.")
            }
            Self::Serialization { .. } => {
                "An error occurred while saving the layout data.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::Task { .. } => "The layout operation was interrupted.".to_string(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::MalformedEnvelope { .. } | Self::UnsupportedFormat { .. } => {
                Some("Make sure you selected a layout (.ad) file.".into())
            }
            Self::VersionMismatch { .. } => {
                Some("Confirm to load the layout anyway; saving it will upgrade the file.".into())
            }
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
            Self::InvalidObject { .. } => {
                Some("Fix the object's position or influence values and save again.".into())
            }
            Self::Stream { .. } | Self::Serialization { .. } | Self::Task { .. } => None,
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_version_mismatch_is_recoverable() {
        let mismatch = LayoutError::VersionMismatch {
            found: 2,
            expected: 3,
        };
        assert!(mismatch.is_recoverable());
        assert!(mismatch.user_message().contains("version 2"));

        let malformed = LayoutError::MalformedEnvelope {
            reason: "empty input".into(),
            source: None,
        };
        assert!(!malformed.is_recoverable());
        assert!(malformed.user_message().contains("could not be opened"));
    }
}
