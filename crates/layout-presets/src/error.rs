//! Preset loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Preset catalog error.
#[derive(Debug, Error)]
pub enum PresetError {
    /// Preset file could not be read.
    #[error("Failed to read preset file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Preset file is not valid JSON for its catalog.
    #[error("Failed to parse {catalog} presets")]
    Parse {
        catalog: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for preset operations.
pub type Result<T> = std::result::Result<T, PresetError>;
