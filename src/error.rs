//! Error types for the level table generator

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the level table generator
#[derive(Error, Debug)]
pub enum LevelGenError {
    #[error("Config unavailable: {resource}: {source}")]
    ConfigUnavailable {
        resource: String,
        #[source]
        source: io::Error,
    },

    #[error("Config malformed: {resource}: {source}")]
    ConfigMalformed {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Component {component}: field {field} is malformed: {reason}")]
    ConfigFieldMalformed {
        component: String,
        field: &'static str,
        reason: String,
    },

    #[error("Output directory unavailable: {}: {source}", .path.display())]
    OutputDirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Write failed: {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LevelGenError {
    /// Whether this error halts the whole run rather than a single component
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LevelGenError::ConfigUnavailable { .. }
                | LevelGenError::ConfigMalformed { .. }
                | LevelGenError::OutputDirectoryUnavailable { .. }
        )
    }
}

/// Result type alias for the level table generator
pub type Result<T> = std::result::Result<T, LevelGenError>;
