//! Error handling for the scene loading boundary
//!
//! Checks themselves never fail; every problem they find is a `Diagnostic`.

use thiserror::Error;

/// Result type alias for clippy I/O operations
pub type Result<T> = std::result::Result<T, ClippyError>;

#[derive(Error, Debug)]
pub enum ClippyError {
    #[error("Scene file not found: {path}")]
    SceneNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scene file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClippyError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ClippyError::SceneNotFound { .. } => "SCENE_NOT_FOUND",
            ClippyError::Parse { .. } => "PARSE_ERROR",
            ClippyError::Io(_) => "IO_ERROR",
            ClippyError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}
