//! Rendering and snapshot error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or persisting a chart
#[derive(Error, Debug)]
pub enum RenderError {
    /// Figure could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Snapshot file could not be written
    #[error("Failed to write snapshot {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
