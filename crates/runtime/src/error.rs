//! Runtime error type.

use std::path::PathBuf;

use battle_core::{ProgressError, SetupError};

/// Result type used throughout the runtime crate.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors surfaced by the hosting layer.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("match setup failed: {0}")]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error("failed to read session config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse session config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
