//! Errors surfaced while constructing a match.

use crate::config::ConfigError;
use crate::env::ProgressError;

/// Failures during [`Battle::setup`](crate::engine::Battle::setup).
///
/// Configuration problems and unreadable progress both abort setup; no
/// partially-built match ever escapes. Persistence *write* failures
/// after this point never become a `SetupError`; they ride along in
/// [`Resolution::progress_error`](crate::engine::Resolution::progress_error)
/// so the match can go on from memory.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read persisted progress: {0}")]
    Progress(#[from] ProgressError),
}
