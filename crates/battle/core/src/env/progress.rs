//! Persisted progress oracle.
//!
//! Levels survive across matches through an injected [`ProgressStore`].
//! The engine reads the player level at setup, writes the rolled enemy
//! level immediately (so an abandoned match still leaves a consistent
//! record), and writes level/best-level updates when a match ends.
//! Implementations live in the hosting layer; the engine never touches
//! the filesystem itself.

/// Errors surfaced by a progress store implementation.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("progress serialization failed: {0}")]
    Serialization(String),

    #[error("progress store lock poisoned")]
    LockPoisoned,
}

/// Durable store for cross-match progression.
///
/// # Contract
///
/// - All getters report `1` when no value has ever been written.
/// - A successful setter must be durable before the next read that
///   depends on it.
/// - [`reset_progress`](ProgressStore::reset_progress) clears the player
///   and enemy levels back to 1 but never touches the best level.
///
/// A store failure must never corrupt an in-progress match: the engine
/// reports the error and plays on from memory.
pub trait ProgressStore: Send + Sync {
    /// Current persisted player level (default 1).
    fn player_level(&self) -> Result<u32, ProgressError>;

    /// Persist a new player level.
    fn set_player_level(&self, level: u32) -> Result<(), ProgressError>;

    /// Current persisted enemy level (default 1).
    fn enemy_level(&self) -> Result<u32, ProgressError>;

    /// Persist a new enemy level.
    fn set_enemy_level(&self, level: u32) -> Result<(), ProgressError>;

    /// Best player level ever reached (default 1).
    fn best_level(&self) -> Result<u32, ProgressError>;

    /// Persist a new best level.
    fn set_best_level(&self, level: u32) -> Result<(), ProgressError>;

    /// Reset player and enemy levels to 1. The best level is kept.
    fn reset_progress(&self) -> Result<(), ProgressError>;
}
