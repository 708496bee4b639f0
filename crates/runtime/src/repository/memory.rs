//! In-memory progress store for tests and ephemeral runs.

use std::sync::RwLock;

use battle_core::{ProgressError, ProgressStore};

use super::ProgressRecord;

/// In-memory implementation of [`ProgressStore`].
pub struct InMemoryProgressStore {
    record: RwLock<ProgressRecord>,
}

impl InMemoryProgressStore {
    /// Create a store with the default record (everything at level 1).
    pub fn new() -> Self {
        Self::with_record(ProgressRecord::default())
    }

    /// Create a store seeded with an explicit record.
    pub fn with_record(record: ProgressRecord) -> Self {
        Self {
            record: RwLock::new(record),
        }
    }

    /// Snapshot the current record.
    pub fn snapshot(&self) -> Result<ProgressRecord, ProgressError> {
        self.record
            .read()
            .map(|record| *record)
            .map_err(|_| ProgressError::LockPoisoned)
    }

    fn update(&self, apply: impl FnOnce(&mut ProgressRecord)) -> Result<(), ProgressError> {
        let mut guard = self.record.write().map_err(|_| ProgressError::LockPoisoned)?;
        apply(&mut guard);
        Ok(())
    }
}

impl Default for InMemoryProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressStore for InMemoryProgressStore {
    fn player_level(&self) -> Result<u32, ProgressError> {
        Ok(self.snapshot()?.player_level)
    }

    fn set_player_level(&self, level: u32) -> Result<(), ProgressError> {
        self.update(|record| record.player_level = level)
    }

    fn enemy_level(&self) -> Result<u32, ProgressError> {
        Ok(self.snapshot()?.enemy_level)
    }

    fn set_enemy_level(&self, level: u32) -> Result<(), ProgressError> {
        self.update(|record| record.enemy_level = level)
    }

    fn best_level(&self) -> Result<u32, ProgressError> {
        Ok(self.snapshot()?.best_level)
    }

    fn set_best_level(&self, level: u32) -> Result<(), ProgressError> {
        self.update(|record| record.best_level = level)
    }

    fn reset_progress(&self) -> Result<(), ProgressError> {
        self.update(|record| {
            record.player_level = 1;
            record.enemy_level = 1;
        })
    }
}
