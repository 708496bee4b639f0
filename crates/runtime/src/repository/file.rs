//! File-backed progress store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use battle_core::{ProgressError, ProgressStore};

use super::ProgressRecord;

/// JSON-file implementation of [`ProgressStore`].
///
/// The whole record is tiny, so every setter rewrites the file through a
/// temp-file + atomic rename; the in-memory cache is only updated after
/// the write lands, which keeps the durability contract (a successful
/// setter is on disk before the next dependent read).
pub struct FileProgressStore {
    path: PathBuf,
    cache: RwLock<ProgressRecord>,
}

impl FileProgressStore {
    /// Open (or create) the store at `path`.
    ///
    /// A missing file yields the default record; a present but
    /// unparsable file is an error rather than silent data loss.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ProgressError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let record = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)
                .map_err(|e| ProgressError::Serialization(e.to_string()))?
        } else {
            ProgressRecord::default()
        };

        tracing::debug!(path = %path.display(), ?record, "opened progress store");
        Ok(Self {
            path,
            cache: RwLock::new(record),
        })
    }

    /// Platform default location for the progress file.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "skirmish")
            .map(|dirs| dirs.data_dir().join("progress.json"))
    }

    fn persist(&self, record: &ProgressRecord) -> Result<(), ProgressError> {
        let bytes = serde_json::to_vec_pretty(record)
            .map_err(|e| ProgressError::Serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), ?record, "persisted progress");
        Ok(())
    }

    fn read(&self) -> Result<ProgressRecord, ProgressError> {
        self.cache
            .read()
            .map(|record| *record)
            .map_err(|_| ProgressError::LockPoisoned)
    }

    fn update(&self, apply: impl FnOnce(&mut ProgressRecord)) -> Result<(), ProgressError> {
        let mut guard = self.cache.write().map_err(|_| ProgressError::LockPoisoned)?;
        let mut next = *guard;
        apply(&mut next);
        // Durable first; the cache never gets ahead of the file.
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }
}

impl ProgressStore for FileProgressStore {
    fn player_level(&self) -> Result<u32, ProgressError> {
        Ok(self.read()?.player_level)
    }

    fn set_player_level(&self, level: u32) -> Result<(), ProgressError> {
        self.update(|record| record.player_level = level)
    }

    fn enemy_level(&self) -> Result<u32, ProgressError> {
        Ok(self.read()?.enemy_level)
    }

    fn set_enemy_level(&self, level: u32) -> Result<(), ProgressError> {
        self.update(|record| record.enemy_level = level)
    }

    fn best_level(&self) -> Result<u32, ProgressError> {
        Ok(self.read()?.best_level)
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
