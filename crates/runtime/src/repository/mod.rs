//! Progress store implementations.
//!
//! `battle-core` defines the [`ProgressStore`](battle_core::ProgressStore)
//! contract; the implementations live here. The file store backs real
//! runs, the in-memory store backs tests and ephemeral sessions.

mod file;
mod memory;

pub use file::FileProgressStore;
pub use memory::InMemoryProgressStore;

use serde::{Deserialize, Serialize};

/// The persisted record: three levels surviving across matches.
///
/// Every field defaults to 1, which is also what the store contract
/// requires getters to report when nothing was ever written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressRecord {
    pub player_level: u32,
    pub enemy_level: u32,
    pub best_level: u32,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            player_level: 1,
            enemy_level: 1,
            best_level: 1,
        }
    }
}
