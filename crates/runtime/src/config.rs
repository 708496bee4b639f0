//! Session configuration loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use battle_core::BattleConfig;

use crate::error::{Result, RuntimeError};

/// Everything a hosting process needs to start a session.
///
/// The battle tunables carry the shipped balance by default; an absent
/// config file means defaults, a present one must spell out the battle
/// table in full. A fixed seed makes whole sessions reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub battle: BattleConfig,
    pub seed: Option<u64>,
}

/// Load a session config, falling back to defaults when `path` does not
/// exist. A file that exists but fails to read or parse is an error;
/// silently ignoring a broken config would mask the user's intent.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<SessionConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no session config; using defaults");
        return Ok(SessionConfig::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| RuntimeError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&raw).map_err(|source| RuntimeError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "loaded session config");
    Ok(config)
}
