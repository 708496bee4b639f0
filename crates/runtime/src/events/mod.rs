//! Topic-based event routing between the session and its consumers.

mod bus;

pub use bus::EventBus;

use serde::{Deserialize, Serialize};

use battle_core::BattleEvent;

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Per-action engine events (hits, heals, turn changes, ...).
    Battle,
    /// Session lifecycle events (match started, progress reset).
    Session,
}

/// Session-level occurrences that are not part of action resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A match was set up (initial or rematch).
    MatchStarted {
        player_level: u32,
        enemy_level: u32,
    },

    /// Persisted player/enemy levels were reset to 1 (best level kept).
    ProgressReset,
}

/// Event wrapper carrying the topic and the typed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Battle(BattleEvent),
    Session(SessionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Battle(_) => Topic::Battle,
            Event::Session(_) => Topic::Session,
        }
    }
}
