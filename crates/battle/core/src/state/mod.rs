//! Match state: phase machine plus the two owned combatants.

mod combatant;

pub use combatant::{Combatant, Side};

/// Where the match currently stands.
///
/// `PlayerTurn` and `EnemyTurn` alternate only while both combatants are
/// alive; `Won` and `Lost` are terminal with no outgoing transitions. A
/// rematch builds a fresh [`MatchState`], it never revives this one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Combatants are being built; not observable through the public API.
    Setup,
    /// Waiting for the player to choose attack, heal, or defend.
    PlayerTurn,
    /// The enemy is acting (resolved automatically, never waits).
    EnemyTurn,
    Won,
    Lost,
}

impl Phase {
    /// True for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// Final result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchResult {
    Won,
    Lost,
}

impl From<MatchResult> for Phase {
    fn from(result: MatchResult) -> Phase {
        match result {
            MatchResult::Won => Phase::Won,
            MatchResult::Lost => Phase::Lost,
        }
    }
}

/// Complete state of one match.
///
/// Owned exclusively by a [`Battle`](crate::engine::Battle); concurrent
/// matches use independent instances with no shared mutable state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub phase: Phase,
    pub player: Combatant,
    pub enemy: Combatant,

    /// Count of resolved actions (both sides), for logs and diagnostics.
    pub nonce: u64,
}

impl MatchState {
    /// Result of the match, if it has ended.
    pub fn result(&self) -> Option<MatchResult> {
        match self.phase {
            Phase::Won => Some(MatchResult::Won),
            Phase::Lost => Some(MatchResult::Lost),
            _ => None,
        }
    }

    /// Combatant fighting for `side`.
    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }
}
