//! Discrete events emitted by action resolution.
//!
//! Every resolved action returns an ordered list of these; presentation
//! replays them with its own pacing (message delays, animation, sound).
//! The engine never waits on a consumer.

use crate::state::{MatchResult, Side};

/// One observable occurrence during action resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// Control passed to `side`. Emitted at the opening turn and on
    /// every handoff.
    TurnChanged { side: Side },

    /// `side`'s attack missed. Nothing else happens for that attack.
    Missed { side: Side },

    /// `side`'s attack landed. `amount` is the post-mitigation damage
    /// the defender was struck for (not clamped by remaining HP).
    Hit {
        side: Side,
        amount: u32,
        critical: bool,
    },

    /// `side` healed itself for `amount` HP actually restored.
    Healed { side: Side, amount: u32 },

    /// `side` raised a defend stance for the opponent's next attack.
    DefendRaised { side: Side },

    /// `side`'s HP reached zero.
    Defeated { side: Side },

    /// `side` advanced to `level` (win consequence).
    LeveledUp { side: Side, level: u32 },

    /// Terminal marker; always the last event of a finished match.
    MatchEnded { result: MatchResult },
}
