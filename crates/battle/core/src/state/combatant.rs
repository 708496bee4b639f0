//! Combatant entity: identity, level, derived stats, current HP, stance.

use crate::combat;
use crate::config::GrowthConfig;
use crate::stats::StatBlock;

/// Which side of the match an entity fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// One fighter, owned by the match for its duration.
///
/// # Invariants
///
/// - `0 ≤ hp ≤ stats.max_hp` at all times
/// - level only ever increases, and stats are recomputed on every change
/// - `defending` is raised by the Defend action and cleared when this
///   combatant's own next turn begins, never inside `take_damage`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    side: Side,
    level: u32,
    stats: StatBlock,
    hp: u32,
    defending: bool,
}

impl Combatant {
    /// Spawn a fresh combatant at `level` (clamped ≥ 1) with full HP.
    ///
    /// This is the only full heal in a combatant's lifecycle; level-ups
    /// heal by the max-HP delta instead.
    pub fn spawn(name: impl Into<String>, side: Side, level: u32, growth: &GrowthConfig) -> Self {
        let level = level.max(1);
        let stats = StatBlock::compute(level, growth);
        Self {
            name: name.into(),
            side,
            level,
            stats,
            hp: stats.max_hp,
            defending: false,
        }
    }

    /// Raise the level by `levels` and heal by exactly the max-HP gain.
    ///
    /// A zero `levels` is a no-op. Damage already taken stays taken: a
    /// combatant at 30/89 that gains 6 max HP comes out at 36/95.
    pub fn level_up(&mut self, levels: u32, growth: &GrowthConfig) -> u32 {
        if levels == 0 {
            return self.level;
        }
        let old_max = self.stats.max_hp;
        self.level += levels;
        self.stats = StatBlock::compute(self.level, growth);
        let gained = self.stats.max_hp.saturating_sub(old_max);
        self.hp = (self.hp + gained).min(self.stats.max_hp);
        self.level
    }

    /// Apply incoming damage, mitigating first when a defend stance is up.
    ///
    /// Returns the post-mitigation damage and whether this combatant was
    /// defeated. The stance is deliberately left raised here; it lapses
    /// at the start of this combatant's own next turn.
    pub fn take_damage(&mut self, amount: u32, defense_constant: u32) -> (u32, bool) {
        let inflicted = if self.defending {
            combat::mitigate(amount, self.stats.defense, defense_constant)
        } else {
            amount
        };
        self.hp = self.hp.saturating_sub(inflicted);
        (inflicted, self.hp == 0)
    }

    /// Restore HP, clamped to the maximum. Returns the HP actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.stats.max_hp - self.hp);
        self.hp += healed;
        healed
    }

    /// Raise the defend stance.
    pub fn start_defending(&mut self) {
        self.defending = true;
    }

    /// Drop the defend stance. Idempotent.
    pub fn end_defending(&mut self) {
        self.defending = false;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn missing_hp(&self) -> u32 {
        self.stats.max_hp - self.hp
    }

    pub fn is_defending(&self) -> bool {
        self.defending
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}
