//! Level-derived combat statistics.
//!
//! Stats are never stored per level; they are recomputed from the growth
//! table whenever a combatant's level changes. Current HP is the only
//! stored resource (see [`Combatant`](crate::state::Combatant)).

pub mod scaling;

use crate::config::GrowthConfig;

/// Derived stats for one combatant at one level.
///
/// Pure function of `(level, growth table)`; recomputed on every level
/// change, never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    /// Maximum HP, ≥ 1.
    pub max_hp: u32,
    /// Attack power (damage scaling), ≥ 1.
    pub attack: u32,
    /// Speed (turn order and accuracy), ≥ 1.
    pub speed: u32,
    /// Defense (defend-stance mitigation only), ≥ 0.
    pub defense: u32,
}

impl StatBlock {
    /// Evaluate the growth table at `level` (clamped ≥ 1).
    pub fn compute(level: u32, growth: &GrowthConfig) -> Self {
        let level = level.max(1);
        Self {
            max_hp: scaling::max_hp(level, growth.base_hp, growth.hp_growth),
            attack: scaling::attack(level, growth.base_attack, growth.attack_growth),
            speed: scaling::speed(level, growth.base_speed, growth.speed_growth_per_level),
            defense: scaling::defense(level, growth.base_defense, growth.defense_growth_per_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_zero_is_clamped_to_one() {
        let growth = GrowthConfig::default();
        assert_eq!(
            StatBlock::compute(0, &growth),
            StatBlock::compute(1, &growth)
        );
    }

    #[test]
    fn reference_player_block_at_level_five() {
        // The level-5 player of the win scenario: 20 HP base, 2.5 growth.
        let growth = GrowthConfig::default();
        let stats = StatBlock::compute(5, &growth);
        assert_eq!(stats.max_hp, 89);
        assert_eq!(stats.speed, 12);
    }
}
