//! Match configuration and tunable balance parameters.
//!
//! Everything the combat formulas consume is enumerated here and frozen
//! at setup. Validation is fail-fast: a bad table is a [`ConfigError`]
//! before any combatant is spawned, never a silent correction mid-match.
//! The only sanctioned degenerate-input fallback is the integer range
//! collapse inside the roll functions themselves (see `combat`).

use crate::state::Side;

/// Per-side growth table: base stats plus growth factors.
///
/// The logarithmic HP/attack curves and the linear speed/defense ramps
/// are evaluated by [`StatBlock::compute`](crate::stats::StatBlock::compute).
/// Defense defaults to zero so the two-stat variant of the system falls
/// out of configuration alone.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthConfig {
    pub base_hp: f64,
    pub hp_growth: f64,
    pub base_attack: f64,
    pub attack_growth: f64,
    pub base_speed: f64,
    pub speed_growth_per_level: f64,
    pub base_defense: f64,
    pub defense_growth_per_level: f64,
}

/// Identity and growth table for one side of the match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantConfig {
    /// Display name, surfaced through events and the HUD only.
    pub name: String,
    pub growth: GrowthConfig,
}

/// Accuracy formula parameters.
///
/// `chance = clamp(base_chance + (attacker_speed - defender_speed) * speed_factor,
///                 min_chance, max_chance)`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitParams {
    pub base_chance: f64,
    pub speed_factor: f64,
    pub min_chance: f64,
    pub max_chance: f64,
}

/// Damage roll parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageParams {
    /// Lower damage bound as a multiple of the attack stat (floored).
    pub min_mult: f64,
    /// Upper damage bound as a multiple of the attack stat (ceiled).
    pub max_mult: f64,
    /// Probability in `[0, 1]` of a critical hit.
    pub crit_chance: f64,
    /// Critical damage multiplier (result ceiled).
    pub crit_mult: f64,
}

/// Heal roll parameters. Heals scale with the healer's level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealParams {
    pub min_mult: f64,
    pub max_mult: f64,
    /// When set, a heal that rolls 0 is raised to 1. The source lineage
    /// was inconsistent about this, so it is a flag rather than a rule.
    pub minimum_heal_one: bool,
}

/// Complete tunable set for a match, read once at setup.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    pub player: CombatantConfig,
    pub enemy: CombatantConfig,
    pub hit: HitParams,
    pub damage: DamageParams,
    pub heal: HealParams,

    /// `K` in the defend mitigation `round(raw * K / (K + defense))`.
    pub defense_constant: u32,

    /// Inclusive bounds on the enemy level offset rolled at setup,
    /// relative to the persisted player level.
    pub enemy_level_offset_min: i32,
    pub enemy_level_offset_max: i32,

    /// Levels granted to the player on a win.
    pub level_up_amount: u32,
}

/// Validation failures for a [`BattleConfig`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{side} base {stat} must be positive (got {value})")]
    NonPositiveBase {
        side: Side,
        stat: &'static str,
        value: f64,
    },

    #[error("{side} {stat} growth must be non-negative (got {value})")]
    NegativeGrowth {
        side: Side,
        stat: &'static str,
        value: f64,
    },

    #[error("{side} base defense must be non-negative (got {value})")]
    NegativeBaseDefense { side: Side, value: f64 },

    #[error("damage multiplier range inverted: min {min} > max {max}")]
    InvertedDamageRange { min: f64, max: f64 },

    #[error("heal multiplier range inverted: min {min} > max {max}")]
    InvertedHealRange { min: f64, max: f64 },

    #[error("negative roll multiplier: {value}")]
    NegativeMultiplier { value: f64 },

    #[error("hit chance bound outside [0, 1]: {value}")]
    HitBoundOutOfRange { value: f64 },

    #[error("hit chance bounds inverted: min {min} > max {max}")]
    InvertedHitBounds { min: f64, max: f64 },

    #[error("crit chance outside [0, 1]: {value}")]
    CritChanceOutOfRange { value: f64 },

    #[error("crit multiplier must be at least 1 (got {value})")]
    CritMultiplierBelowOne { value: f64 },

    #[error("defense constant must be positive")]
    ZeroDefenseConstant,

    #[error("enemy level offset range inverted: min {min} > max {max}")]
    InvertedOffsetRange { min: i32, max: i32 },

    #[error("level-up amount must be positive")]
    ZeroLevelUpAmount,
}

impl GrowthConfig {
    fn validate(&self, side: Side) -> Result<(), ConfigError> {
        let positive_bases = [
            ("HP", self.base_hp),
            ("attack", self.base_attack),
            ("speed", self.base_speed),
        ];
        for (stat, value) in positive_bases {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveBase { side, stat, value });
            }
        }
        if self.base_defense < 0.0 {
            return Err(ConfigError::NegativeBaseDefense {
                side,
                value: self.base_defense,
            });
        }
        let growths = [
            ("HP", self.hp_growth),
            ("attack", self.attack_growth),
            ("speed", self.speed_growth_per_level),
            ("defense", self.defense_growth_per_level),
        ];
        for (stat, value) in growths {
            if value < 0.0 {
                return Err(ConfigError::NegativeGrowth { side, stat, value });
            }
        }
        Ok(())
    }
}

impl BattleConfig {
    /// Check every tunable, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player.growth.validate(Side::Player)?;
        self.enemy.growth.validate(Side::Enemy)?;

        for value in [self.damage.min_mult, self.damage.max_mult] {
            if value < 0.0 {
                return Err(ConfigError::NegativeMultiplier { value });
            }
        }
        if self.damage.min_mult > self.damage.max_mult {
            return Err(ConfigError::InvertedDamageRange {
                min: self.damage.min_mult,
                max: self.damage.max_mult,
            });
        }
        if !(0.0..=1.0).contains(&self.damage.crit_chance) {
            return Err(ConfigError::CritChanceOutOfRange {
                value: self.damage.crit_chance,
            });
        }
        if self.damage.crit_mult < 1.0 {
            return Err(ConfigError::CritMultiplierBelowOne {
                value: self.damage.crit_mult,
            });
        }

        for value in [self.heal.min_mult, self.heal.max_mult] {
            if value < 0.0 {
                return Err(ConfigError::NegativeMultiplier { value });
            }
        }
        if self.heal.min_mult > self.heal.max_mult {
            return Err(ConfigError::InvertedHealRange {
                min: self.heal.min_mult,
                max: self.heal.max_mult,
            });
        }

        for value in [self.hit.min_chance, self.hit.max_chance] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::HitBoundOutOfRange { value });
            }
        }
        if self.hit.min_chance > self.hit.max_chance {
            return Err(ConfigError::InvertedHitBounds {
                min: self.hit.min_chance,
                max: self.hit.max_chance,
            });
        }

        if self.defense_constant == 0 {
            return Err(ConfigError::ZeroDefenseConstant);
        }
        if self.enemy_level_offset_min > self.enemy_level_offset_max {
            return Err(ConfigError::InvertedOffsetRange {
                min: self.enemy_level_offset_min,
                max: self.enemy_level_offset_max,
            });
        }
        if self.level_up_amount == 0 {
            return Err(ConfigError::ZeroLevelUpAmount);
        }
        Ok(())
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            base_hp: 20.0,
            hp_growth: 2.5,
            base_attack: 5.0,
            attack_growth: 1.6,
            base_speed: 10.0,
            speed_growth_per_level: 0.5,
            base_defense: 0.0,
            defense_growth_per_level: 0.0,
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            player: CombatantConfig {
                name: "Wanderer".to_owned(),
                growth: GrowthConfig {
                    base_defense: 10.0,
                    defense_growth_per_level: 0.75,
                    ..GrowthConfig::default()
                },
            },
            enemy: CombatantConfig {
                name: "Warden".to_owned(),
                growth: GrowthConfig {
                    base_hp: 18.0,
                    hp_growth: 2.2,
                    base_attack: 4.0,
                    attack_growth: 1.5,
                    base_speed: 9.0,
                    speed_growth_per_level: 0.5,
                    base_defense: 8.0,
                    defense_growth_per_level: 0.5,
                },
            },
            hit: HitParams {
                base_chance: 0.85,
                speed_factor: 0.02,
                min_chance: 0.60,
                max_chance: 0.99,
            },
            damage: DamageParams {
                min_mult: 0.8,
                max_mult: 1.2,
                crit_chance: 0.10,
                crit_mult: 1.5,
            },
            heal: HealParams {
                min_mult: 1.5,
                max_mult: 2.5,
                minimum_heal_one: true,
            },
            defense_constant: 100,
            enemy_level_offset_min: -1,
            enemy_level_offset_max: 2,
            level_up_amount: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(BattleConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_base_stat() {
        let mut config = BattleConfig::default();
        config.player.growth.base_hp = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveBase {
                side: Side::Player,
                stat: "HP",
                ..
            })
        ));
    }

    #[test]
    fn rejects_inverted_damage_range_instead_of_swapping() {
        let mut config = BattleConfig::default();
        config.damage.min_mult = 2.0;
        config.damage.max_mult = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedDamageRange { .. })
        ));
    }

    #[test]
    fn rejects_inverted_hit_bounds() {
        let mut config = BattleConfig::default();
        config.hit.min_chance = 0.9;
        config.hit.max_chance = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedHitBounds { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_crit_chance() {
        let mut config = BattleConfig::default();
        config.damage.crit_chance = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CritChanceOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_inverted_offset_range() {
        let mut config = BattleConfig::default();
        config.enemy_level_offset_min = 3;
        config.enemy_level_offset_max = 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedOffsetRange { .. })
        ));
    }

    #[test]
    fn rejects_negative_growth() {
        let mut config = BattleConfig::default();
        config.enemy.growth.attack_growth = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeGrowth {
                side: Side::Enemy,
                stat: "attack",
                ..
            })
        ));
    }
}
