//! Property-based tests for the combat formulas.
//!
//! These verify the invariants the engine leans on: stat monotonicity,
//! clamp floors, HP bounds, and mitigation behavior.

use proptest::prelude::*;

use battle_core::combat::{mitigate, roll_heal};
use battle_core::config::{GrowthConfig, HealParams};
use battle_core::state::{Combatant, Side};
use battle_core::stats::StatBlock;
use battle_core::{Pcg32, RngSource};

fn arb_growth() -> impl Strategy<Value = GrowthConfig> {
    (
        0.1f64..100.0,
        0.0f64..10.0,
        0.1f64..100.0,
        0.0f64..10.0,
        0.1f64..100.0,
        0.0f64..5.0,
        0.0f64..100.0,
        0.0f64..5.0,
    )
        .prop_map(
            |(base_hp, hp_growth, base_attack, attack_growth, base_speed, speed_g, base_def, def_g)| {
                GrowthConfig {
                    base_hp,
                    hp_growth,
                    base_attack,
                    attack_growth,
                    base_speed,
                    speed_growth_per_level: speed_g,
                    base_defense: base_def,
                    defense_growth_per_level: def_g,
                }
            },
        )
}

proptest! {
    /// Raising the level never lowers any stat while growth factors are
    /// non-negative.
    #[test]
    fn prop_stats_monotone_in_level(growth in arb_growth(), level in 1u32..200) {
        let lower = StatBlock::compute(level, &growth);
        let higher = StatBlock::compute(level + 1, &growth);
        prop_assert!(higher.max_hp >= lower.max_hp);
        prop_assert!(higher.attack >= lower.attack);
        prop_assert!(higher.speed >= lower.speed);
        prop_assert!(higher.defense >= lower.defense);
    }

    /// Stat floors hold for every level and non-negative growth table.
    #[test]
    fn prop_stat_clamps(growth in arb_growth(), level in 0u32..500) {
        let stats = StatBlock::compute(level, &growth);
        prop_assert!(stats.max_hp >= 1);
        prop_assert!(stats.attack >= 1);
        prop_assert!(stats.speed >= 1);
    }

    /// `0 ≤ hp ≤ max_hp` survives any interleaving of damage and heals.
    #[test]
    fn prop_hp_bounds_under_damage_and_heal(
        level in 1u32..100,
        ops in prop::collection::vec((any::<bool>(), 0u32..5000), 0..64),
        defend_mask in any::<u64>(),
    ) {
        let growth = GrowthConfig::default();
        let mut unit = Combatant::spawn("Subject", Side::Player, level, &growth);
        for (i, (is_damage, amount)) in ops.into_iter().enumerate() {
            if defend_mask & (1 << (i % 64)) != 0 {
                unit.start_defending();
            } else {
                unit.end_defending();
            }
            if is_damage {
                unit.take_damage(amount, 100);
            } else {
                unit.heal(amount);
            }
            prop_assert!(unit.hp() <= unit.stats().max_hp);
        }
    }

    /// A level-up heals by exactly the max-HP delta.
    #[test]
    fn prop_level_up_heals_the_delta(
        level in 1u32..100,
        damage in 0u32..10_000,
        levels in 1u32..5,
    ) {
        let growth = GrowthConfig::default();
        let mut unit = Combatant::spawn("Subject", Side::Player, level, &growth);
        unit.take_damage(damage, 100);
        if unit.is_defeated() {
            return Ok(());
        }
        let hp_before = unit.hp();
        let max_before = unit.stats().max_hp;

        unit.level_up(levels, &growth);

        let delta = unit.stats().max_hp - max_before;
        prop_assert_eq!(unit.hp(), (hp_before + delta).min(unit.stats().max_hp));
    }

    /// More defense never increases mitigated damage, and a defended hit
    /// always lands for at least 1.
    #[test]
    fn prop_mitigation_monotone_and_floored(
        raw in 1u32..10_000,
        defense_low in 0u32..1000,
        extra in 0u32..1000,
        k in 1u32..1000,
    ) {
        let low = mitigate(raw, defense_low, k);
        let high = mitigate(raw, defense_low + extra, k);
        prop_assert!(high <= low);
        prop_assert!(high >= 1);
        prop_assert!(low <= raw.max(1));
    }

    /// Heals never overshoot missing HP.
    #[test]
    fn prop_heal_respects_missing_hp(
        seed in any::<u64>(),
        level in 1u32..100,
        missing in 0u32..500,
    ) {
        let params = HealParams { min_mult: 1.5, max_mult: 2.5, minimum_heal_one: true };
        let mut rng = Pcg32::seeded(seed);
        let amount = roll_heal(&mut rng, level, missing, &params);
        prop_assert!(amount <= missing);
    }

    /// The trait-level range helper honors inclusive bounds.
    #[test]
    fn prop_range_inclusive_in_bounds(seed in any::<u64>(), low in -500i64..500, span in 0i64..500) {
        let mut rng = Pcg32::seeded(seed);
        let value = rng.range_inclusive(low, low + span);
        prop_assert!((low..=low + span).contains(&value));
    }
}
