//! Damage rolls, critical hits, and defend mitigation.

use crate::config::DamageParams;
use crate::env::RngSource;

/// Result of one damage roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRoll {
    /// Final damage, crit multiplier already applied.
    pub amount: u32,
    pub critical: bool,
}

/// Roll damage for a landed attack.
///
/// # Formula
///
/// ```text
/// low  = floor(attack × min_mult)
/// high = ceil(attack × max_mult)     (low > high collapses to high)
/// amount ~ uniform integer in [low, high]
/// critical ~ (draw < crit_chance)    (independent draw)
/// if critical: amount = ceil(amount × crit_mult)
/// ```
///
/// The damage draw happens before the crit draw; that order is part of
/// the reproducibility contract. Damage is not forced ≥ 1 here; the
/// defend mitigation step is the only place that clamps upward.
pub fn roll_damage(rng: &mut dyn RngSource, attack: u32, params: &DamageParams) -> DamageRoll {
    let mut low = (f64::from(attack) * params.min_mult).floor() as i64;
    let high = (f64::from(attack) * params.max_mult).ceil() as i64;
    if low > high {
        low = high;
    }

    let mut amount = rng.range_inclusive(low, high).max(0) as u32;
    let critical = rng.unit() < params.crit_chance;
    if critical {
        amount = (f64::from(amount) * params.crit_mult).ceil() as u32;
    }

    DamageRoll { amount, critical }
}

/// Reduce incoming damage through a raised defend stance.
///
/// # Formula
///
/// ```text
/// mitigated = max(1, round(raw × K / (K + defense)))
/// ```
///
/// where `K` is the configured defense constant. Higher defense never
/// increases the result, and a defended hit always lands for at least 1.
pub fn mitigate(raw: u32, defense: u32, defense_constant: u32) -> u32 {
    let k = f64::from(defense_constant);
    let scaled = f64::from(raw) * k / (k + f64::from(defense));
    (scaled.round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedRng(Vec<u32>);
    impl RngSource for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.0.remove(0)
        }
    }

    const PARAMS: DamageParams = DamageParams {
        min_mult: 0.8,
        max_mult: 1.2,
        crit_chance: 0.0,
        crit_mult: 1.5,
    };

    #[test]
    fn roll_stays_in_floored_and_ceiled_bounds() {
        let mut rng = crate::env::Pcg32::seeded(11);
        for _ in 0..200 {
            let roll = roll_damage(&mut rng, 10, &PARAMS);
            // floor(10 × 0.8) = 8, ceil(10 × 1.2) = 12
            assert!((8..=12).contains(&roll.amount));
            assert!(!roll.critical);
        }
    }

    #[test]
    fn degenerate_range_collapses_to_high() {
        let params = DamageParams {
            min_mult: 1.0,
            max_mult: 1.0,
            ..PARAMS
        };
        // Equal multipliers floor/ceil to the same point; only the crit
        // draw is consumed.
        let mut rng = ScriptedRng(vec![0]);
        let roll = roll_damage(&mut rng, 7, &params);
        assert_eq!(roll.amount, 7);
    }

    #[test]
    fn crit_applies_ceiled_multiplier() {
        let params = DamageParams {
            min_mult: 1.0,
            max_mult: 1.0,
            crit_chance: 1.0,
            crit_mult: 1.5,
        };
        let mut rng = ScriptedRng(vec![0]);
        let roll = roll_damage(&mut rng, 7, &params);
        assert!(roll.critical);
        // ceil(7 × 1.5) = 11
        assert_eq!(roll.amount, 11);
    }

    #[test]
    fn mitigation_matches_reference_values() {
        // round(20 × 100 / 150) = round(13.33) = 13
        assert_eq!(mitigate(20, 50, 100), 13);
        // zero defense passes damage through
        assert_eq!(mitigate(20, 0, 100), 20);
    }

    #[test]
    fn mitigation_never_drops_below_one() {
        assert_eq!(mitigate(1, 1000, 100), 1);
        assert_eq!(mitigate(2, 10_000, 100), 1);
    }

    #[test]
    fn mitigation_is_monotone_in_defense() {
        let raw = 40;
        let mut previous = u32::MAX;
        for defense in 0..200 {
            let mitigated = mitigate(raw, defense, 100);
            assert!(mitigated <= previous);
            previous = mitigated;
        }
    }
}
