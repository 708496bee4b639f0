//! Heal rolls.

use crate::config::HealParams;
use crate::env::RngSource;

/// Roll a heal amount for a combatant at `level` missing `missing_hp`.
///
/// # Formula
///
/// ```text
/// low  = floor(level × min_mult)
/// high = ceil(level × max_mult)      (low > high collapses to high)
/// amount ~ uniform integer in [max(0, low), max(0, high)]
/// if minimum_heal_one and amount == 0: amount = 1
/// amount = min(amount, missing_hp)
/// ```
///
/// The result never overshoots the healer's missing HP, so applying it
/// can never push current HP past the maximum.
pub fn roll_heal(rng: &mut dyn RngSource, level: u32, missing_hp: u32, params: &HealParams) -> u32 {
    let mut low = (f64::from(level) * params.min_mult).floor() as i64;
    let mut high = (f64::from(level) * params.max_mult).ceil() as i64;
    if low > high {
        low = high;
    }
    low = low.max(0);
    high = high.max(0);

    let mut amount = rng.range_inclusive(low, high) as u32;
    if params.minimum_heal_one && amount == 0 {
        amount = 1;
    }
    amount.min(missing_hp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Pcg32;

    const PARAMS: HealParams = HealParams {
        min_mult: 1.5,
        max_mult: 2.5,
        minimum_heal_one: false,
    };

    #[test]
    fn roll_stays_in_level_scaled_bounds() {
        let mut rng = Pcg32::seeded(3);
        for _ in 0..200 {
            // floor(4 × 1.5) = 6, ceil(4 × 2.5) = 10
            let amount = roll_heal(&mut rng, 4, 1000, &PARAMS);
            assert!((6..=10).contains(&amount));
        }
    }

    #[test]
    fn clamped_to_missing_hp() {
        let mut rng = Pcg32::seeded(3);
        for _ in 0..50 {
            assert!(roll_heal(&mut rng, 10, 5, &PARAMS) <= 5);
        }
    }

    #[test]
    fn zero_roll_raised_to_one_when_flagged() {
        let params = HealParams {
            min_mult: 0.0,
            max_mult: 0.0,
            minimum_heal_one: true,
        };
        let mut rng = Pcg32::seeded(1);
        assert_eq!(roll_heal(&mut rng, 5, 100, &params), 1);
    }

    #[test]
    fn zero_roll_left_at_zero_without_flag() {
        let params = HealParams {
            min_mult: 0.0,
            max_mult: 0.0,
            minimum_heal_one: false,
        };
        let mut rng = Pcg32::seeded(1);
        assert_eq!(roll_heal(&mut rng, 5, 100, &params), 0);
    }

    #[test]
    fn minimum_one_still_respects_missing_hp() {
        let params = HealParams {
            min_mult: 0.0,
            max_mult: 0.0,
            minimum_heal_one: true,
        };
        let mut rng = Pcg32::seeded(1);
        assert_eq!(roll_heal(&mut rng, 5, 0, &params), 0);
    }
}
