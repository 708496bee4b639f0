//! Hit chance and accuracy checks.

use crate::config::HitParams;
use crate::env::RngSource;

/// Calculate the chance for an attack to land.
///
/// # Formula
///
/// ```text
/// chance = base_chance + (attacker_speed − defender_speed) × speed_factor
/// clamped to [min_chance, max_chance]
/// ```
pub fn hit_chance(attacker_speed: u32, defender_speed: u32, params: &HitParams) -> f64 {
    let speed_diff = f64::from(attacker_speed) - f64::from(defender_speed);
    (params.base_chance + speed_diff * params.speed_factor)
        .clamp(params.min_chance, params.max_chance)
}

/// Check whether an attack lands.
///
/// A single uniform draw in `[0, 1)` at or below `chance` is a hit.
/// Callers must not roll damage or crit on a miss; the miss short-circuits
/// the whole attack.
pub fn check_hit(rng: &mut dyn RngSource, chance: f64) -> bool {
    rng.unit() <= chance
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: HitParams = HitParams {
        base_chance: 0.85,
        speed_factor: 0.02,
        min_chance: 0.60,
        max_chance: 0.99,
    };

    #[test]
    fn equal_speeds_give_base_chance() {
        assert_eq!(hit_chance(10, 10, &PARAMS), 0.85);
    }

    #[test]
    fn speed_advantage_raises_chance() {
        assert_eq!(hit_chance(15, 10, &PARAMS), 0.95);
    }

    #[test]
    fn chance_is_clamped_to_bounds() {
        assert_eq!(hit_chance(100, 1, &PARAMS), PARAMS.max_chance);
        assert_eq!(hit_chance(1, 100, &PARAMS), PARAMS.min_chance);
    }

    #[test]
    fn check_hit_consumes_exactly_one_draw() {
        struct CountingRng {
            draws: u32,
        }
        impl RngSource for CountingRng {
            fn next_u32(&mut self) -> u32 {
                self.draws += 1;
                0
            }
        }
        let mut rng = CountingRng { draws: 0 };
        check_hit(&mut rng, 0.5);
        assert_eq!(rng.draws, 1);
    }

    #[test]
    fn zero_chance_only_hits_on_zero_draw() {
        struct FixedRng(u32);
        impl RngSource for FixedRng {
            fn next_u32(&mut self) -> u32 {
                self.0
            }
        }
        // draw == chance hits (the check is ≤, not <)
        assert!(check_hit(&mut FixedRng(0), 0.0));
        assert!(!check_hit(&mut FixedRng(1), 0.0));
    }
}
