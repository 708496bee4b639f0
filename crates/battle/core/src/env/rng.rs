//! Injected randomness for action resolution.
//!
//! Every probabilistic step in the engine (hit checks, damage variance,
//! critical rolls, heal variance, the enemy level offset) draws from a
//! single [`RngSource`] supplied by the caller. Seeding that source makes
//! whole matches reproducible, which the tests rely on.
//!
//! The draw order per action is part of the engine's contract: a missed
//! attack consumes exactly one draw, a landed attack consumes three
//! (hit, damage, crit). Implementations must hand out values strictly in
//! call order.

/// Mutable stream of random values.
///
/// Only [`next_u32`](RngSource::next_u32) must be provided; the derived
/// helpers define how raw bits become the uniform draws the combat
/// formulas are specified over.
pub trait RngSource: Send {
    /// Produce the next raw 32-bit value in the stream.
    fn next_u32(&mut self) -> u32;

    /// Uniform draw in `[0, 1)`.
    ///
    /// Used for hit and crit checks against a probability threshold.
    fn unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Uniform integer draw in `[low, high]` inclusive.
    ///
    /// Degenerate ranges (`low >= high`) collapse to `low` without
    /// consuming a draw.
    fn range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        let span = (high - low + 1) as u64;
        low + (u64::from(self.next_u32()) % span) as i64
    }
}

/// PCG-XSH-RR generator (32-bit output, 64-bit state).
///
/// Small, fast, and statistically solid for game mechanics. Two streams
/// seeded identically produce identical draw sequences.
#[derive(Clone, Copy, Debug)]
pub struct Pcg32 {
    state: u64,
}

impl Pcg32 {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        // Standard PCG seeding: one step over the raw seed mixes the
        // low bits before the first output is taken.
        let mut rng = Self {
            state: seed.wrapping_add(Self::INCREMENT),
        };
        rng.step();
        rng
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngSource for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        let state = self.state;
        self.step();
        Self::output(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Pcg32::seeded(42);
        let mut b = Pcg32::seeded(42);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Pcg32::seeded(1);
        let mut b = Pcg32::seeded(2);
        let same = (0..16).filter(|_| a.next_u32() == b.next_u32()).count();
        assert!(same < 16);
    }

    #[test]
    fn unit_stays_in_half_open_interval() {
        let mut rng = Pcg32::seeded(7);
        for _ in 0..1000 {
            let draw = rng.unit();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn range_inclusive_covers_bounds() {
        let mut rng = Pcg32::seeded(9);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..500 {
            let v = rng.range_inclusive(3, 6);
            assert!((3..=6).contains(&v));
            seen_low |= v == 3;
            seen_high |= v == 6;
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn degenerate_range_collapses_without_drawing() {
        struct Exploding;
        impl RngSource for Exploding {
            fn next_u32(&mut self) -> u32 {
                panic!("degenerate range must not consume a draw");
            }
        }
        let mut rng = Exploding;
        assert_eq!(rng.range_inclusive(5, 5), 5);
        assert_eq!(rng.range_inclusive(8, 2), 8);
    }
}
