//! Deterministic turn-based combat resolution.
//!
//! `battle-core` owns the rules of a 1v1 match: level-derived stats,
//! the turn state machine, hit/damage/heal resolution, defend
//! mitigation, and the win/lose/level-up contract. It is a pure
//! library: randomness and persistence are injected through the
//! traits in [`env`], and every resolved action returns an ordered
//! event list instead of driving any presentation. Hosting crates
//! depend on the types re-exported here.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod event;
pub mod state;
pub mod stats;

pub use config::{
    BattleConfig, CombatantConfig, ConfigError, DamageParams, GrowthConfig, HealParams, HitParams,
};
pub use engine::{ActionOutcome, Battle, PlayerAction, Resolution, SetupError};
pub use env::{BattleEnv, Pcg32, ProgressError, ProgressStore, RngSource};
pub use event::BattleEvent;
pub use state::{Combatant, MatchResult, MatchState, Phase, Side};
pub use stats::StatBlock;
