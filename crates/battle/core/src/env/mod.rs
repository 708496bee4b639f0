//! Injected collaborators for the engine.
//!
//! The engine is pure: randomness and persistence come in through the
//! traits here, bundled into a [`BattleEnv`] per call. Hosting layers
//! (tests, the runtime crate) provide the implementations.

pub mod progress;
pub mod rng;

pub use progress::{ProgressError, ProgressStore};
pub use rng::{Pcg32, RngSource};

/// Environment handed to every engine entry point.
///
/// Bundling the oracles keeps the engine's signatures stable as
/// collaborators evolve, and makes it impossible to resolve an action
/// against mismatched sources.
pub struct BattleEnv<'a> {
    /// Seedable randomness; drives every probabilistic step.
    pub rng: &'a mut dyn RngSource,

    /// Cross-match progression store.
    pub progress: &'a dyn ProgressStore,
}

impl<'a> BattleEnv<'a> {
    pub fn new(rng: &'a mut dyn RngSource, progress: &'a dyn ProgressStore) -> Self {
        Self { rng, progress }
    }
}
