//! Match session orchestration.
//!
//! [`MatchSession`] owns one engine instance plus its injected
//! collaborators and forwards every resolved event to the bus.
//! Everything is synchronous; consumers replay events at their own
//! pace. Concurrent matches are simply independent sessions.

use std::sync::Arc;

use tokio::sync::broadcast;

use battle_core::{
    ActionOutcome, Battle, BattleConfig, BattleEnv, Pcg32, PlayerAction, ProgressError,
    ProgressStore, Resolution,
};

use crate::error::Result;
use crate::events::{Event, EventBus, SessionEvent, Topic};

/// One interactive match run against a persistent progress store.
pub struct MatchSession {
    config: BattleConfig,
    battle: Battle,
    rng: Pcg32,
    progress: Arc<dyn ProgressStore>,
    bus: EventBus,
}

impl MatchSession {
    /// Set up a session and its first match.
    ///
    /// The returned [`Resolution`] carries the setup events (opening
    /// turn, possibly a whole enemy opener). The bus has no subscribers
    /// yet at this point, so the caller seeds its view from the return
    /// value and subscribes before the first submit.
    pub fn new(
        config: BattleConfig,
        progress: Arc<dyn ProgressStore>,
        seed: Option<u64>,
    ) -> Result<(Self, Resolution)> {
        let seed = seed.unwrap_or_else(rand::random);
        tracing::info!(seed, "starting match session");

        let mut rng = Pcg32::seeded(seed);
        let (battle, resolution) = {
            let mut env = BattleEnv::new(&mut rng, progress.as_ref());
            Battle::setup(config.clone(), &mut env)?
        };

        let session = Self {
            config,
            battle,
            rng,
            progress,
            bus: EventBus::new(),
        };
        session.announce_match();
        session.publish_resolution(&resolution);
        Ok((session, resolution))
    }

    /// Submit a player action for the current turn.
    ///
    /// Resolved events are published to [`Topic::Battle`] in order.
    /// Persistence failures ride inside the resolution; they are logged
    /// here and the match plays on from memory.
    pub fn submit(&mut self, action: PlayerAction) -> ActionOutcome {
        let progress = Arc::clone(&self.progress);
        let mut env = BattleEnv::new(&mut self.rng, progress.as_ref());
        let outcome = self.battle.player_action(action, &mut env);

        match &outcome {
            ActionOutcome::Resolved(resolution) => {
                tracing::debug!(
                    %action,
                    phase = %resolution.phase,
                    nonce = self.battle.state().nonce,
                    "action resolved"
                );
                self.publish_resolution(resolution);
            }
            ActionOutcome::OutOfPhase => {
                tracing::debug!(%action, "ignored out-of-phase action");
            }
            ActionOutcome::MatchOver(result) => {
                tracing::debug!(%action, %result, "action after match end");
            }
        }
        outcome
    }

    /// Tear down the finished match and set up a fresh one.
    ///
    /// Usable from any phase; the old combatants are discarded either
    /// way, matching the "new match requires a fresh setup" contract.
    pub fn rematch(&mut self) -> Result<Resolution> {
        let progress = Arc::clone(&self.progress);
        let (battle, resolution) = {
            let mut env = BattleEnv::new(&mut self.rng, progress.as_ref());
            Battle::setup(self.config.clone(), &mut env)?
        };
        self.battle = battle;

        tracing::info!(
            player_level = self.battle.state().player.level(),
            enemy_level = self.battle.state().enemy.level(),
            "rematch"
        );
        self.announce_match();
        self.publish_resolution(&resolution);
        Ok(resolution)
    }

    /// Abandon the run: reset persisted player/enemy levels to 1.
    ///
    /// The best level is untouched. Distinct from a loss, which never
    /// resets anything; this only happens on explicit player intent.
    pub fn abandon_run(&self) -> Result<()> {
        self.progress.reset_progress()?;
        self.bus.publish(Event::Session(SessionEvent::ProgressReset));
        tracing::info!("progress reset; best level retained");
        Ok(())
    }

    /// Current match state.
    pub fn state(&self) -> &battle_core::MatchState {
        self.battle.state()
    }

    /// Best persisted level, for the HUD.
    pub fn best_level(&self) -> std::result::Result<u32, ProgressError> {
        self.progress.best_level()
    }

    /// Subscribe to a topic on the session bus.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    fn announce_match(&self) {
        self.bus.publish(Event::Session(SessionEvent::MatchStarted {
            player_level: self.battle.state().player.level(),
            enemy_level: self.battle.state().enemy.level(),
        }));
    }

    fn publish_resolution(&self, resolution: &Resolution) {
        for event in &resolution.events {
            self.bus.publish(Event::Battle(event.clone()));
        }
        if let Some(error) = &resolution.progress_error {
            tracing::warn!(%error, "progress store failure; match continues in memory");
        }
    }
}
