//! Turn scheduling and action resolution.
//!
//! [`Battle`] is the authoritative state machine for one match. Each
//! public entry point resolves synchronously and completely: the player's
//! chosen action, the enemy's automatic reply, terminal detection, and
//! the win/lose consequences all happen inside one call, which returns
//! the ordered [`BattleEvent`] list for presentation to replay at its
//! own pace. There is no suspension point and no cancellation; an action
//! is atomic once chosen.

mod errors;
mod outcome;

pub use errors::SetupError;

use crate::combat;
use crate::config::BattleConfig;
use crate::env::{BattleEnv, ProgressError};
use crate::event::BattleEvent;
use crate::state::{Combatant, MatchResult, MatchState, Phase, Side};

/// Player-chosen action for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    Attack,
    Heal,
    Defend,
}

/// Result of one resolved entry-point call.
#[derive(Debug)]
pub struct Resolution {
    /// Ordered events for presentation.
    pub events: Vec<BattleEvent>,

    /// Phase after resolution.
    pub phase: Phase,

    /// First persistence failure hit while resolving, if any. The match
    /// state is valid and playable regardless.
    pub progress_error: Option<ProgressError>,
}

/// Disposition of a submitted player action.
#[derive(Debug)]
pub enum ActionOutcome {
    /// The action resolved (possibly ending the match).
    Resolved(Resolution),

    /// Submitted outside `PlayerTurn`; ignored without events. Stale
    /// presentation input is expected and benign.
    OutOfPhase,

    /// The match had already ended; nothing happened.
    MatchOver(MatchResult),
}

/// State machine for a single match.
pub struct Battle {
    config: BattleConfig,
    state: MatchState,
}

impl Battle {
    /// Build a match from validated configuration and persisted levels.
    ///
    /// The enemy level is the persisted player level plus a uniform
    /// offset from the configured range, floored to 1, and is persisted
    /// immediately so an abandoned match still leaves a consistent
    /// record. The opening turn goes to the faster combatant, player on
    /// tie; an enemy opening resolves inside this call.
    pub fn setup(
        config: BattleConfig,
        env: &mut BattleEnv<'_>,
    ) -> Result<(Self, Resolution), SetupError> {
        config.validate()?;

        let player_level = env.progress.player_level()?.max(1);
        let offset = env.rng.range_inclusive(
            i64::from(config.enemy_level_offset_min),
            i64::from(config.enemy_level_offset_max),
        );
        let enemy_level = (i64::from(player_level) + offset).max(1) as u32;
        let mut progress_error = env.progress.set_enemy_level(enemy_level).err();

        let player = Combatant::spawn(
            config.player.name.clone(),
            Side::Player,
            player_level,
            &config.player.growth,
        );
        let enemy = Combatant::spawn(
            config.enemy.name.clone(),
            Side::Enemy,
            enemy_level,
            &config.enemy.growth,
        );

        let mut battle = Self {
            config,
            state: MatchState {
                phase: Phase::Setup,
                player,
                enemy,
                nonce: 0,
            },
        };

        let mut events = Vec::new();
        if battle.state.enemy.stats().speed > battle.state.player.stats().speed {
            battle.enter_enemy_turn(&mut events, env, &mut progress_error);
        } else {
            battle.enter_player_turn(&mut events);
        }

        let resolution = Resolution {
            events,
            phase: battle.state.phase,
            progress_error,
        };
        Ok((battle, resolution))
    }

    /// Submit the player's action for the current turn.
    ///
    /// Rejections are no-ops: [`ActionOutcome::OutOfPhase`] for stale
    /// input, [`ActionOutcome::MatchOver`] after a terminal phase.
    pub fn player_action(&mut self, action: PlayerAction, env: &mut BattleEnv<'_>) -> ActionOutcome {
        match self.state.phase {
            Phase::PlayerTurn => {}
            Phase::Won => return ActionOutcome::MatchOver(MatchResult::Won),
            Phase::Lost => return ActionOutcome::MatchOver(MatchResult::Lost),
            Phase::Setup | Phase::EnemyTurn => return ActionOutcome::OutOfPhase,
        }

        let mut events = Vec::new();
        let mut progress_error = None;

        match action {
            PlayerAction::Attack => self.player_attack(&mut events, env, &mut progress_error),
            PlayerAction::Heal => {
                // A heal at full HP is a free re-prompt: the turn is not
                // consumed and the enemy does not act.
                if self.state.player.missing_hp() == 0 {
                    return ActionOutcome::Resolved(Resolution {
                        events,
                        phase: self.state.phase,
                        progress_error,
                    });
                }
                self.player_heal(&mut events, env, &mut progress_error);
            }
            PlayerAction::Defend => {
                self.state.nonce += 1;
                self.state.player.start_defending();
                events.push(BattleEvent::DefendRaised { side: Side::Player });
                self.enter_enemy_turn(&mut events, env, &mut progress_error);
            }
        }

        ActionOutcome::Resolved(Resolution {
            events,
            phase: self.state.phase,
            progress_error,
        })
    }

    /// Current match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Configuration this match was built from.
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    fn player_attack(
        &mut self,
        events: &mut Vec<BattleEvent>,
        env: &mut BattleEnv<'_>,
        progress_error: &mut Option<ProgressError>,
    ) {
        self.state.nonce += 1;
        let chance = combat::hit_chance(
            self.state.player.stats().speed,
            self.state.enemy.stats().speed,
            &self.config.hit,
        );
        if !combat::check_hit(env.rng, chance) {
            events.push(BattleEvent::Missed { side: Side::Player });
            self.enter_enemy_turn(events, env, progress_error);
            return;
        }

        let roll = combat::roll_damage(env.rng, self.state.player.stats().attack, &self.config.damage);
        let (inflicted, defeated) = self
            .state
            .enemy
            .take_damage(roll.amount, self.config.defense_constant);
        events.push(BattleEvent::Hit {
            side: Side::Player,
            amount: inflicted,
            critical: roll.critical,
        });

        if defeated {
            events.push(BattleEvent::Defeated { side: Side::Enemy });
            let outcome_error = outcome::apply(
                &mut self.state,
                &self.config,
                env.progress,
                MatchResult::Won,
                events,
            );
            if progress_error.is_none() {
                *progress_error = outcome_error;
            }
            return;
        }
        self.enter_enemy_turn(events, env, progress_error);
    }

    fn player_heal(
        &mut self,
        events: &mut Vec<BattleEvent>,
        env: &mut BattleEnv<'_>,
        progress_error: &mut Option<ProgressError>,
    ) {
        self.state.nonce += 1;
        let amount = combat::roll_heal(
            env.rng,
            self.state.player.level(),
            self.state.player.missing_hp(),
            &self.config.heal,
        );
        let healed = self.state.player.heal(amount);
        events.push(BattleEvent::Healed {
            side: Side::Player,
            amount: healed,
        });
        self.enter_enemy_turn(events, env, progress_error);
    }

    /// Run the enemy's turn to completion. The enemy always attacks.
    ///
    /// The enemy's own stale stance lapses on entry; the player's stance
    /// stays raised so it mitigates this single attack, and lapses when
    /// control returns to the player.
    fn enter_enemy_turn(
        &mut self,
        events: &mut Vec<BattleEvent>,
        env: &mut BattleEnv<'_>,
        progress_error: &mut Option<ProgressError>,
    ) {
        self.state.enemy.end_defending();
        self.state.phase = Phase::EnemyTurn;
        events.push(BattleEvent::TurnChanged { side: Side::Enemy });

        self.state.nonce += 1;
        let chance = combat::hit_chance(
            self.state.enemy.stats().speed,
            self.state.player.stats().speed,
            &self.config.hit,
        );
        if !combat::check_hit(env.rng, chance) {
            events.push(BattleEvent::Missed { side: Side::Enemy });
            self.enter_player_turn(events);
            return;
        }

        let roll = combat::roll_damage(env.rng, self.state.enemy.stats().attack, &self.config.damage);
        let (inflicted, defeated) = self
            .state
            .player
            .take_damage(roll.amount, self.config.defense_constant);
        events.push(BattleEvent::Hit {
            side: Side::Enemy,
            amount: inflicted,
            critical: roll.critical,
        });

        if defeated {
            events.push(BattleEvent::Defeated { side: Side::Player });
            let outcome_error = outcome::apply(
                &mut self.state,
                &self.config,
                env.progress,
                MatchResult::Lost,
                events,
            );
            if progress_error.is_none() {
                *progress_error = outcome_error;
            }
            return;
        }
        self.enter_player_turn(events);
    }

    /// Hand control to the player; their stance from last turn lapses.
    fn enter_player_turn(&mut self, events: &mut Vec<BattleEvent>) {
        self.state.player.end_defending();
        self.state.phase = Phase::PlayerTurn;
        events.push(BattleEvent::TurnChanged { side: Side::Player });
    }
}
