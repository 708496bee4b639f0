//! Terminal-match consequences: leveling and persisted progress.

use crate::config::BattleConfig;
use crate::env::{ProgressError, ProgressStore};
use crate::event::BattleEvent;
use crate::state::{MatchResult, MatchState, Side};

/// Apply win/lose consequences and mark the match terminal.
///
/// On a win the player levels up by the configured amount and the new
/// level is persisted; on either result the reached level is offered as
/// a best-level candidate (keep max). A loss never resets levels; that
/// is the separate, externally triggered reset operation.
///
/// Every store write is attempted even after an earlier one fails; the
/// first failure is returned so the caller can surface it. The in-memory
/// state is final either way.
pub(crate) fn apply(
    state: &mut MatchState,
    config: &BattleConfig,
    progress: &dyn ProgressStore,
    result: MatchResult,
    events: &mut Vec<BattleEvent>,
) -> Option<ProgressError> {
    state.phase = result.into();
    let mut first_error = None;
    let mut record = |outcome: Result<(), ProgressError>| {
        if let Err(e) = outcome
            && first_error.is_none()
        {
            first_error = Some(e);
        }
    };

    if result == MatchResult::Won {
        let new_level = state
            .player
            .level_up(config.level_up_amount, &config.player.growth);
        events.push(BattleEvent::LeveledUp {
            side: Side::Player,
            level: new_level,
        });
        record(progress.set_player_level(new_level));
    }

    // Best level keeps the maximum ever reached, win or lose.
    let reached = state.player.level();
    match progress.best_level() {
        Ok(best) if reached > best => record(progress.set_best_level(reached)),
        Ok(_) => {}
        Err(e) => record(Err(e)),
    }

    events.push(BattleEvent::MatchEnded { result });
    first_error
}
