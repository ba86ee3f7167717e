use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::RoundAction;
use crate::call::PLAYERS;
use crate::error::GameError;
use crate::game::{Game, GameBuilder};
use crate::state::GameMode;

/// Recorded edits of one round, in the order they were made.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundLog {
    #[serde(default)]
    pub actions: Vec<RoundAction>,
    #[serde(default)]
    pub everyone_lost: bool,
}

/// A whole game as a sequence of round logs, e.g. loaded from JSON.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameLog {
    #[serde(default)]
    pub mode: GameMode,
    #[serde(default)]
    pub players: Option<[String; PLAYERS]>,
    pub rounds: Vec<RoundLog>,
}

/// Replays `log` into a fresh game, finalizing each logged round.
///
/// Rounds that are still incomplete after their actions stay open, as they
/// would in a live game, so a later logged round fails with
/// [`GameError::OutOfOrder`].
pub fn replay(log: &GameLog) -> Result<Game, GameError> {
    if log.rounds.len() > log.mode.round_count() {
        return Err(GameError::InvalidConfiguration(
            "log has more rounds than the game mode allows",
        ));
    }
    let mut builder = GameBuilder::new(log.mode);
    if let Some(players) = &log.players {
        builder = builder.with_players(players.clone())?;
    }
    let mut game = builder.build();
    for (index, round) in log.rounds.iter().enumerate() {
        play_round(&mut game, index, round)?;
    }
    Ok(game)
}

/// Applies one round log to `game` and finalizes the round.
pub fn play_round(game: &mut Game, round_index: usize, round: &RoundLog) -> Result<bool, GameError> {
    if round.everyone_lost {
        game.declare_everyone_lost(round_index)?;
        return Ok(true);
    }
    for action in &round.actions {
        game.apply(round_index, action.clone())?;
    }
    let finished = game.finalize_round(round_index)?;
    debug!(round = round_index, finished, "Replayed round");
    Ok(finished)
}
