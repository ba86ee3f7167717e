use tracing::{debug, info, warn};

use crate::action::RoundAction;
use crate::call::{PLAYERS, PlayerId, TOTAL_TRICKS, total_tricks};
use crate::error::{GameError, InvalidAction};
use crate::round::compute_round_scores;
use crate::state::{GameMode, GameSnapshot, RoundState, RoundStatus};
use crate::totals::{cumulative_scores, standings};

/// Configuration required to start a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub players: [String; PLAYERS],
}

impl GameConfig {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            players: std::array::from_fn(|p| format!("Player {}", p + 1)),
        }
    }
}

/// Builder for [`Game`], mostly useful to name the seats.
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new(mode: GameMode) -> Self {
        Self {
            config: GameConfig::new(mode),
        }
    }

    pub fn with_players(mut self, players: [String; PLAYERS]) -> Result<Self, GameError> {
        if players.iter().any(|name| name.trim().is_empty()) {
            return Err(GameError::InvalidConfiguration("player names must not be empty"));
        }
        self.config.players = players;
        Ok(self)
    }

    pub fn build(self) -> Game {
        Game::new(self.config)
    }
}

/// In-memory Estimation game: records calls and results, finalizes rounds
/// through the scoring engine and keeps the running totals.
///
/// Edits go through [`RoundState::apply`], so a rejected edit leaves the
/// game exactly as it was.
#[derive(Clone, Debug)]
pub struct Game {
    players: [String; PLAYERS],
    snapshot: GameSnapshot,
}

impl Game {
    pub fn builder(mode: GameMode) -> GameBuilder {
        GameBuilder::new(mode)
    }

    pub fn new(config: GameConfig) -> Self {
        info!(mode = ?config.mode, rounds = config.mode.round_count(), "Starting game");
        Self {
            players: config.players,
            snapshot: GameSnapshot::new(config.mode),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.snapshot.mode
    }

    pub fn players(&self) -> &[String; PLAYERS] {
        &self.players
    }

    pub fn player_name(&self, player: PlayerId) -> Result<&str, GameError> {
        self.players
            .get(player)
            .map(String::as_str)
            .ok_or(GameError::InvalidPlayer(player))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshot.clone()
    }

    pub fn round(&self, round_index: usize) -> Result<&RoundState, GameError> {
        self.snapshot.round(round_index)
    }

    /// First round that is not finished yet.
    pub fn current_round(&self) -> Option<usize> {
        self.snapshot.rounds.iter().position(|r| !r.is_finished())
    }

    pub fn is_finished(&self) -> bool {
        self.current_round().is_none()
    }

    pub fn apply(&mut self, round_index: usize, action: RoundAction) -> Result<(), GameError> {
        let round = self.open_round(round_index)?;
        let mandatory = self.snapshot.is_mandatory_suit_round(round_index);
        let next = round.apply(&action, mandatory)?;
        debug!(round = round_index, player = ?action.player(), ?action, "Applied round edit");
        if next.status != round.status {
            info!(round = round_index, status = ?next.status, "Round status changed");
        }
        self.snapshot.rounds[round_index] = next;
        Ok(())
    }

    /// Scores the round and marks it finished.
    ///
    /// Only the current round can be finalized. Returns `Ok(false)` without
    /// touching the game when calls or results are still missing.
    pub fn finalize_round(&mut self, round_index: usize) -> Result<bool, GameError> {
        let round = self.closing_round(round_index)?;
        let scored = match compute_round_scores(&self.snapshot, round_index) {
            Ok(scored) => scored,
            Err(err @ GameError::IncompleteRound { .. }) => {
                warn!(round = round_index, %err, "Finalize requested before round was complete");
                return Ok(false);
            }
            Err(err) => return Err(err),
        };
        if round.status == RoundStatus::Preparing {
            return Err(InvalidAction::CallerRequired.into());
        }
        let total = total_tricks(&round.results);
        if total != i32::from(TOTAL_TRICKS) {
            return Err(InvalidAction::ResultsTotal { total }.into());
        }

        let mut next = round.clone();
        next.scores = scored.scores;
        next.is_winner = scored.is_winner;
        next.status = RoundStatus::Finished;
        self.snapshot.rounds[round_index] = next;
        info!(round = round_index, scores = ?scored.scores, "Round finalized");
        Ok(true)
    }

    /// Declares that nobody made the round: zero scores, and the next round doubles.
    pub fn declare_everyone_lost(&mut self, round_index: usize) -> Result<(), GameError> {
        let round = self.closing_round(round_index)?;
        let mut next = round.clone();
        next.everyone_lost = true;
        next.scores = [0; PLAYERS];
        next.is_winner = [false; PLAYERS];
        next.status = RoundStatus::Finished;
        self.snapshot.rounds[round_index] = next;
        info!(round = round_index, "Round declared everyone lost");
        Ok(())
    }

    /// Clears `round_index` and every later round.
    pub fn undo_round(&mut self, round_index: usize) -> Result<(), GameError> {
        self.snapshot.round(round_index)?;
        for round in &mut self.snapshot.rounds[round_index..] {
            *round = RoundState::new();
        }
        info!(round = round_index, "Rounds reset");
        Ok(())
    }

    /// Running totals over every round.
    pub fn totals(&self) -> [i32; PLAYERS] {
        self.totals_before(self.snapshot.rounds.len())
    }

    /// Running totals before `round_index`.
    pub fn totals_before(&self, round_index: usize) -> [i32; PLAYERS] {
        cumulative_scores(&self.snapshot.score_rows(), round_index)
    }

    pub fn standings(&self) -> [PlayerId; PLAYERS] {
        standings(&self.totals())
    }

    fn open_round(&self, round_index: usize) -> Result<&RoundState, GameError> {
        let round = self.snapshot.round(round_index)?;
        if round.is_finished() {
            debug!(round = round_index, "Rejected edit on finished round");
            return Err(GameError::RoundFinished(round_index));
        }
        Ok(round)
    }

    /// Open round that is also the current one. Later rounds read the
    /// everyone-lost history of earlier ones, so rounds close in order.
    fn closing_round(&self, round_index: usize) -> Result<&RoundState, GameError> {
        let round = self.open_round(round_index)?;
        match self.current_round() {
            Some(open) if open != round_index => {
                debug!(round = round_index, open, "Rejected out-of-order close");
                Err(GameError::OutOfOrder {
                    round: round_index,
                    open,
                })
            }
            _ => Ok(round),
        }
    }
}
