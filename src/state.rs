use serde::{Deserialize, Serialize};

use crate::action::RoundAction;
use crate::call::{PLAYERS, PlayerId, TOTAL_TRICKS, Tricks, total_tricks, validate_tricks};
use crate::error::{GameError, InvalidAction};

/// First and last 1-based round numbers played with a fixed suit in classic games.
pub const MANDATORY_SUIT_ROUNDS: (usize, usize) = (14, 18);

/// Length of the game. Only classic games reach the mandatory-suit rounds.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Classic,
    Mini,
    Micro,
}

impl GameMode {
    pub fn round_count(self) -> usize {
        match self {
            GameMode::Classic => 18,
            GameMode::Mini => 10,
            GameMode::Micro => 5,
        }
    }

    /// Whether the zero-based `round_index` falls in the mandatory-suit window.
    pub fn is_mandatory_suit_round(self, round_index: usize) -> bool {
        let (first, last) = MANDATORY_SUIT_ROUNDS;
        self == GameMode::Classic && (first..=last).contains(&(round_index + 1))
    }
}

/// Lifecycle of a single round.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundStatus {
    #[default]
    Preparing,
    Playing,
    Finished,
}

/// Everything recorded about one round, plus its stored scores once finished.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoundState {
    pub calls: [Option<Tricks>; PLAYERS],
    pub results: [Option<Tricks>; PLAYERS],
    pub is_caller: [bool; PLAYERS],
    pub is_dash_call: [bool; PLAYERS],
    pub manual_risk: [bool; PLAYERS],
    pub everyone_lost: bool,
    pub status: RoundStatus,
    pub scores: [i32; PLAYERS],
    pub is_winner: [bool; PLAYERS],
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn caller(&self) -> Option<PlayerId> {
        self.is_caller.iter().position(|&c| c)
    }

    pub fn manual_risk_player(&self) -> Option<PlayerId> {
        self.manual_risk.iter().position(|&r| r)
    }

    pub fn calls_complete(&self) -> bool {
        self.calls.iter().all(Option::is_some)
    }

    pub fn results_complete(&self) -> bool {
        self.results.iter().all(Option::is_some)
    }

    /// Total calls minus the 13 available tricks, once every seat has called.
    pub fn round_difference(&self) -> Option<i32> {
        self.calls_complete()
            .then(|| total_tricks(&self.calls) - i32::from(TOTAL_TRICKS))
    }

    pub fn is_finished(&self) -> bool {
        self.status == RoundStatus::Finished
    }

    /// Returns a new round with `action` applied, leaving `self` untouched.
    ///
    /// `mandatory_suit` selects the manual risk policy and lifts the caller
    /// requirement for entering play.
    pub fn apply(&self, action: &RoundAction, mandatory_suit: bool) -> Result<Self, GameError> {
        let mut next = self.clone();
        match *action {
            RoundAction::Call { player, value } => {
                check_player(player)?;
                let value = value.map(validate_tricks).transpose()?;
                if next.is_dash_call[player] && value != Some(0) {
                    return Err(InvalidAction::DashCallMustBeZero.into());
                }
                next.calls[player] = value;
            }
            RoundAction::Caller { player } => {
                check_player(player)?;
                if next.is_dash_call[player] {
                    return Err(InvalidAction::DashCallerConflict.into());
                }
                next.is_caller = [false; PLAYERS];
                next.is_caller[player] = true;
            }
            RoundAction::ClearCaller => next.is_caller = [false; PLAYERS],
            RoundAction::DashCall { player, dash } => {
                check_player(player)?;
                if dash && next.is_caller[player] {
                    return Err(InvalidAction::DashCallerConflict.into());
                }
                if dash {
                    next.calls[player] = Some(0);
                } else if next.is_dash_call[player] {
                    // only the forced zero is cleared, a real bid stays
                    next.calls[player] = None;
                }
                next.is_dash_call[player] = dash;
            }
            RoundAction::ManualRisk { player } => {
                check_player(player)?;
                if !mandatory_suit {
                    return Err(InvalidAction::ManualRiskOutsideMandatoryRound.into());
                }
                next.manual_risk = [false; PLAYERS];
                next.manual_risk[player] = true;
            }
            RoundAction::ClearManualRisk => next.manual_risk = [false; PLAYERS],
            RoundAction::Result { player, value } => {
                check_player(player)?;
                next.results[player] = value.map(validate_tricks).transpose()?;
            }
        }
        next.status = if next.calls_complete() && (mandatory_suit || next.caller().is_some()) {
            RoundStatus::Playing
        } else {
            RoundStatus::Preparing
        };
        Ok(next)
    }
}

fn check_player(player: PlayerId) -> Result<(), GameError> {
    if player >= PLAYERS {
        return Err(GameError::InvalidPlayer(player));
    }
    Ok(())
}

/// Read-only view of a whole game, the input of the round orchestrator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    pub mode: GameMode,
    pub rounds: Vec<RoundState>,
}

impl GameSnapshot {
    /// Fresh snapshot with every round of `mode` still preparing.
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            rounds: vec![RoundState::new(); mode.round_count()],
        }
    }

    pub fn round(&self, round_index: usize) -> Result<&RoundState, GameError> {
        self.rounds
            .get(round_index)
            .ok_or(GameError::InvalidRound(round_index))
    }

    pub fn is_mandatory_suit_round(&self, round_index: usize) -> bool {
        self.mode.is_mandatory_suit_round(round_index)
    }

    pub fn everyone_lost_history(&self) -> Vec<bool> {
        self.rounds.iter().map(|r| r.everyone_lost).collect()
    }

    /// Stored per-round scores; unfinished rounds hold zeros.
    pub fn score_rows(&self) -> Vec<[i32; PLAYERS]> {
        self.rounds.iter().map(|r| r.scores).collect()
    }
}
