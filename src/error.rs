use thiserror::Error;

use crate::call::{PlayerId, Tricks};

/// Errors that can occur when scoring rounds or editing the game state.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("round index {0} is out of range")]
    InvalidRound(usize),
    #[error(
        "round {round} is incomplete: {missing_calls} call(s) and {missing_results} result(s) unset"
    )]
    IncompleteRound {
        round: usize,
        missing_calls: usize,
        missing_results: usize,
    },
    #[error("round {0} is already finished")]
    RoundFinished(usize),
    #[error("round {round} cannot be closed while round {open} is still open")]
    OutOfOrder { round: usize, open: usize },
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of rejected round edits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("trick count {0} is out of range (0-13)")]
    TricksOutOfRange(Tricks),
    #[error("a dash call cannot be the caller")]
    DashCallerConflict,
    #[error("a dash call must bid zero")]
    DashCallMustBeZero,
    #[error("manual risk is only available in mandatory-suit rounds")]
    ManualRiskOutsideMandatoryRound,
    #[error("results must add up to 13, got {total}")]
    ResultsTotal { total: i32 },
    #[error("round needs a caller before it can be finalized")]
    CallerRequired,
}
