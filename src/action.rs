use serde::{Deserialize, Serialize};

use crate::call::{PlayerId, Tricks};

/// A single edit to the calls, flags or results of one round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundAction {
    /// Record (or clear, with `None`) a seat's call.
    Call {
        player: PlayerId,
        value: Option<Tricks>,
    },
    /// Make the seat the round's only caller.
    Caller { player: PlayerId },
    ClearCaller,
    /// Toggle the forced zero call on a seat. Turning it on records a call of 0,
    /// turning it off clears that 0.
    DashCall { player: PlayerId, dash: bool },
    /// Designate the at-risk seat in a mandatory-suit round.
    ManualRisk { player: PlayerId },
    ClearManualRisk,
    /// Record (or clear) the tricks a seat actually won.
    Result {
        player: PlayerId,
        value: Option<Tricks>,
    },
}

impl RoundAction {
    /// Seat the action refers to, if any.
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            RoundAction::Call { player, .. }
            | RoundAction::Caller { player }
            | RoundAction::DashCall { player, .. }
            | RoundAction::ManualRisk { player }
            | RoundAction::Result { player, .. } => Some(*player),
            RoundAction::ClearCaller | RoundAction::ClearManualRisk => None,
        }
    }
}
