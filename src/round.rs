//! Round orchestration: derives every situational flag of a round from the
//! game snapshot and feeds them to [`player_points`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::call::{PLAYERS, PlayerId, TOTAL_TRICKS, Tricks, seat_after, total_tricks};
use crate::error::GameError;
use crate::score::{ScoreContext, player_points, risk_multiplier};
use crate::state::{GameSnapshot, RoundState};

/// Seats checked for automatic risk, furthest from the caller first.
const RISK_OFFSETS: [usize; 3] = [3, 2, 1];
/// Callers backed by at least this many "with" seats double the round.
const WITH_DOUBLING_THRESHOLD: usize = 2;

/// Final scores of a round, already multiplied.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundScores {
    pub scores: [i32; PLAYERS],
    pub is_winner: [bool; PLAYERS],
}

/// Everything derived about a round before any player is scored.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundFlags {
    pub caller: Option<PlayerId>,
    pub with: [bool; PLAYERS],
    pub risk_player: Option<PlayerId>,
    /// Risk tier, zero when the calls are within one of 13.
    pub risk_multiplier: i32,
    pub positive_dash: bool,
    pub multiplier: i32,
    pub only_winner: Option<PlayerId>,
    pub only_loser: Option<PlayerId>,
}

impl RoundFlags {
    pub fn with_count(&self) -> usize {
        self.with.iter().filter(|&&w| w).count()
    }

    /// Scoring context for one seat.
    pub fn context(&self, player: PlayerId, calls: &[Tricks; PLAYERS]) -> ScoreContext {
        ScoreContext {
            dash: calls[player] == 0,
            positive_dash: self.positive_dash,
            caller: self.caller == Some(player),
            with: self.with[player],
            risk: self.risk_player == Some(player),
            only_winner: self.only_winner == Some(player),
            only_loser: self.only_loser == Some(player),
            risk_multiplier: self.risk_multiplier,
        }
    }
}

/// Number of consecutive everyone-lost rounds immediately before `round_index`.
pub fn everyone_lost_streak(history: &[bool], round_index: usize) -> u32 {
    let mut streak = 0;
    let mut index = round_index.min(history.len());
    while index > 0 && history[index - 1] {
        streak += 1;
        index -= 1;
    }
    streak
}

/// Score multiplier for `round_index`: doubled once when the caller has two or
/// more "with" seats, and once more per preceding everyone-lost round.
pub fn doubling_multiplier(history: &[bool], round_index: usize, caller_doubled: bool) -> i32 {
    let mut multiplier = 1;
    if caller_doubled {
        multiplier *= 2;
    }
    for _ in 0..everyone_lost_streak(history, round_index) {
        multiplier *= 2;
    }
    multiplier
}

/// Seats that called the same as the caller without being the caller or a dash call.
pub fn with_flags(
    calls: &[Tricks; PLAYERS],
    caller: Option<PlayerId>,
    is_dash_call: &[bool; PLAYERS],
) -> [bool; PLAYERS] {
    let Some(caller) = caller else {
        return [false; PLAYERS];
    };
    std::array::from_fn(|p| p != caller && !is_dash_call[p] && calls[p] == calls[caller])
}

/// Automatic risk seat: the first non-dash seat walking back from the caller.
pub fn risk_player(caller: Option<PlayerId>, is_dash_call: &[bool; PLAYERS]) -> Option<PlayerId> {
    let caller = caller?;
    RISK_OFFSETS
        .iter()
        .map(|&offset| seat_after(caller, offset))
        .find(|&seat| !is_dash_call[seat])
}

/// The single seat that made (or missed) its call, if exactly one did.
pub fn lone_outcomes(is_winner: &[bool; PLAYERS]) -> (Option<PlayerId>, Option<PlayerId>) {
    let sole = |want: bool| {
        let mut seats = (0..PLAYERS).filter(|&p| is_winner[p] == want);
        match (seats.next(), seats.next()) {
            (Some(seat), None) => Some(seat),
            _ => None,
        }
    };
    (sole(true), sole(false))
}

/// Derives the round flags without scoring anyone.
pub fn round_flags(snapshot: &GameSnapshot, round_index: usize) -> Result<RoundFlags, GameError> {
    let round = snapshot.round(round_index)?;
    let (calls, results) = complete_inputs(round, round_index)?;
    let is_winner: [bool; PLAYERS] = std::array::from_fn(|p| calls[p] == results[p]);

    let caller = round.caller();
    let with = with_flags(&calls, caller, &round.is_dash_call);
    let caller_doubled = with.iter().filter(|&&w| w).count() >= WITH_DOUBLING_THRESHOLD;
    let history = snapshot.everyone_lost_history();
    let multiplier = doubling_multiplier(&history, round_index, caller_doubled);

    let total = total_tricks(&round.calls);
    let difference = total - i32::from(TOTAL_TRICKS);
    let tier = risk_multiplier(difference);
    let risk_seat = if tier == 0 {
        None
    } else if snapshot.is_mandatory_suit_round(round_index) {
        round.manual_risk_player()
    } else {
        risk_player(caller, &round.is_dash_call)
    };
    let (only_winner, only_loser) = lone_outcomes(&is_winner);

    let flags = RoundFlags {
        caller,
        with,
        risk_player: risk_seat,
        risk_multiplier: tier,
        positive_dash: total > i32::from(TOTAL_TRICKS),
        multiplier,
        only_winner,
        only_loser,
    };
    debug!(round = round_index, ?flags, "Derived round flags");
    Ok(flags)
}

/// Scores all four seats of a round.
///
/// An everyone-lost round scores zero for everyone without looking at its
/// inputs. Otherwise every call and result must be set.
pub fn compute_round_scores(
    snapshot: &GameSnapshot,
    round_index: usize,
) -> Result<RoundScores, GameError> {
    let round = snapshot.round(round_index)?;
    if round.everyone_lost {
        return Ok(RoundScores::default());
    }
    let flags = round_flags(snapshot, round_index)?;
    let (calls, results) = complete_inputs(round, round_index)?;

    let scores = std::array::from_fn(|p| {
        player_points(calls[p], results[p], &flags.context(p, &calls)) * flags.multiplier
    });
    let is_winner = std::array::from_fn(|p| calls[p] == results[p]);
    debug!(round = round_index, ?scores, "Computed round scores");
    Ok(RoundScores { scores, is_winner })
}

type RoundInputs = ([Tricks; PLAYERS], [Tricks; PLAYERS]);

fn complete_inputs(round: &RoundState, round_index: usize) -> Result<RoundInputs, GameError> {
    let missing_calls = round.calls.iter().filter(|c| c.is_none()).count();
    let missing_results = round.results.iter().filter(|r| r.is_none()).count();
    if missing_calls > 0 || missing_results > 0 {
        return Err(GameError::IncompleteRound {
            round: round_index,
            missing_calls,
            missing_results,
        });
    }
    Ok((
        round.calls.map(Option::unwrap_or_default),
        round.results.map(Option::unwrap_or_default),
    ))
}
