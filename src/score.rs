//! Scoring rules for a single player in a single round.
//!
//! Calls fall into three tiers, checked in order:
//!   dash (call of 0):   +30 / -30, or +25 / -25 when the table over-called
//!   high (8..=13):      call² if made, -call²/2 if missed, lone winner/loser only
//!   low (1..=7):        +10 and +tricks if made, -|call - tricks| if missed,
//!                       then ±10 for caller, with, lone winner/loser and ±10×tier for risk
//! The round doubling multiplier is applied by the orchestrator, not here.

use crate::call::{HIGH_CALL_MIN, Tricks};

pub const DASH_POINTS: i32 = 30;
pub const POSITIVE_DASH_POINTS: i32 = 25;
pub const MADE_BONUS: i32 = 10;
pub const ROLE_BONUS: i32 = 10;
pub const LONE_BONUS: i32 = 10;
pub const RISK_BONUS: i32 = 10;

/// Situational flags for one player, derived from the whole round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreContext {
    pub dash: bool,
    /// The table called more than 13 tricks in total.
    pub positive_dash: bool,
    pub caller: bool,
    pub with: bool,
    pub risk: bool,
    pub only_winner: bool,
    pub only_loser: bool,
    pub risk_multiplier: i32,
}

/// Risk tier for the absolute distance between total calls and 13.
///
/// Zero means the round carries no risk bonus.
pub fn risk_multiplier(round_difference: i32) -> i32 {
    match round_difference.unsigned_abs() {
        2..=3 => 1,
        4..=5 => 2,
        6..=7 => 3,
        8..=9 => 4,
        _ => 0,
    }
}

/// Points earned by a player calling `bid` and winning `result` tricks.
///
/// Total over `0..=13` for both inputs; range checks belong to the input layer.
pub fn player_points(bid: Tricks, result: Tricks, ctx: &ScoreContext) -> i32 {
    let made = bid == result;
    let sign = if made { 1 } else { -1 };

    if ctx.dash || bid == 0 {
        let points = if ctx.positive_dash {
            POSITIVE_DASH_POINTS
        } else {
            DASH_POINTS
        };
        return sign * points;
    }

    let bid = i32::from(bid);
    let result = i32::from(result);
    let lone = lone_adjustment(ctx);

    if bid >= i32::from(HIGH_CALL_MIN) {
        let base = if made { bid * bid } else { -(bid * bid) / 2 };
        return base + lone;
    }

    let mut points = if made {
        MADE_BONUS + result
    } else {
        -(bid - result).abs()
    };
    if ctx.caller {
        points += sign * ROLE_BONUS;
    }
    if ctx.with {
        points += sign * ROLE_BONUS;
    }
    if ctx.risk && ctx.risk_multiplier > 0 {
        points += sign * RISK_BONUS * ctx.risk_multiplier;
    }
    points + lone
}

fn lone_adjustment(ctx: &ScoreContext) -> i32 {
    let mut points = 0;
    if ctx.only_winner {
        points += LONE_BONUS;
    }
    if ctx.only_loser {
        points -= LONE_BONUS;
    }
    points
}
