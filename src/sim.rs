//! Seeded random rounds for simulations and smoke testing.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::RoundAction;
use crate::call::{PLAYERS, TOTAL_TRICKS, Tricks};
use crate::replay::RoundLog;
use crate::state::GameMode;

/// Knobs for the random table.
#[derive(Clone, Copy, Debug)]
pub struct SimOptions {
    /// Chance that a non-caller seat takes a dash call.
    pub dash_chance: f64,
    /// Chance that a round is declared everyone lost.
    pub everyone_lost_chance: f64,
    /// Highest call a caller will make.
    pub max_caller_call: Tricks,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dash_chance: 0.1,
            everyone_lost_chance: 0.02,
            max_caller_call: 9,
        }
    }
}

/// Generates a complete, valid round log: a caller, four calls, and results
/// that hand out exactly 13 tricks.
pub fn random_round<R: Rng>(
    rng: &mut R,
    mode: GameMode,
    round_index: usize,
    options: SimOptions,
) -> RoundLog {
    if rng.gen_bool(options.everyone_lost_chance) {
        return RoundLog {
            actions: Vec::new(),
            everyone_lost: true,
        };
    }

    let mut actions = Vec::with_capacity(PLAYERS * 2 + 2);
    let caller = rng.gen_range(0..PLAYERS);
    let caller_call = rng.gen_range(4..=options.max_caller_call.max(4));
    let mut dash = [false; PLAYERS];

    for player in 0..PLAYERS {
        if player != caller && rng.gen_bool(options.dash_chance) {
            dash[player] = true;
            actions.push(RoundAction::DashCall { player, dash: true });
            continue;
        }
        let value = if player == caller {
            caller_call
        } else {
            rng.gen_range(0..=caller_call)
        };
        actions.push(RoundAction::Call {
            player,
            value: Some(value),
        });
    }
    actions.push(RoundAction::Caller { player: caller });

    if mode.is_mandatory_suit_round(round_index) {
        let candidates: Vec<usize> = (0..PLAYERS).filter(|&p| !dash[p]).collect();
        if let Some(&player) = candidates.choose(rng) {
            actions.push(RoundAction::ManualRisk { player });
        }
    }

    let mut results = [0 as Tricks; PLAYERS];
    for _ in 0..TOTAL_TRICKS {
        results[rng.gen_range(0..PLAYERS)] += 1;
    }
    actions.extend(
        results
            .iter()
            .enumerate()
            .map(|(player, &value)| RoundAction::Result {
                player,
                value: Some(value),
            }),
    );

    RoundLog {
        actions,
        everyone_lost: false,
    }
}
