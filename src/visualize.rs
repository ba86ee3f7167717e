use std::fmt::Write;

use crate::call::{PLAYERS, PlayerId, Tricks};
use crate::game::Game;
use crate::round::{RoundFlags, round_flags};
use crate::state::{RoundState, RoundStatus};

/// Customize scoreboard rendering for CLI output.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    /// Show `call/result` next to each score.
    pub show_calls: bool,
    /// Tag seats with their caller / with / risk role.
    pub show_roles: bool,
    /// Print the running total after every round instead of only at the end.
    pub show_running_totals: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_calls: true,
            show_roles: true,
            show_running_totals: false,
        }
    }
}

pub fn render_scoreboard(game: &Game) -> String {
    render_scoreboard_with_options(game, VisualOptions::default())
}

pub fn render_scoreboard_with_options(game: &Game, options: VisualOptions) -> String {
    let mut out = String::new();
    let snapshot = game.snapshot();
    let _ = writeln!(
        out,
        "Mode: {:?} ({} rounds)",
        snapshot.mode,
        snapshot.mode.round_count()
    );
    let _ = write!(out, "{:>5} ", "Round");
    for name in game.players() {
        let _ = write!(out, "| {name:<18} ");
    }
    let _ = writeln!(out);

    for (index, round) in snapshot.rounds.iter().enumerate() {
        if round.status == RoundStatus::Preparing && round.calls.iter().all(Option::is_none) {
            continue;
        }
        let roles = if options.show_roles {
            round_flags(&snapshot, index).ok()
        } else {
            None
        };
        let marker = if snapshot.is_mandatory_suit_round(index) {
            "*"
        } else {
            " "
        };
        let _ = write!(out, "{:>4}{marker} ", index + 1);
        for player in 0..PLAYERS {
            let mut cell = match round.status {
                RoundStatus::Finished if round.everyone_lost => String::from("lost"),
                RoundStatus::Finished => format!("{:+}", round.scores[player]),
                _ => String::from("-"),
            };
            if options.show_calls && !round.everyone_lost {
                let _ = write!(
                    cell,
                    " {}/{}",
                    format_tricks(round.calls[player]),
                    format_tricks(round.results[player])
                );
            }
            if let Some(flags) = &roles {
                cell.push_str(&role_tags(round, flags, player));
            }
            let _ = write!(out, "| {cell:<18} ");
        }
        let _ = writeln!(out);
        if options.show_running_totals && round.is_finished() {
            let totals = game.totals_before(index + 1);
            let _ = write!(out, "{:>5} ", "=");
            for total in totals {
                let _ = write!(out, "| {total:<18} ");
            }
            let _ = writeln!(out);
        }
    }

    let _ = write!(out, "{:>5} ", "Total");
    for total in game.totals() {
        let _ = write!(out, "| {total:<18} ");
    }
    let _ = writeln!(out);

    let standings = game
        .standings()
        .iter()
        .enumerate()
        .map(|(rank, &player)| format!("{}. {}", rank + 1, game.players()[player]))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "Standings: {standings}");
    out
}

fn format_tricks(value: Option<Tricks>) -> String {
    value.map_or_else(|| String::from("?"), |v| v.to_string())
}

fn role_tags(round: &RoundState, flags: &RoundFlags, player: PlayerId) -> String {
    let mut tags = String::new();
    if flags.caller == Some(player) {
        tags.push_str(" C");
    }
    if round.is_dash_call[player] {
        tags.push_str(" D");
    }
    if flags.with[player] {
        tags.push_str(" W");
    }
    if flags.risk_player == Some(player) {
        tags.push_str(" R");
    }
    tags
}
