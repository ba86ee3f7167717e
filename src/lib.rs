//! Scoring engine for the four-player trick-taking game Estimation.
//!
//! The core is three pure layers: [`player_points`] scores one seat,
//! [`compute_round_scores`] derives the round's flags and scores every seat,
//! and [`cumulative_scores`] adds finalized rounds up. [`Game`] is a small
//! in-memory session on top of them.

pub mod action;
pub mod call;
pub mod error;
pub mod game;
pub mod replay;
pub mod round;
pub mod score;
pub mod sim;
pub mod state;
pub mod totals;
pub mod visualize;

pub use crate::action::RoundAction;
pub use crate::call::{PLAYERS, PlayerId, TOTAL_TRICKS, Tricks};
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::replay::{GameLog, RoundLog, replay};
pub use crate::round::{RoundFlags, RoundScores, compute_round_scores, round_flags};
pub use crate::score::{ScoreContext, player_points, risk_multiplier};
pub use crate::sim::{SimOptions, random_round};
pub use crate::state::{GameMode, GameSnapshot, RoundState, RoundStatus};
pub use crate::totals::{cumulative_scores, standings};
pub use crate::visualize::{VisualOptions, render_scoreboard, render_scoreboard_with_options};
