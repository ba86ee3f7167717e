//! Running totals over finalized rounds.

use crate::call::{PLAYERS, PlayerId};

/// Sums the score rows of every round before `up_to` (exclusive).
///
/// Rows past the end of `rows` are treated as zero.
pub fn cumulative_scores(rows: &[[i32; PLAYERS]], up_to: usize) -> [i32; PLAYERS] {
    let mut totals = [0; PLAYERS];
    for row in rows.iter().take(up_to) {
        for (total, score) in totals.iter_mut().zip(row) {
            *total += score;
        }
    }
    totals
}

/// Seats ordered by total, highest first. Ties keep seat order.
pub fn standings(totals: &[i32; PLAYERS]) -> [PlayerId; PLAYERS] {
    let mut order: [PlayerId; PLAYERS] = std::array::from_fn(|p| p);
    order.sort_by(|a, b| totals[*b].cmp(&totals[*a]).then(a.cmp(b)));
    order
}
