use crate::error::InvalidAction;

/// Zero-based seat index of a player at the table.
pub type PlayerId = usize;

/// Number of tricks, either bid or won.
pub type Tricks = u8;

/// Estimation is always played by four seats.
pub const PLAYERS: usize = 4;
/// Tricks available in every round (a full 52-card deck dealt to four seats).
pub const TOTAL_TRICKS: u8 = 13;
pub const MAX_CALL: Tricks = 13;
/// Smallest call scored on the squared high-call table.
pub const HIGH_CALL_MIN: Tricks = 8;

/// Checks that a call or result fits in a single round.
#[inline]
pub fn validate_tricks(value: Tricks) -> Result<Tricks, InvalidAction> {
    if value > MAX_CALL {
        return Err(InvalidAction::TricksOutOfRange(value));
    }
    Ok(value)
}

/// Seat sitting `offset` places clockwise from `player`.
#[inline]
pub fn seat_after(player: PlayerId, offset: usize) -> PlayerId {
    (player + offset) % PLAYERS
}

/// Sum of the set entries, ignoring unset ones.
pub fn total_tricks(values: &[Option<Tricks>; PLAYERS]) -> i32 {
    values.iter().flatten().map(|v| i32::from(*v)).sum()
}
