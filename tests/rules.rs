use estimation::{
    GameError, GameMode, GameSnapshot, PLAYERS, RoundState, compute_round_scores, round_flags,
};

fn scored_round(
    calls: [u8; PLAYERS],
    results: [u8; PLAYERS],
    caller: Option<usize>,
    dash: [bool; PLAYERS],
) -> RoundState {
    let mut round = RoundState::new();
    round.calls = calls.map(Some);
    round.results = results.map(Some);
    if let Some(caller) = caller {
        round.is_caller[caller] = true;
    }
    round.is_dash_call = dash;
    round
}

fn snapshot_with(mode: GameMode, index: usize, round: RoundState) -> GameSnapshot {
    let mut snapshot = GameSnapshot::new(mode);
    snapshot.rounds[index] = round;
    snapshot
}

#[test]
fn everyone_makes_their_call() -> Result<(), GameError> {
    let round = scored_round([4, 4, 3, 2], [4, 4, 3, 2], Some(0), [false; PLAYERS]);
    let snapshot = snapshot_with(GameMode::Classic, 0, round);

    let flags = round_flags(&snapshot, 0)?;
    assert_eq!(flags.multiplier, 1);
    assert_eq!(flags.risk_player, None);
    assert_eq!(flags.with, [false, true, false, false]);

    let scored = compute_round_scores(&snapshot, 0)?;
    assert_eq!(scored.scores, [24, 24, 13, 12]);
    assert_eq!(scored.is_winner, [true; PLAYERS]);
    Ok(())
}

#[test]
fn positive_dash_miss_costs_twenty_five() -> Result<(), GameError> {
    // calls total 15
    let round = scored_round(
        [0, 6, 5, 4],
        [2, 6, 2, 3],
        Some(1),
        [true, false, false, false],
    );
    let snapshot = snapshot_with(GameMode::Classic, 0, round);
    let scored = compute_round_scores(&snapshot, 0)?;
    assert_eq!(scored.scores[0], -25);
    assert!(!scored.is_winner[0]);
    Ok(())
}

#[test]
fn under_called_dash_made_is_thirty() -> Result<(), GameError> {
    // calls total 11: risk tier 1 on seat 3 (furthest from caller 0)
    let round = scored_round(
        [5, 0, 3, 3],
        [5, 0, 5, 3],
        Some(0),
        [false, true, false, false],
    );
    let snapshot = snapshot_with(GameMode::Classic, 0, round);
    let scored = compute_round_scores(&snapshot, 0)?;
    // seat 2 is the only loser: -2 - 10
    assert_eq!(scored.scores, [25, 30, -12, 23]);
    Ok(())
}

#[test]
fn positive_dash_starts_above_thirteen_calls() -> Result<(), GameError> {
    let dash = [true, false, false, false];
    for (calls, positive, points) in [([0, 5, 4, 4], false, 30), ([0, 5, 4, 5], true, 25)] {
        let made = snapshot_with(
            GameMode::Classic,
            0,
            scored_round(calls, [0, 5, 4, 4], Some(1), dash),
        );
        assert_eq!(round_flags(&made, 0)?.positive_dash, positive);
        assert_eq!(compute_round_scores(&made, 0)?.scores[0], points);

        let missed = snapshot_with(
            GameMode::Classic,
            0,
            scored_round(calls, [1, 5, 4, 3], Some(1), dash),
        );
        assert_eq!(compute_round_scores(&missed, 0)?.scores[0], -points);
    }
    Ok(())
}

#[test]
fn everyone_lost_round_scores_zero_and_doubles_next() -> Result<(), GameError> {
    let mut lost = RoundState::new();
    lost.everyone_lost = true;
    let mut snapshot = GameSnapshot::new(GameMode::Mini);
    snapshot.rounds[2] = lost;
    snapshot.rounds[3] = scored_round([4, 4, 3, 2], [4, 4, 3, 2], Some(0), [false; PLAYERS]);

    let zero = compute_round_scores(&snapshot, 2)?;
    assert_eq!(zero.scores, [0; PLAYERS]);
    assert_eq!(zero.is_winner, [false; PLAYERS]);

    let doubled = compute_round_scores(&snapshot, 3)?;
    assert_eq!(doubled.scores, [48, 48, 26, 24]);
    Ok(())
}

#[test]
fn caller_with_two_and_two_lost_rounds_multiply_by_eight() -> Result<(), GameError> {
    let mut snapshot = GameSnapshot::new(GameMode::Classic);
    snapshot.rounds[0].everyone_lost = true;
    snapshot.rounds[1].everyone_lost = true;
    snapshot.rounds[2] = scored_round([3, 3, 3, 4], [3, 3, 3, 4], Some(0), [false; PLAYERS]);

    let flags = round_flags(&snapshot, 2)?;
    assert_eq!(flags.with_count(), 2);
    assert_eq!(flags.multiplier, 8);

    let scored = compute_round_scores(&snapshot, 2)?;
    assert_eq!(scored.scores, [184, 184, 184, 112]);
    Ok(())
}

#[test]
fn lost_streak_is_broken_by_a_played_round() -> Result<(), GameError> {
    let mut snapshot = GameSnapshot::new(GameMode::Classic);
    snapshot.rounds[0].everyone_lost = true;
    snapshot.rounds[1] = scored_round([4, 4, 3, 2], [4, 4, 3, 2], Some(0), [false; PLAYERS]);
    snapshot.rounds[2] = scored_round([4, 4, 3, 2], [4, 4, 3, 2], Some(0), [false; PLAYERS]);
    assert_eq!(round_flags(&snapshot, 1)?.multiplier, 2);
    assert_eq!(round_flags(&snapshot, 2)?.multiplier, 1);
    Ok(())
}

#[test]
fn risk_lands_furthest_from_caller() -> Result<(), GameError> {
    // calls total 16: tier 1
    let round = scored_round([5, 4, 3, 4], [5, 4, 2, 2], Some(0), [false; PLAYERS]);
    let snapshot = snapshot_with(GameMode::Classic, 0, round);
    let flags = round_flags(&snapshot, 0)?;
    assert_eq!(flags.risk_player, Some(3));
    assert_eq!(flags.risk_multiplier, 1);
    assert!(flags.positive_dash);

    let scored = compute_round_scores(&snapshot, 0)?;
    assert_eq!(scored.scores, [25, 14, -1, -12]);
    Ok(())
}

#[test]
fn risk_skips_dash_seat() -> Result<(), GameError> {
    let round = scored_round(
        [0, 6, 4, 5],
        [0, 6, 4, 3],
        Some(1),
        [true, false, false, false],
    );
    let snapshot = snapshot_with(GameMode::Classic, 0, round);
    assert_eq!(round_flags(&snapshot, 0)?.risk_player, Some(3));

    let scored = compute_round_scores(&snapshot, 0)?;
    // seat 3: missed by 2, risk -10, only loser -10
    assert_eq!(scored.scores, [25, 26, 14, -22]);
    Ok(())
}

#[test]
fn risk_tier_scales_the_bonus() -> Result<(), GameError> {
    // calls total 19: tier 3 on seat 3
    let round = scored_round([6, 4, 4, 5], [6, 4, 1, 2], Some(0), [false; PLAYERS]);
    let snapshot = snapshot_with(GameMode::Classic, 0, round);
    let flags = round_flags(&snapshot, 0)?;
    assert_eq!(flags.risk_multiplier, 3);

    let scored = compute_round_scores(&snapshot, 0)?;
    assert_eq!(scored.scores, [26, 14, -3, -33]);
    Ok(())
}

#[test]
fn mandatory_suit_round_uses_manual_risk_only() -> Result<(), GameError> {
    let mut round = scored_round([5, 5, 3, 2], [5, 5, 2, 1], Some(0), [false; PLAYERS]);
    round.manual_risk[1] = true;

    let mandatory = snapshot_with(GameMode::Classic, 13, round.clone());
    let flags = round_flags(&mandatory, 13)?;
    assert_eq!(flags.risk_player, Some(1));
    // with and risk both apply to seat 1
    assert!(flags.with[1]);
    assert_eq!(compute_round_scores(&mandatory, 13)?.scores, [25, 35, -1, -1]);

    let mut unset = round.clone();
    unset.manual_risk = [false; PLAYERS];
    let mandatory = snapshot_with(GameMode::Classic, 17, unset);
    assert_eq!(round_flags(&mandatory, 17)?.risk_player, None);
    assert_eq!(compute_round_scores(&mandatory, 17)?.scores, [25, 25, -1, -1]);

    let automatic = snapshot_with(GameMode::Classic, 12, round);
    assert_eq!(round_flags(&automatic, 12)?.risk_player, Some(3));
    assert_eq!(compute_round_scores(&automatic, 12)?.scores, [25, 25, -1, -11]);
    Ok(())
}

#[test]
fn high_call_ignores_roles() -> Result<(), GameError> {
    let round = scored_round([8, 2, 2, 2], [8, 1, 2, 2], Some(0), [false; PLAYERS]);
    let snapshot = snapshot_with(GameMode::Classic, 0, round);
    let scored = compute_round_scores(&snapshot, 0)?;
    assert_eq!(scored.scores, [64, -11, 12, 12]);
    Ok(())
}

#[test]
fn only_winner_collects_bonus() -> Result<(), GameError> {
    let round = scored_round([3, 3, 4, 4], [3, 2, 3, 5], Some(2), [false; PLAYERS]);
    let snapshot = snapshot_with(GameMode::Classic, 0, round);
    let flags = round_flags(&snapshot, 0)?;
    assert_eq!(flags.only_winner, Some(0));
    assert_eq!(flags.only_loser, None);
    assert_eq!(compute_round_scores(&snapshot, 0)?.scores, [23, -1, -11, -11]);
    Ok(())
}

#[test]
fn no_caller_means_no_with_and_no_risk() -> Result<(), GameError> {
    let round = scored_round([5, 5, 5, 5], [5, 5, 2, 1], None, [false; PLAYERS]);
    let snapshot = snapshot_with(GameMode::Classic, 0, round);
    let flags = round_flags(&snapshot, 0)?;
    assert_eq!(flags.caller, None);
    assert_eq!(flags.with, [false; PLAYERS]);
    assert_eq!(flags.risk_player, None);
    assert_eq!(flags.risk_multiplier, 3);
    assert_eq!(compute_round_scores(&snapshot, 0)?.scores, [15, 15, -3, -4]);
    Ok(())
}

#[test]
fn incomplete_round_is_rejected() {
    let mut round = scored_round([4, 4, 3, 2], [4, 4, 3, 2], Some(0), [false; PLAYERS]);
    round.calls[1] = None;
    round.results[2] = None;
    round.results[3] = None;
    let snapshot = snapshot_with(GameMode::Classic, 0, round);
    let err = compute_round_scores(&snapshot, 0).unwrap_err();
    assert!(matches!(
        err,
        GameError::IncompleteRound {
            round: 0,
            missing_calls: 1,
            missing_results: 2,
        }
    ));
}

#[test]
fn round_outside_mode_is_rejected() {
    let snapshot = GameSnapshot::new(GameMode::Micro);
    assert!(matches!(
        compute_round_scores(&snapshot, 5),
        Err(GameError::InvalidRound(5))
    ));
}
