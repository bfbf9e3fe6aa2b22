use holdem_odds::cards::{parse_cards, Card, Suit};
use holdem_odds::draws::{DrawInfo, DrawKind};
use holdem_odds::evaluator::Tier;
use holdem_odds::hand::HandError;
use holdem_odds::odds::{analyze_hand, calculate_odds, calculate_odds_seeded, OddsError};
use proptest::prelude::*;

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

#[test]
fn no_opponents_always_wins() {
    for sims in [1, 7, 250] {
        let r = calculate_odds(&cards("7c 2d"), &[], 0, sims).unwrap();
        assert_eq!(r.win_rate, 100.0);
        assert_eq!((r.wins, r.ties, r.losses, r.simulations), (sims, 0, 0, sims));
    }
}

#[test]
fn pocket_aces_heads_up_win_about_85_percent() {
    let r = calculate_odds_seeded(&cards("As Ah"), &[], 1, 5_000, 2024).unwrap();
    assert!(r.win_rate > 80.0 && r.win_rate < 90.0, "win_rate={}", r.win_rate);
}

#[test]
fn more_opponents_lower_the_win_rate() {
    let hole = cards("As Ah");
    let one = calculate_odds_seeded(&hole, &[], 1, 3_000, 5).unwrap();
    let five = calculate_odds_seeded(&hole, &[], 5, 3_000, 5).unwrap();
    assert!(five.win_rate < one.win_rate - 15.0, "one={} five={}", one.win_rate, five.win_rate);
}

#[test]
fn seeded_runs_are_reproducible() {
    let hole = cards("Kd Qd");
    let board = cards("Jd 7c 2d");
    let a = calculate_odds_seeded(&hole, &board, 2, 1_500, 99).unwrap();
    let b = calculate_odds_seeded(&hole, &board, 2, 1_500, 99).unwrap();
    assert_eq!(a, b);
}

#[test]
fn nuts_on_the_river_never_loses() {
    let r = calculate_odds_seeded(&cards("As Ks"), &cards("Qs Js Ts 4d 4c"), 4, 500, 1).unwrap();
    assert_eq!(r.wins, 500);
}

#[test]
fn board_plays_for_everyone_means_ties() {
    // a royal on the board cannot be beaten or improved
    let r = calculate_odds_seeded(&cards("2c 3d"), &cards("Ah Kh Qh Jh Th"), 3, 300, 8).unwrap();
    assert_eq!(r.ties, 300);
    assert_eq!(r.win_rate, 50.0);
}

#[test]
fn player_hand_must_have_two_cards() {
    let err = calculate_odds(&cards("As"), &[], 1, 100).unwrap_err();
    assert_eq!(err, OddsError::InvalidHand(HandError::HoleCount(1)));
    let err = calculate_odds(&cards("As Ks Qs"), &[], 1, 100).unwrap_err();
    assert_eq!(err, OddsError::InvalidHand(HandError::HoleCount(3)));
    let err = analyze_hand(&cards("As"), &[]).unwrap_err();
    assert_eq!(err, OddsError::InvalidHand(HandError::HoleCount(1)));
}

#[test]
fn malformed_input_is_rejected_before_simulating() {
    let err = calculate_odds(&cards("As Ks"), &cards("As 2c 3c"), 1, 100).unwrap_err();
    assert_eq!(err, OddsError::InvalidHand(HandError::Overlap));
    let err = calculate_odds(&cards("As As"), &[], 1, 100).unwrap_err();
    assert_eq!(err, OddsError::InvalidHand(HandError::DuplicateHoleCards));
    let err = calculate_odds(&cards("As Ks"), &cards("2c 3c 4c 5c 6c 7c"), 1, 100).unwrap_err();
    assert_eq!(err, OddsError::InvalidHand(HandError::TooManyBoardCards(6)));
    let err = calculate_odds(&cards("As Ks"), &[], 1, 0).unwrap_err();
    assert_eq!(err, OddsError::NoSimulations);
    let err = calculate_odds(&cards("As Ks"), &[], 23, 10).unwrap_err();
    assert!(matches!(err, OddsError::TooManyOpponents { opponents: 23, .. }));
}

#[test]
fn analyze_complete_board_reports_no_draws() {
    let report = analyze_hand(&cards("9h 8h"), &cards("7h 6h Kc 2d 3s")).unwrap();
    assert!(report.draws.is_empty());
    assert_eq!(report.current_hand.tier, Tier::HighCard);
}

#[test]
fn analyze_flop_with_combo_draw() {
    let report = analyze_hand(&cards("9h 8h"), &cards("7h 6h Kc")).unwrap();
    assert_eq!(
        report.draws,
        vec![
            DrawInfo { kind: DrawKind::Flush(Suit::Hearts), outs: 9 },
            DrawInfo { kind: DrawKind::Straight, outs: 8 },
        ]
    );
}

#[test]
fn analyze_preflop_ranks_the_hole_cards_alone() {
    let report = analyze_hand(&cards("Qs 4d"), &[]).unwrap();
    assert_eq!(report.current_hand.tier, Tier::HighCard);
    assert_eq!(report.current_hand.value, 12);
    assert!(report.draws.is_empty());
}

#[test]
fn analyze_made_hand_on_the_turn() {
    let report = analyze_hand(&cards("Ah Ad"), &cards("Ac 9s 9d 2h")).unwrap();
    assert_eq!(report.current_hand.tier, Tier::FullHouse);
    assert_eq!(report.current_hand.value, 14 * 15 + 9);
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::*;
    use holdem_odds::odds::calculate_odds_parallel;

    #[test]
    fn parallel_is_reproducible_and_conserves_trials() {
        let hole = cards("Th Tc");
        let a = calculate_odds_parallel(&hole, &[], 2, 5_000, 31).unwrap();
        let b = calculate_odds_parallel(&hole, &[], 2, 5_000, 31).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.wins + a.ties + a.losses, 5_000);
        assert_eq!(a.simulations, 5_000);
    }

    #[test]
    fn parallel_agrees_with_known_equity() {
        let r = calculate_odds_parallel(&cards("As Ah"), &[], 1, 8_000, 4).unwrap();
        assert!(r.win_rate > 80.0 && r.win_rate < 90.0, "win_rate={}", r.win_rate);
    }

    #[test]
    fn parallel_validates_like_the_serial_path() {
        let err = calculate_odds_parallel(&cards("As"), &[], 1, 10, 0).unwrap_err();
        assert_eq!(err, OddsError::InvalidHand(HandError::HoleCount(1)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn tallies_are_conserved_and_win_rate_bounded(
        seed in any::<u64>(),
        opponents in 0usize..=6,
        sims in 1usize..200,
        board_len in 0usize..=5
    ) {
        let deck = cards("As Kd 9c 9h 2s 7d 5c");
        let (hole, board) = (&deck[..2], &deck[2..2 + board_len]);
        let r = calculate_odds_seeded(hole, board, opponents, sims, seed).unwrap();
        prop_assert_eq!(r.wins + r.ties + r.losses, sims);
        prop_assert_eq!(r.simulations, sims);
        prop_assert!((0.0..=100.0).contains(&r.win_rate));
    }
}
