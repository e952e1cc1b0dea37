//! Evaluator and strategy tests.

use crate::board::eval::POSITIONAL_CLAMP;
use crate::board::{
    Color, EvalProfile, Evaluator, GamePosition, MaterialEvaluator, Noisy, Strategy,
    TerminalAware, WeightedEvaluator, TERMINAL_SCORE,
};

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    "8/5k2/8/3PP3/8/8/2K5/8 w - - 0 1",
];

#[test]
fn test_start_position_is_balanced() {
    let pos = GamePosition::starting();
    for strategy in Strategy::ALL.into_iter().filter(|s| s.is_deterministic()) {
        let eval = strategy.evaluator();
        assert_eq!(eval.evaluate(&pos, Color::White), 0, "{strategy}");
        assert_eq!(eval.evaluate(&pos, Color::Black), 0, "{strategy}");
    }
}

#[test]
fn test_perspectives_are_opposite() {
    for fen in POSITIONS {
        let pos = GamePosition::from_fen(fen);
        for strategy in Strategy::ALL.into_iter().filter(|s| s.is_deterministic()) {
            let eval = strategy.evaluator();
            assert_eq!(
                eval.evaluate(&pos, Color::White),
                -eval.evaluate(&pos, Color::Black),
                "{strategy} on {fen}"
            );
        }
    }
}

#[test]
fn test_material_counts_missing_queen() {
    let pos = GamePosition::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1");
    assert_eq!(MaterialEvaluator.evaluate(&pos, Color::White), -900);
    assert_eq!(MaterialEvaluator.evaluate(&pos, Color::Black), 900);
}

#[test]
fn test_passed_pawns_favor_their_owner() {
    let pos = GamePosition::from_fen("8/5k2/8/3PP3/8/8/2K5/8 w - - 0 1");
    let eval = WeightedEvaluator::new(EvalProfile::STANDARD);
    assert!(eval.positional(&pos) > 0);

    let aggressive = WeightedEvaluator::new(EvalProfile::AGGRESSIVE);
    assert!(aggressive.evaluate(&pos, Color::White) > 200);
}

#[test]
fn test_defensive_clamp_keeps_positional_below_a_pawn() {
    let clamped = WeightedEvaluator::new(EvalProfile::DEFENSIVE);
    for fen in POSITIONS {
        let pos = GamePosition::from_fen(fen);
        let positional = clamped.positional(&pos);
        assert!(positional.abs() <= POSITIONAL_CLAMP, "{positional} on {fen}");
        assert!(positional.abs() < 100);
    }

    // Unclamped, the same weights can exceed a pawn
    let unclamped = WeightedEvaluator::new(EvalProfile {
        clamp_positional: false,
        ..EvalProfile::DEFENSIVE
    });
    let pos = GamePosition::from_fen("8/5k2/8/3PP3/8/8/2K5/8 w - - 0 1");
    assert!(unclamped.positional(&pos) >= clamped.positional(&pos));
}

#[test]
fn test_terminal_aware_scores_mate_and_stalemate() {
    let eval = TerminalAware::new(WeightedEvaluator::default());

    let mated = GamePosition::from_fen(
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
    );
    assert_eq!(eval.evaluate(&mated, Color::White), -TERMINAL_SCORE);
    assert_eq!(eval.evaluate(&mated, Color::Black), TERMINAL_SCORE);

    // Black is a queen down but stalemated
    let stalemate = GamePosition::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(eval.evaluate(&stalemate, Color::Black), 0);
    assert_eq!(eval.evaluate(&stalemate, Color::White), 0);
}

#[test]
fn test_noise_stays_within_amplitude() {
    let pos = GamePosition::from_fen(POSITIONS[1]);
    let base = MaterialEvaluator.evaluate(&pos, Color::White);
    let noisy = Noisy::new(MaterialEvaluator, 10, 7);
    assert_eq!(noisy.amplitude(), 10);

    let mut seen_nonzero = false;
    for _ in 0..200 {
        let delta = noisy.evaluate(&pos, Color::White) - base;
        assert!((-10..=10).contains(&delta), "noise {delta} out of range");
        seen_nonzero |= delta != 0;
    }
    assert!(seen_nonzero);
}

#[test]
fn test_same_seed_gives_same_noise() {
    let pos = GamePosition::starting();
    let a = Noisy::new(MaterialEvaluator, 25, 42);
    let b = Noisy::new(MaterialEvaluator, 25, 42);
    let run_a: Vec<i32> = (0..20).map(|_| a.evaluate(&pos, Color::White)).collect();
    let run_b: Vec<i32> = (0..20).map(|_| b.evaluate(&pos, Color::White)).collect();
    assert_eq!(run_a, run_b);
}

#[test]
fn test_strategy_names_round_trip() {
    for strategy in Strategy::ALL {
        let parsed: Strategy = strategy.to_string().parse().expect("known strategy");
        assert_eq!(parsed, strategy);
    }
    assert_eq!("  Defensive ".parse::<Strategy>(), Ok(Strategy::Defensive));
    let err = "reckless".parse::<Strategy>().unwrap_err();
    assert_eq!(err.name, "reckless");
}
