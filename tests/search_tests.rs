//! Search tests to verify the engine finds correct moves in various positions.

use std::time::{Duration, Instant};

use chess_ai::board::is_third_repetition;
use chess_ai::board::prelude::*;

fn best_move(fen: &str, depth: u32) -> Option<String> {
    let position = GamePosition::from_fen(fen);
    let evaluator = Strategy::Standard.evaluator();
    choose_move(&position, depth, None, &evaluator, &[]).map(|mv| mv.to_string())
}

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    // White to move, Qe8# is mate
    let best = best_move("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1", 4);
    assert_eq!(best.as_deref(), Some("e1e8"), "Should find Qe8# (back rank mate)");
}

/// Test that the engine finds a simple mate in 1 with queen
#[test]
fn finds_mate_in_one_queen() {
    // White to move, Qxf7# is mate
    let best = best_move(
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4",
        4,
    );
    assert_eq!(best.as_deref(), Some("h5f7"), "Should find Qxf7# (scholar's mate)");
}

/// Test that the engine avoids giving away material
#[test]
fn avoids_hanging_queen() {
    let best = best_move(
        "r1bqkbnr/pppppppp/2n5/8/4P3/5Q2/PPPP1PPP/RNB1KBNR w KQkq - 0 3",
        4,
    );
    assert!(best.is_some(), "Should find a move");
    // Qxc6 loses the queen to a pawn recapture
    assert_ne!(best.as_deref(), Some("f3c6"), "Should not hang the queen on c6");
}

/// Test that the engine captures free material
#[test]
fn captures_free_piece() {
    // The knight on d4 is undefended
    let best = best_move("4k3/8/8/8/3n4/8/8/3RK3 w - - 0 1", 4);
    assert_eq!(best.as_deref(), Some("d1d4"));
}

/// Test iterative deepening produces consistent results
#[test]
fn iterative_deepening_consistency() {
    let position = GamePosition::starting();
    let evaluator = Strategy::Standard.evaluator();
    let mut state = SearchState::default();

    // Search at depth 2 and depth 4, both should return legal moves
    let best2 = state.search(&position, 2, None, &evaluator, &[]);
    let best4 = state.search(&position, 4, None, &evaluator, &[]);

    assert_eq!(best2.depth, 2);
    assert_eq!(best4.depth, 4);

    let moves = position.legal_moves();
    assert!(moves.contains(best2.best_move.expect("depth 2 move")));
    assert!(moves.contains(best4.best_move.expect("depth 4 move")));
}

/// Test that search handles single legal move positions
#[test]
fn single_legal_move() {
    // White king on a1 can only escape to a2
    let best = best_move("1r6/8/8/8/8/8/8/K5rk w - - 0 1", 4);
    assert_eq!(best.as_deref(), Some("a1a2"), "Only legal move should be Ka2");
}

/// Test that search returns None for checkmate position
#[test]
fn no_move_in_checkmate() {
    let position =
        GamePosition::from_fen("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1");

    // First verify it's actually checkmate
    assert!(position.is_checkmate(), "Position should be checkmate");

    let evaluator = Strategy::Standard.evaluator();
    let outcome = SearchState::default().search(&position, 4, None, &evaluator, &[]);
    assert!(outcome.best_move.is_none(), "Should return None for checkmate position");
    assert_eq!(outcome.depth, 0);
}

/// Test repetition detection over a knight shuffle
#[test]
fn detects_threefold_repetition() {
    let mut position = GamePosition::starting();
    let mut keys: Vec<PositionKey> = vec![position.key()];

    // Play Nf3 Nf6 Ng1 Ng8 twice
    for mv in ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1"] {
        position = position.play(mv).expect("legal move");
        keys.push(position.key());
    }

    let next = position.play("f6g8").expect("legal move");
    assert!(is_third_repetition(next.key(), &keys), "Should be a third repetition");
    assert!(!is_third_repetition(next.key(), &keys[..4]));
}

/// Test evaluation is symmetric
#[test]
fn evaluation_symmetry() {
    let position = GamePosition::starting();
    let evaluator = Strategy::Standard.evaluator();
    let eval = evaluator.evaluate(&position, position.side_to_move());
    assert!(eval.abs() < 50, "Starting position should be roughly equal (eval: {})", eval);
}

/// Test that positions with material advantage evaluate correctly
#[test]
fn evaluation_material_advantage() {
    let evaluator = Strategy::Standard.evaluator();

    // White up a queen
    let white_up =
        GamePosition::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let eval_white_up = evaluator.evaluate(&white_up, chess_ai::Color::White);

    // Black up a queen
    let black_up =
        GamePosition::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1");
    let eval_black_up = evaluator.evaluate(&black_up, chess_ai::Color::White);

    assert!(eval_white_up > 800, "White up a queen should be very positive (eval: {})", eval_white_up);
    assert!(eval_black_up < -800, "Black up a queen should be very negative (eval: {})", eval_black_up);
}

/// Test that search completes at reasonable depth
#[test]
fn search_completes_at_depth_5() {
    let position = GamePosition::starting();
    let evaluator = Strategy::Standard.evaluator();

    let start = Instant::now();
    let best = choose_move(&position, 5, None, &evaluator, &[]);
    let elapsed = start.elapsed();

    assert!(best.is_some(), "Should find a move at depth 5");
    assert!(elapsed.as_secs() < 60, "Search at depth 5 took too long: {:?}", elapsed);
}

/// Test that a time budget cuts deep searches short
#[test]
fn time_budget_cuts_search_short() {
    let position = GamePosition::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    );
    let evaluator = Strategy::Aggressive.evaluator();
    let budget = Duration::from_millis(100);
    let outcome = SearchState::default().search(&position, 40, Some(budget), &evaluator, &[]);

    assert!(outcome.depth < 40);
    assert!(outcome.elapsed < budget + Duration::from_millis(50));
    let mv = outcome.best_move.expect("position has moves");
    assert!(position.legal_moves().contains(mv));
}

/// Test that stalemate is correctly identified
#[test]
fn identifies_stalemate() {
    // Classic stalemate position: black to move, king on a8, white queen on b6, white king on c6
    let position = GamePosition::from_fen("k7/8/1QK5/8/8/8/8/8 b - - 0 1");
    assert!(position.is_stalemate(), "Position should be stalemate");
    assert!(!position.is_checkmate(), "Position should not be checkmate");

    let evaluator = Strategy::Standard.evaluator();
    assert_eq!(choose_move(&position, 3, None, &evaluator, &[]), None);
}
