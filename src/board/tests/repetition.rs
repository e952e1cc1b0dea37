//! Position keys and threefold repetition.

use super::play_line;
use crate::board::{is_third_repetition, GamePosition, KeyHistory, PositionKey};

const KNIGHT_DANCE: [&str; 4] = ["g1f3", "g8f6", "f3g1", "f6g8"];

/// Keys of every position along `moves`, starting with `start`
fn keys_along(start: GamePosition, moves: &[&str]) -> Vec<PositionKey> {
    let mut keys = vec![start.key()];
    let mut pos = start;
    for mv in moves {
        pos = pos.play(mv).expect("legal move");
        keys.push(pos.key());
    }
    keys
}

#[test]
fn test_transposition_gives_equal_keys() {
    let a = play_line(GamePosition::starting(), &["g1f3", "g8f6", "b1c3"]);
    let b = play_line(GamePosition::starting(), &["b1c3", "g8f6", "g1f3"]);
    assert_ne!(a.last_move(), b.last_move());
    assert_eq!(a.key(), b.key());
}

#[test]
fn test_knight_dance_returns_to_start_key() {
    let pos = play_line(GamePosition::starting(), &KNIGHT_DANCE);
    assert_eq!(pos.key(), GamePosition::starting().key());
}

#[test]
fn test_castling_rights_change_key() {
    let full = GamePosition::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let partial = GamePosition::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQk - 0 1");
    assert_eq!(full.board(), partial.board());
    assert_ne!(full.key(), partial.key());
}

#[test]
fn test_side_to_move_changes_key() {
    let white = GamePosition::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    let black = GamePosition::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1");
    assert_ne!(white.key(), black.key());
}

#[test]
fn test_third_repetition_fires_on_third_occurrence() {
    let start = GamePosition::starting();
    let start_key = start.key();

    // Closing the first cycle is only the second occurrence
    let mut moves: Vec<&str> = KNIGHT_DANCE.to_vec();
    let keys = keys_along(start, &moves);
    let history = &keys[..keys.len() - 1];
    assert!(!is_third_repetition(start_key, history));

    // Closing the second cycle is the third
    moves.extend_from_slice(&KNIGHT_DANCE);
    let keys = keys_along(start, &moves);
    let history = &keys[..keys.len() - 1];
    assert!(is_third_repetition(start_key, history));
}

#[test]
fn test_key_history_links_extend_without_copying() {
    let start = GamePosition::starting();
    let keys = keys_along(start, &KNIGHT_DANCE);
    let prior = &keys[..keys.len() - 1];

    let history = KeyHistory::new(prior);
    assert_eq!(history.len(), 4);
    assert!(!history.is_third_repetition(start.key()));

    let link = history.link(start.key());
    let extended = link.history();
    assert_eq!(extended.len(), 5);
    assert_eq!(extended.occurrences(start.key()), 2);
    assert!(extended.is_third_repetition(start.key()));

    // The borrowed prior keys are untouched
    assert_eq!(prior.len(), 4);
    assert_eq!(history.occurrences(start.key()), 1);
}
