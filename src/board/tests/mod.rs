//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts for move generation correctness
//! - `special_moves.rs` - Castling, en passant and promotion rules
//! - `repetition.rs` - Position keys and threefold repetition
//! - `eval.rs` - Evaluator and strategy behavior
//! - `search.rs` - Search results on small tactical positions
//! - `proptest.rs` - Property-based tests

mod eval;
mod repetition;

use crate::board::GamePosition;

/// Play a sequence of coordinate moves from `position`
pub(super) fn play_line(position: GamePosition, moves: &[&str]) -> GamePosition {
    moves.iter().fold(position, |pos, mv| {
        pos.play(mv)
            .unwrap_or_else(|e| panic!("move {mv} should be legal: {e}"))
    })
}
