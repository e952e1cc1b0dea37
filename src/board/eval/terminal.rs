use crate::board::position::GamePosition;
use crate::board::types::Color;

use super::Evaluator;

/// Score of a mated side, far outside any material sum
pub const TERMINAL_SCORE: i32 = 100_000;

/// Recognizes finished games before delegating to `inner`.
///
/// Checkmate scores ±[`TERMINAL_SCORE`] and stalemate scores 0, so the
/// search sees game-ending positions even at its horizon.
#[derive(Debug, Clone, Default)]
pub struct TerminalAware<E> {
    inner: E,
}

impl<E: Evaluator> TerminalAware<E> {
    pub fn new(inner: E) -> Self {
        TerminalAware { inner }
    }
}

impl<E: Evaluator> Evaluator for TerminalAware<E> {
    fn evaluate(&self, position: &GamePosition, perspective: Color) -> i32 {
        if position.has_legal_move() {
            return self.inner.evaluate(position, perspective);
        }
        if !position.is_in_check() {
            return 0;
        }
        if position.side_to_move() == perspective {
            -TERMINAL_SCORE
        } else {
            TERMINAL_SCORE
        }
    }
}
