//! Passed pawn evaluation.

use crate::board::state::Board;
use crate::board::types::{Color, Piece};

use super::front_span;
use super::tables::{PASSED_PAWN_EG, PASSED_PAWN_MG};

impl Board {
    /// Bonus for pawns with no enemy pawn ahead on their own or adjacent
    /// files, growing as the pawn advances.
    /// Returns `(middlegame_score, endgame_score)` from white's perspective.
    #[must_use]
    pub(crate) fn eval_passed_pawns(&self) -> (i32, i32) {
        let mut mg = 0;
        let mut eg = 0;

        for color in Color::BOTH {
            let enemy_pawns = self.pieces(color.opponent(), Piece::Pawn);
            for sq in self.pieces(color, Piece::Pawn).iter() {
                if !(front_span(color, sq) & enemy_pawns).is_empty() {
                    continue;
                }
                let rel_rank = color.relative_rank(sq.rank());
                mg += color.sign() * PASSED_PAWN_MG[rel_rank];
                eg += color.sign() * PASSED_PAWN_EG[rel_rank];
            }
        }

        (mg, eg)
    }
}
