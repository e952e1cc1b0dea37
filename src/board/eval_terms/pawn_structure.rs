//! Pawn structure evaluation.
//!
//! Penalizes doubled and isolated pawns.

use crate::board::state::Board;
use crate::board::types::{Bitboard, Color, Piece};

use super::tables::{DOUBLED_PAWN_EG, DOUBLED_PAWN_MG, ISOLATED_PAWN_EG, ISOLATED_PAWN_MG};

impl Board {
    /// Evaluate pawn structure.
    /// Returns `(middlegame_score, endgame_score)` from white's perspective.
    #[must_use]
    pub(crate) fn eval_pawn_structure(&self) -> (i32, i32) {
        let mut mg = 0;
        let mut eg = 0;

        for color in Color::BOTH {
            let sign = color.sign();
            let own_pawns = self.pieces(color, Piece::Pawn);

            for file in 0..8 {
                let on_file = (own_pawns & Bitboard::file_mask(file)).popcount() as i32;
                if on_file == 0 {
                    continue;
                }

                // Every pawn beyond the first on a file counts as doubled
                let extra = on_file - 1;
                mg += sign * extra * DOUBLED_PAWN_MG;
                eg += sign * extra * DOUBLED_PAWN_EG;

                if (own_pawns & Bitboard::adjacent_files(file)).is_empty() {
                    mg += sign * on_file * ISOLATED_PAWN_MG;
                    eg += sign * on_file * ISOLATED_PAWN_EG;
                }
            }
        }

        (mg, eg)
    }
}
