//! King safety evaluation.
//!
//! In the middlegame the king wants a pawn shield and no open files beside
//! it; in the endgame it wants the centre.

use crate::board::state::Board;
use crate::board::types::{Bitboard, Color, Piece, Square};

use super::tables::{
    KING_CENTRALIZATION_EG, KING_OPEN_FILE_MG, KING_SEMI_OPEN_FILE_MG, KING_SHIELD_CLOSE_MG,
    KING_SHIELD_FAR_MG,
};

/// Shield squares counted per file; three files times the close bonus
const FULL_SHIELD_MG: i32 = 3 * KING_SHIELD_CLOSE_MG;

impl Board {
    /// Evaluate king safety.
    /// Returns `(middlegame_score, endgame_score)` from white's perspective.
    ///
    /// The middlegame score is zero for an intact three-pawn shield and
    /// negative as it erodes.
    #[must_use]
    pub(crate) fn eval_king_safety(&self) -> (i32, i32) {
        let mut mg = 0;
        let mut eg = 0;

        for color in Color::BOTH {
            let Some(king) = self.king_square(color) else {
                continue;
            };
            mg += color.sign() * (self.king_shelter(color, king) - FULL_SHIELD_MG);
            eg += color.sign() * KING_CENTRALIZATION_EG * (6 - center_distance(king));
        }

        (mg, eg)
    }

    fn king_shelter(&self, color: Color, king: Square) -> i32 {
        let own_pawns = self.pieces(color, Piece::Pawn);
        let all_pawns = own_pawns | self.pieces(color.opponent(), Piece::Pawn);
        let dir = color.pawn_direction();

        let first = king.file().saturating_sub(1);
        let last = (king.file() + 1).min(7);
        let mut score = 0;
        for file in first..=last {
            let file_mask = Bitboard::file_mask(file);
            if (all_pawns & file_mask).is_empty() {
                score += KING_OPEN_FILE_MG;
                continue;
            }
            if (own_pawns & file_mask).is_empty() {
                score += KING_SEMI_OPEN_FILE_MG;
                continue;
            }
            let df = file as isize - king.file() as isize;
            if king
                .offset(dir, df)
                .is_some_and(|sq| own_pawns.contains(sq))
            {
                score += KING_SHIELD_CLOSE_MG;
            } else if king
                .offset(2 * dir, df)
                .is_some_and(|sq| own_pawns.contains(sq))
            {
                score += KING_SHIELD_FAR_MG;
            }
        }
        // Edge files have one neighbour fewer; count the missing one as shielded.
        if first == last - 1 {
            score += KING_SHIELD_CLOSE_MG;
        }
        score
    }
}

/// Manhattan distance from `sq` to the nearest of the four centre squares (0..=6)
fn center_distance(sq: Square) -> i32 {
    let file_dist = if sq.file() < 4 { 3 - sq.file() } else { sq.file() - 4 };
    let rank_dist = if sq.rank() < 4 { 3 - sq.rank() } else { sq.rank() - 4 };
    (file_dist + rank_dist) as i32
}
