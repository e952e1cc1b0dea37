use crate::board::state::Board;
use crate::board::types::{Color, Piece};

use super::tables::{MAX_PHASE, PST_EG, PST_MG};

impl Board {
    /// Piece-square score, `(middlegame, endgame)` from White's perspective.
    #[must_use]
    pub(crate) fn eval_psqt(&self) -> (i32, i32) {
        let mut mg = 0;
        let mut eg = 0;
        for (sq, color, piece) in self.iter_pieces() {
            let idx = match color {
                Color::White => sq.index(),
                Color::Black => sq.flip_vertical().index(),
            };
            mg += color.sign() * PST_MG[piece.index()][idx];
            eg += color.sign() * PST_EG[piece.index()][idx];
        }
        (mg, eg)
    }

    /// Game phase from remaining non-pawn material, `MAX_PHASE` at the start
    /// down to 0 with only kings and pawns left.
    #[must_use]
    pub(crate) fn game_phase(&self) -> i32 {
        let phase: i32 = Color::BOTH
            .iter()
            .flat_map(|&c| Piece::ALL.iter().map(move |&p| (c, p)))
            .map(|(c, p)| self.pieces(c, p).popcount() as i32 * p.phase_weight())
            .sum();
        phase.min(MAX_PHASE)
    }
}
