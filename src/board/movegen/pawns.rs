use super::super::attack_tables::pawn_attacks;
use super::super::types::{Move, MoveList, Piece, Square};
use super::{GenMode, MoveGen};

impl MoveGen<'_> {
    pub(super) fn pawn_moves(&self, moves: &mut MoveList) {
        let side = self.side;
        let enemies = self.board.occupied_by(side.opponent());

        for from in self.board.pieces(side, Piece::Pawn).iter() {
            if self.mode == GenMode::All {
                self.pawn_pushes(from, moves);
            }

            let attacks = pawn_attacks(side, from);
            for to in (attacks & enemies).iter() {
                if let Some((_, captured)) = self.board.piece_at(to) {
                    let mv = Move::capture(from, to, Piece::Pawn, captured);
                    moves.push(self.promote_if_last_rank(mv));
                }
            }

            if let Some(ep) = self.en_passant {
                if attacks.contains(ep) {
                    moves.push(Move::en_passant(from, ep));
                }
            }
        }
    }

    fn pawn_pushes(&self, from: Square, moves: &mut MoveList) {
        let side = self.side;
        let dir = side.pawn_direction();
        let Some(one) = from.offset(dir, 0) else {
            return;
        };
        if !self.board.is_empty(one) {
            return;
        }
        moves.push(self.promote_if_last_rank(Move::new(from, one, Piece::Pawn)));

        if from.rank() == side.pawn_start_rank() {
            if let Some(two) = one.offset(dir, 0) {
                if self.board.is_empty(two) {
                    moves.push(Move::new(from, two, Piece::Pawn));
                }
            }
        }
    }

    /// Promotion always resolves to a queen.
    fn promote_if_last_rank(&self, mv: Move) -> Move {
        if mv.to().rank() == self.side.pawn_promotion_rank() {
            mv.with_promotion(Piece::Queen)
        } else {
            mv
        }
    }
}
