use super::super::attack_tables::king_attacks;
use super::super::types::{Move, MoveList, Piece, Square};
use super::{GenMode, MoveGen};

impl MoveGen<'_> {
    pub(super) fn king_moves(&self, moves: &mut MoveList) {
        let Some(from) = self.board.king_square(self.side) else {
            return;
        };
        for to in (king_attacks(from) & self.target_mask()).iter() {
            self.push_to(moves, from, to, Piece::King);
        }

        if self.mode == GenMode::All {
            self.castling_moves(from, moves);
        }
    }

    fn castling_moves(&self, from: Square, moves: &mut MoveList) {
        let side = self.side;
        let rank = side.back_rank();
        if from != Square::new(rank, 4) {
            return;
        }
        let enemy = side.opponent();
        if self.board.is_square_attacked(from, enemy) {
            return;
        }

        for kingside in [true, false] {
            if !self.castling.has(side, kingside) {
                continue;
            }
            let (rook_file, empty_files, king_path): (usize, &[usize], [usize; 2]) = if kingside {
                (7, &[5, 6], [5, 6])
            } else {
                (0, &[1, 2, 3], [3, 2])
            };
            if self.board.piece_at(Square::new(rank, rook_file)) != Some((side, Piece::Rook)) {
                continue;
            }
            if !empty_files
                .iter()
                .all(|&f| self.board.is_empty(Square::new(rank, f)))
            {
                continue;
            }
            if king_path
                .iter()
                .any(|&f| self.board.is_square_attacked(Square::new(rank, f), enemy))
            {
                continue;
            }
            moves.push(Move::castle(from, Square::new(rank, king_path[1])));
        }
    }
}
