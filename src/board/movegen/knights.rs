use super::super::attack_tables::knight_attacks;
use super::super::types::{MoveList, Piece};
use super::MoveGen;

impl MoveGen<'_> {
    pub(super) fn knight_moves(&self, moves: &mut MoveList) {
        let targets = self.target_mask();
        for from in self.board.pieces(self.side, Piece::Knight).iter() {
            for to in (knight_attacks(from) & targets).iter() {
                self.push_to(moves, from, to, Piece::Knight);
            }
        }
    }
}
