use super::super::attack_tables::{bishop_attacks, rook_attacks};
use super::super::types::{Bitboard, MoveList, Piece, Square};
use super::MoveGen;

impl MoveGen<'_> {
    pub(super) fn slider_moves(&self, piece: Piece, moves: &mut MoveList) {
        debug_assert!(piece.attacks_diagonally() || piece.attacks_straight());
        let targets = self.target_mask();
        let occupancy = self.board.occupied();
        for from in self.board.pieces(self.side, piece).iter() {
            for to in (slider_reach(piece, from, occupancy) & targets).iter() {
                self.push_to(moves, from, to, piece);
            }
        }
    }
}

/// Squares reachable along the piece's rays, up to and including the first blocker
fn slider_reach(piece: Piece, from: Square, occupancy: Bitboard) -> Bitboard {
    let mut reach = Bitboard::EMPTY;
    if piece.attacks_diagonally() {
        reach |= bishop_attacks(from, occupancy);
    }
    if piece.attacks_straight() {
        reach |= rook_attacks(from, occupancy);
    }
    reach
}
