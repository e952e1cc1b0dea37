//! Legal move generation.
//!
//! Moves are generated pseudo-legally per piece kind, then filtered by
//! applying each to a scratch board and rejecting those that leave the
//! mover's king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::state::Board;
use super::types::{Bitboard, CastlingRights, Color, Move, MoveList, Piece, Square};

/// Which moves a generation pass produces
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum GenMode {
    All,
    /// Captures only (including en passant and capture-promotions)
    Captures,
}

/// One generation pass over a position snapshot.
pub(crate) struct MoveGen<'a> {
    board: &'a Board,
    side: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    mode: GenMode,
}

impl<'a> MoveGen<'a> {
    pub(crate) fn new(
        board: &'a Board,
        side: Color,
        castling: CastlingRights,
        last_move: Option<Move>,
        mode: GenMode,
    ) -> Self {
        MoveGen {
            board,
            side,
            castling,
            en_passant: en_passant_target(board, side, last_move),
            mode,
        }
    }

    fn pseudo_legal(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.pawn_moves(&mut moves);
        self.knight_moves(&mut moves);
        self.slider_moves(Piece::Bishop, &mut moves);
        self.slider_moves(Piece::Rook, &mut moves);
        self.slider_moves(Piece::Queen, &mut moves);
        self.king_moves(&mut moves);
        moves
    }

    pub(crate) fn legal(&self) -> MoveList {
        let mut moves = self.pseudo_legal();
        let side = self.side;
        moves.retain(|mv| !self.board.apply_move(mv, side).is_in_check(side));
        moves
    }

    /// Push a move to `to`, as a capture if an enemy piece stands there.
    /// Targets are pre-masked to exclude own pieces.
    fn push_to(&self, moves: &mut MoveList, from: Square, to: Square, piece: Piece) {
        match self.board.piece_at(to) {
            Some((_, captured)) => moves.push(Move::capture(from, to, piece, captured)),
            None => moves.push(Move::new(from, to, piece)),
        }
    }

    /// Squares a non-pawn piece may land on in this pass
    fn target_mask(&self) -> Bitboard {
        match self.mode {
            GenMode::All => !self.board.occupied_by(self.side),
            GenMode::Captures => self.board.occupied_by(self.side.opponent()),
        }
    }
}

/// The square an en-passant capture by `side` would land on, if the last move
/// was an enemy two-square pawn advance.
pub(crate) fn en_passant_target(
    board: &Board,
    side: Color,
    last_move: Option<Move>,
) -> Option<Square> {
    let last = last_move?;
    if !last.is_double_pawn_push() {
        return None;
    }
    if board.piece_at(last.to()) != Some((side.opponent(), Piece::Pawn)) {
        return None;
    }
    let rank = (last.from().rank() + last.to().rank()) / 2;
    Some(Square::new(rank, last.to().file()))
}

/// All legal moves for `side` in the given snapshot.
///
/// Castling eligibility comes from `castling`; en passant from `last_move`.
/// The output carries no particular order.
#[must_use]
pub fn legal_moves(
    board: &Board,
    side: Color,
    castling: CastlingRights,
    last_move: Option<Move>,
) -> MoveList {
    MoveGen::new(board, side, castling, last_move, GenMode::All).legal()
}

/// Legal captures for `side`, including en passant and capture-promotions
#[must_use]
pub fn legal_captures(
    board: &Board,
    side: Color,
    castling: CastlingRights,
    last_move: Option<Move>,
) -> MoveList {
    MoveGen::new(board, side, castling, last_move, GenMode::Captures).legal()
}
