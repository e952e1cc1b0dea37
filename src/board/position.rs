use super::key::PositionKey;
use super::movegen::{self, en_passant_target};
use super::state::Board;
use super::types::{CastlingRights, Color, Move, MoveList, Piece, Square};

/// Everything a search needs to know about a game state.
///
/// En passant eligibility is not stored; it follows from `last_move`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GamePosition {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    last_move: Option<Move>,
}

impl GamePosition {
    #[must_use]
    pub const fn new(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        last_move: Option<Move>,
    ) -> Self {
        GamePosition {
            board,
            side_to_move,
            castling,
            last_move,
        }
    }

    /// The standard initial position, White to move
    #[must_use]
    pub fn starting() -> Self {
        GamePosition::new(Board::starting(), Color::White, CastlingRights::all(), None)
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Square the side to move could capture onto en passant, if any
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        en_passant_target(&self.board, self.side_to_move, self.last_move)
    }

    /// The position after the side to move plays `mv`.
    ///
    /// Castling rights only ever shrink: a king move drops both of the
    /// mover's rights, and any move from or onto a rook corner drops that
    /// corner's right.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Self {
        let mover = self.side_to_move;
        let mut castling = self.castling.touched(mv.from()).touched(mv.to());
        if mv.piece() == Piece::King {
            castling = castling.without_color(mover);
        }
        GamePosition {
            board: self.board.apply_move(mv, mover),
            side_to_move: mover.opponent(),
            castling,
            last_move: Some(mv),
        }
    }

    /// The position after the side to move passes (a null move).
    ///
    /// Clears the last move so no en passant capture survives the pass.
    #[must_use]
    pub fn pass(&self) -> Self {
        GamePosition {
            side_to_move: self.side_to_move.opponent(),
            last_move: None,
            ..*self
        }
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        movegen::legal_moves(&self.board, self.side_to_move, self.castling, self.last_move)
    }

    /// Legal captures only, including en passant and capture-promotions
    #[must_use]
    pub fn legal_captures(&self) -> MoveList {
        movegen::legal_captures(&self.board, self.side_to_move, self.castling, self.last_move)
    }

    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        !self.legal_moves().is_empty()
    }

    /// Returns true if the side to move is in check
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.side_to_move)
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_legal_move()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_legal_move()
    }

    #[must_use]
    pub fn key(&self) -> PositionKey {
        PositionKey::of(self)
    }

    /// Count leaf nodes of the legal move tree to `depth`
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves.iter().map(|mv| self.apply(mv).perft(depth - 1)).sum()
    }
}

impl Default for GamePosition {
    fn default() -> Self {
        GamePosition::starting()
    }
}
