use super::attack_tables::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use super::types::{Bitboard, Color, Move, Piece, Square};

/// Piece placement as per-color, per-kind bitboards.
///
/// `Board` is a value: every change produces a new snapshot and leaves the
/// original untouched, so search recursion never shares a mutable board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    pieces: [[Bitboard; 6]; 2],
    occupied: [Bitboard; 2],
    all_occupied: Bitboard,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
        }
    }

    /// The standard initial arrangement
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            board = board
                .with_piece(Square::new(0, file), Color::White, piece)
                .with_piece(Square::new(1, file), Color::White, Piece::Pawn)
                .with_piece(Square::new(6, file), Color::Black, Piece::Pawn)
                .with_piece(Square::new(7, file), Color::Black, piece);
        }
        board
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !self.all_occupied.contains(sq) {
            return None;
        }
        let color = if self.occupied[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        Piece::ALL
            .into_iter()
            .find(|p| self.pieces[color.index()][p.index()].contains(sq))
            .map(|p| (color, p))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    /// Bitboard of `color`'s pieces of kind `piece`
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.all_occupied
    }

    /// Returns a copy with `(color, piece)` on `sq`, replacing whatever stood there
    #[must_use]
    pub fn with_piece(&self, sq: Square, color: Color, piece: Piece) -> Self {
        let mut next = self.without_piece(sq);
        let c = color.index();
        next.pieces[c][piece.index()] = next.pieces[c][piece.index()].with(sq);
        next.occupied[c] = next.occupied[c].with(sq);
        next.all_occupied = next.all_occupied.with(sq);
        next
    }

    /// Returns a copy with `sq` emptied
    #[must_use]
    pub fn without_piece(&self, sq: Square) -> Self {
        let mut next = *self;
        if !self.all_occupied.contains(sq) {
            return next;
        }
        for c in 0..2 {
            for bb in &mut next.pieces[c] {
                *bb = bb.without(sq);
            }
            next.occupied[c] = next.occupied[c].without(sq);
        }
        next.all_occupied = next.all_occupied.without(sq);
        next
    }

    /// Returns the board after `color` plays `mv`.
    ///
    /// The move is trusted to come from the move generator; no legality check
    /// happens here.
    #[must_use]
    pub fn apply_move(&self, mv: Move, color: Color) -> Self {
        let mut next = *self;
        if mv.is_capture() {
            next = next.without_piece(mv.capture_square());
        }
        let placed = mv.promotion().unwrap_or(mv.piece());
        next = next.without_piece(mv.from()).with_piece(mv.to(), color, placed);
        if mv.is_castling() {
            let (rook_from, rook_to) = mv.castling_rook_squares();
            next = next
                .without_piece(rook_from)
                .with_piece(rook_to, color, Piece::Rook);
        }
        next
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, Piece::King).first()
    }

    /// Returns true if any piece of `attacker` attacks `sq`
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, attacker: Color) -> bool {
        // A pawn of `attacker` hits `sq` exactly when a defender pawn on `sq` would hit it back.
        if !(pawn_attacks(attacker.opponent(), sq) & self.pieces(attacker, Piece::Pawn)).is_empty()
        {
            return true;
        }
        if !(knight_attacks(sq) & self.pieces(attacker, Piece::Knight)).is_empty() {
            return true;
        }
        if !(king_attacks(sq) & self.pieces(attacker, Piece::King)).is_empty() {
            return true;
        }
        let queens = self.pieces(attacker, Piece::Queen);
        let diagonal = self.pieces(attacker, Piece::Bishop) | queens;
        if !(bishop_attacks(sq, self.all_occupied) & diagonal).is_empty() {
            return true;
        }
        let straight = self.pieces(attacker, Piece::Rook) | queens;
        !(rook_attacks(sq, self.all_occupied) & straight).is_empty()
    }

    /// Returns true if `color`'s king is attacked. A board without that king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|k| self.is_square_attacked(k, color.opponent()))
    }

    /// Sum of standard piece values for `color`
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        Piece::ALL
            .iter()
            .map(|&p| self.pieces(color, p).popcount() as i32 * p.value())
            .sum()
    }

    /// Material of `color` minus material of the opponent
    #[must_use]
    pub fn material_balance(&self, color: Color) -> i32 {
        self.material(color) - self.material(color.opponent())
    }

    /// Returns true if `color` has a knight, bishop, rook or queen
    #[must_use]
    pub fn has_non_pawn_material(&self, color: Color) -> bool {
        [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
            .iter()
            .any(|&p| !self.pieces(color, p).is_empty())
    }

    /// Iterate over every placed piece, lowest square first per color and kind
    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Color::BOTH.into_iter().flat_map(move |color| {
            Piece::ALL.into_iter().flat_map(move |piece| {
                self.pieces(color, piece)
                    .iter()
                    .map(move |sq| (sq, color, piece))
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}
