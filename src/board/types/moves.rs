//! Move record and move lists.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// A move as a plain value record.
///
/// Carries the moving piece and the captured piece so that ordering and
/// evaluation never need to look back at the board the move came from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    promotion: Option<Piece>,
    castling: bool,
    en_passant: bool,
}

impl Move {
    /// Create a plain move of `piece` from `from` to `to`
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
            promotion: None,
            castling: false,
            en_passant: false,
        }
    }

    /// Create a capture of `captured` standing on `to`
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square, piece: Piece, captured: Piece) -> Self {
        Move {
            captured: Some(captured),
            ..Move::new(from, to, piece)
        }
    }

    /// Create an en passant capture; `to` is the empty square the pawn lands on
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            captured: Some(Piece::Pawn),
            en_passant: true,
            ..Move::new(from, to, Piece::Pawn)
        }
    }

    /// Create a castling move, expressed as the king's two-square step
    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square) -> Self {
        Move {
            castling: true,
            ..Move::new(from, to, Piece::King)
        }
    }

    /// Returns a copy promoting to `piece`
    #[inline]
    #[must_use]
    pub const fn with_promotion(self, piece: Piece) -> Self {
        Move {
            promotion: Some(piece),
            ..self
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece being moved
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// The piece removed from the board by this move, if any
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.en_passant
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.castling
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        self.castling && self.to.file() > self.from.file()
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Returns true if this move is a two-square pawn advance
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.piece, Piece::Pawn) && self.from.rank().abs_diff(self.to.rank()) == 2
    }

    /// Returns true if this move neither captures nor promotes
    #[inline]
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        !self.is_capture() && !self.is_promotion()
    }

    /// Square of the piece this move removes; differs from `to` only for en passant
    #[inline]
    #[must_use]
    pub const fn capture_square(self) -> Square {
        if self.en_passant {
            Square::new(self.from.rank(), self.to.file())
        } else {
            self.to
        }
    }

    /// Rook source and destination squares for a castling move
    #[must_use]
    pub const fn castling_rook_squares(self) -> (Square, Square) {
        let rank = self.from.rank();
        if self.is_castle_kingside() {
            (Square::new(rank, 7), Square::new(rank, 5))
        } else {
            (Square::new(rank, 0), Square::new(rank, 3))
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {}{}", self.piece.to_char(), self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured.to_char())?;
        }
        if self.castling {
            write!(f, " castle")?;
        }
        if self.en_passant {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    /// Coordinate notation, e.g. `e2e4` or `e7e8q`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const MAX_PLY: usize = 128;

/// List of moves with a fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Option<Move>; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [None; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES);
        self.moves[self.len] = Some(mv);
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves[..self.len].iter().flatten().copied()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            self.moves[idx]
        } else {
            None
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.iter().any(|m| m == mv)
    }

    /// Keep only the moves matching `keep`
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            if let Some(mv) = self.moves[read] {
                if keep(mv) {
                    self.moves[write] = Some(mv);
                    write += 1;
                }
            }
        }
        for slot in &mut self.moves[write..self.len] {
            *slot = None;
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        self.moves[idx]
            .as_ref()
            .unwrap_or_else(|| unreachable!("slots below len are always filled"))
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        let mv = self.list.get(self.idx)?;
        self.idx += 1;
        Some(mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

/// A scored move for move ordering.
#[derive(Clone, Copy, Debug)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Scored moves awaiting ordering.
#[derive(Clone, Debug, Default)]
pub struct ScoredMoveList {
    moves: Vec<ScoredMove>,
}

impl ScoredMoveList {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ScoredMoveList {
            moves: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move, score: i32) {
        self.moves.push(ScoredMove { mv, score });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Sort by score, highest first. Stable, so equal scores keep generation order.
    pub fn sort_by_score_desc(&mut self) {
        self.moves.sort_by(|a, b| b.score.cmp(&a.score));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredMove> {
        self.moves.iter()
    }
}
