use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::position::GamePosition;
use super::state::Board;
use super::types::{Bitboard, CastlingRights, Color, Move, Piece, Square};

impl GamePosition {
    /// Parse a position from FEN notation.
    ///
    /// Castling and en passant fields may be omitted; the halfmove and
    /// fullmove counters are accepted and ignored. An en passant square is
    /// turned into the double pawn push that made it available.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = parse_placement(parts[0])?;

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling = CastlingRights::none();
        for c in parts.get(2).copied().unwrap_or("-").chars() {
            castling = match c {
                'K' => castling.with(Color::White, true),
                'Q' => castling.with(Color::White, false),
                'k' => castling.with(Color::Black, true),
                'q' => castling.with(Color::Black, false),
                '-' => castling,
                _ => return Err(FenError::InvalidCastling { char: c }),
            };
        }

        let last_move = match parts.get(3).copied().unwrap_or("-") {
            "-" => None,
            field => Some(synthesize_double_push(&board, side, field)?),
        };

        Ok(GamePosition::new(board, side, castling, last_move))
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match Self::try_from_fen(fen) {
            Ok(position) => position,
            Err(e) => panic!("invalid FEN '{fen}': {e}"),
        }
    }

    /// Convert the position to FEN notation (counters are always `0 1`).
    #[must_use]
    pub fn to_fen(&self) -> String {
        let board = self.board();
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = board.piece_at(Square::new(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move() {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} 0 1",
            rows.join("/"),
            active,
            self.castling_rights(),
            ep
        )
    }

    /// Parse a move in coordinate notation (e.g. "e2e4", "e7e8q") and
    /// resolve it against the legal moves of this position.
    ///
    /// # Example
    /// ```
    /// use chess_ai::board::GamePosition;
    ///
    /// let position = GamePosition::starting();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        if !(4..=5).contains(&notation.len()) || !notation.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: notation.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match notation[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece) if !matches!(piece, Piece::Pawn | Piece::King) => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.legal_moves()
            .iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Parse a coordinate move and return the position after it.
    pub fn play(&self, notation: &str) -> Result<Self, MoveParseError> {
        let mv = self.parse_move(notation)?;
        Ok(self.apply(mv))
    }
}

impl FromStr for GamePosition {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GamePosition::try_from_fen(s)
    }
}

fn parse_placement(field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - row;
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if file >= 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank + 1,
                    files: file + 1,
                });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            board = board.with_piece(Square::new(rank, file), color, piece);
            file += 1;
        }
        if file > 8 {
            return Err(FenError::TooManyFiles {
                rank: rank + 1,
                files: file,
            });
        }
        if file < 8 {
            return Err(FenError::TooFewFiles {
                rank: rank + 1,
                files: file,
            });
        }
    }

    let pieces = board.occupied().popcount();
    if pieces > 32 {
        return Err(FenError::TooManyPieces { found: pieces });
    }

    let back_ranks = Bitboard::rank_mask(0) | Bitboard::rank_mask(7);
    let pawns = board.pieces(Color::White, Piece::Pawn) | board.pieces(Color::Black, Piece::Pawn);
    if let Some(square) = (pawns & back_ranks).first() {
        return Err(FenError::PawnOnBackRank { square });
    }

    for color in Color::BOTH {
        let kings = board.pieces(color, Piece::King).popcount();
        if kings != 1 {
            return Err(FenError::KingCount {
                color: if color == Color::White { "White" } else { "Black" },
                found: kings,
            });
        }
    }

    Ok(board)
}

/// The double pawn push by the opponent of `side` that leaves `field` as the
/// en passant square.
fn synthesize_double_push(board: &Board, side: Color, field: &str) -> Result<Move, FenError> {
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let target: Square = field.parse().map_err(|_| invalid())?;
    let pusher = side.opponent();
    let dir = pusher.pawn_direction();

    if target.rank() != pusher.relative_rank(2) {
        return Err(invalid());
    }
    let to = target.offset(dir, 0).ok_or_else(invalid)?;
    let from = target.offset(-dir, 0).ok_or_else(invalid)?;
    if board.piece_at(to) != Some((pusher, Piece::Pawn))
        || !board.is_empty(target)
        || !board.is_empty(from)
    {
        return Err(invalid());
    }
    Ok(Move::new(from, to, Piece::Pawn))
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_fen_round_trip() {
        let position = GamePosition::try_from_fen(START_FEN).unwrap();
        assert_eq!(position, GamePosition::starting());
        assert_eq!(position.to_fen(), START_FEN);
    }

    #[test]
    fn test_fen_en_passant_becomes_last_move() {
        let fen = "rnbqkbnr/pppp1ppp/8/8/3Pp3/8/PPP1PPPP/RNBQKBNR b KQkq d3 0 2";
        let position = GamePosition::try_from_fen(fen).unwrap();
        let last = position.last_move().unwrap();
        assert_eq!(last.to_string(), "d2d4");
        assert_eq!(position.en_passant_target(), "d3".parse().ok());
        assert_eq!(position.to_fen(), "rnbqkbnr/pppp1ppp/8/8/3Pp3/8/PPP1PPPP/RNBQKBNR b KQkq d3 0 1");
    }

    #[test]
    fn test_fen_minimal_fields() {
        let position = GamePosition::try_from_fen("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert_eq!(position.side_to_move(), Color::Black);
        assert!(position.castling_rights().is_empty());
        assert!(position.last_move().is_none());
    }

    #[test]
    fn test_fen_errors() {
        assert!(matches!(
            GamePosition::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(FenError::TooFewParts { .. })
        ));
        assert!(matches!(
            GamePosition::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiece { char: 'x' })
        ));
        assert!(matches!(
            GamePosition::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert!(matches!(
            GamePosition::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1"),
            Err(FenError::InvalidCastling { char: 'x' })
        ));
        assert!(matches!(
            GamePosition::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e3 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            GamePosition::try_from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::KingCount { found: 0, .. })
        ));
        assert!(matches!(
            GamePosition::try_from_fen("4k3/8/8/8/8/8/8/4K3/8 w - - 0 1"),
            Err(FenError::WrongRankCount { found: 9 })
        ));
        assert!(matches!(
            GamePosition::try_from_fen("4k3/8/8/8/8/8/8/4K2 w - - 0 1"),
            Err(FenError::TooFewFiles { .. })
        ));
    }

    #[test]
    fn test_fen_rejects_impossible_material() {
        let crowded = "rnbqkbnr/pppppppp/pppppppp/8/8/PPPPPPPP/PPPPPPPP/RNBQKBNR w - - 0 1";
        assert_eq!(
            GamePosition::try_from_fen(crowded),
            Err(FenError::TooManyPieces { found: 48 })
        );
        // One extra pawn past 32 is already too many
        let one_over = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert!(GamePosition::try_from_fen(start).is_ok());
        assert_eq!(
            GamePosition::try_from_fen(one_over),
            Err(FenError::TooManyPieces { found: 33 })
        );

        assert_eq!(
            GamePosition::try_from_fen("4k3/8/8/8/8/8/8/P3K3 w - - 0 1"),
            Err(FenError::PawnOnBackRank { square: Square::A1 })
        );
        assert!(matches!(
            GamePosition::try_from_fen("4k2p/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::PawnOnBackRank { .. })
        ));
    }

    #[test]
    fn test_parse_move() {
        let position = GamePosition::starting();
        let mv = position.parse_move("g1f3").unwrap();
        assert_eq!(mv.piece(), Piece::Knight);
        assert!(matches!(
            position.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        assert!(matches!(
            position.parse_move("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            position.parse_move("z2e4"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            position.parse_move("e2e4k"),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        ));
    }

    #[test]
    fn test_parse_promotion_is_queen_only() {
        let position = GamePosition::from_fen("8/P3k3/8/8/8/8/8/4K3 w - - 0 1");
        assert!(position.parse_move("a7a8q").is_ok());
        assert!(matches!(
            position.parse_move("a7a8n"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }
}
