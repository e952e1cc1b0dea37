//! Positional evaluation terms.
//!
//! Each term returns `(middlegame, endgame)` scores from White's point of
//! view; the weighted evaluator blends them by game phase.
//! - Piece-square tables and the phase estimate
//! - Pawn structure (doubled, isolated)
//! - Passed pawns
//! - King safety (shelter in the middlegame, centralization in the endgame)

mod king_safety;
mod passed_pawns;
mod pawn_structure;
mod psqt;
pub(crate) mod tables;

use crate::board::types::{Bitboard, Color, Square};

/// Squares strictly ahead of `sq` from `color`'s side, on its own file and
/// both adjacent files.
pub(crate) fn front_span(color: Color, sq: Square) -> Bitboard {
    let files = Bitboard::file_mask(sq.file()) | Bitboard::adjacent_files(sq.file());
    let ahead = match color {
        Color::White if sq.rank() < 7 => Bitboard(u64::MAX << ((sq.rank() + 1) * 8)),
        Color::Black if sq.rank() > 0 => Bitboard(u64::MAX >> ((8 - sq.rank()) * 8)),
        _ => Bitboard::EMPTY,
    };
    files & ahead
}
