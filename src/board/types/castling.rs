//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask of four independent flags.
///
/// During play a flag only ever goes from held to lost; nothing in the
/// move-application path sets a flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is held
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Returns a copy with the given right added (used only when building positions)
    #[inline]
    #[must_use]
    pub const fn with(self, color: Color, kingside: bool) -> Self {
        CastlingRights(self.0 | Self::bit_for(color, kingside))
    }

    /// Returns a copy with the given right removed
    #[inline]
    #[must_use]
    pub const fn without(self, color: Color, kingside: bool) -> Self {
        CastlingRights(self.0 & !Self::bit_for(color, kingside))
    }

    /// Returns a copy with both rights of `color` removed
    #[inline]
    #[must_use]
    pub const fn without_color(self, color: Color) -> Self {
        self.without(color, true).without(color, false)
    }

    /// Rights lost when a piece leaves or arrives on `sq`.
    ///
    /// Touching a rook's home corner revokes that rook's right; this covers
    /// both the rook moving away and the rook being captured there.
    #[inline]
    #[must_use]
    pub fn touched(self, sq: Square) -> Self {
        match sq {
            Square::H1 => self.without(Color::White, true),
            Square::A1 => self.without(Color::White, false),
            Square::H8 => self.without(Color::Black, true),
            Square::A8 => self.without(Color::Black, false),
            _ => self,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value (upper bits are ignored)
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

impl fmt::Display for CastlingRights {
    /// FEN castling field (`KQkq`, `-` when empty)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.has(color, kingside) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
