//! Exact position keys and repetition history.
//!
//! A [`PositionKey`] encodes placement, side to move and castling rights
//! without loss, so two positions share a key exactly when they are the same
//! position. The transposition table relies on that and never double-checks
//! an entry against the board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::position::GamePosition;
use super::state::Board;
use super::types::{CastlingRights, Color};

/// Canonical key of (placement, side to move, castling rights).
///
/// Layout: the occupancy mask, then one 4-bit code per occupied square in
/// ascending square order (`color * 8 + kind`), then side and castling bits.
/// A legal position has at most 32 pieces, which exactly fills the codes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionKey {
    occupancy: u64,
    pieces: u128,
    meta: u8,
}

impl PositionKey {
    #[must_use]
    pub fn new(board: &Board, side: Color, castling: CastlingRights) -> Self {
        let occupancy = board.occupied();
        debug_assert!(occupancy.popcount() <= 32, "more than 32 pieces on the board");

        let mut pieces = 0u128;
        for (slot, sq) in occupancy.iter().take(32).enumerate() {
            if let Some((color, piece)) = board.piece_at(sq) {
                let code = (color.index() * 8 + piece.index()) as u128;
                pieces |= code << (slot * 4);
            }
        }

        PositionKey {
            occupancy: occupancy.0,
            pieces,
            meta: side.index() as u8 | (castling.as_u8() << 1),
        }
    }

    #[must_use]
    pub fn of(position: &GamePosition) -> Self {
        PositionKey::new(
            position.board(),
            position.side_to_move(),
            position.castling_rights(),
        )
    }
}

/// Returns true if `candidate` already occurs twice in `history`, so reaching
/// it again would make the third occurrence.
#[must_use]
pub fn is_third_repetition(candidate: PositionKey, history: &[PositionKey]) -> bool {
    history.iter().filter(|&&k| k == candidate).count() >= 2
}

/// Key history threaded by value through a search.
///
/// The host's keys are borrowed; keys added along the current line live in
/// stack-allocated [`KeyLink`]s, so extending a history never touches the
/// caller's copy.
#[derive(Clone, Copy, Debug)]
pub struct KeyHistory<'a> {
    prior: &'a [PositionKey],
    line: Option<&'a KeyLink<'a>>,
}

/// One key appended to a [`KeyHistory`]
#[derive(Debug)]
pub struct KeyLink<'a> {
    key: PositionKey,
    parent: KeyHistory<'a>,
}

impl<'a> KeyHistory<'a> {
    #[must_use]
    pub fn new(prior: &'a [PositionKey]) -> Self {
        KeyHistory { prior, line: None }
    }

    /// Extend this history by `key`; call [`KeyLink::history`] on the result
    #[must_use]
    pub fn link(self, key: PositionKey) -> KeyLink<'a> {
        KeyLink { key, parent: self }
    }

    /// Number of times `key` appears
    #[must_use]
    pub fn occurrences(&self, key: PositionKey) -> usize {
        let mut count = self.prior.iter().filter(|&&k| k == key).count();
        let mut cur = self.line;
        while let Some(link) = cur {
            if link.key == key {
                count += 1;
            }
            cur = link.parent.line;
        }
        count
    }

    #[must_use]
    pub fn is_third_repetition(&self, candidate: PositionKey) -> bool {
        self.occurrences(candidate) >= 2
    }

    #[must_use]
    pub fn len(&self) -> usize {
        let mut len = self.prior.len();
        let mut cur = self.line;
        while let Some(link) = cur {
            len += 1;
            cur = link.parent.line;
        }
        len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyLink<'_> {
    /// The parent history with this link's key appended
    #[must_use]
    pub fn history(&self) -> KeyHistory<'_> {
        KeyHistory {
            prior: self.parent.prior,
            line: Some(self),
        }
    }
}
