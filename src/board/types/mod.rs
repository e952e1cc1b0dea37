//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - compact board square representation (u8 index)
//! - `Bitboard` - 64-bit occupancy sets
//! - `Move` and `MoveList` - move records
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter, ScoredMove, ScoredMoveList};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use moves::MAX_PLY;
