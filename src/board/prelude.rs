//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_ai::board::prelude::*;
//!
//! let position = GamePosition::starting();
//! assert_eq!(position.side_to_move(), Color::White);
//! ```

pub use super::{
    choose_move, Board, CastlingRights, Color, Evaluator, FenError, GamePosition, Move, MoveList,
    MoveParseError, Piece, PositionKey, SearchParams, SearchState, Square, Strategy,
};
