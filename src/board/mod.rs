//! Chess board representation and game logic.
//!
//! Positions are immutable `Copy` values: applying a move yields a new
//! [`GamePosition`] and never touches the original. Supports full chess
//! rules including castling, en passant, and promotions (always to a queen).
//!
//! # Example
//! ```
//! use chess_ai::board::{choose_move, GamePosition, Strategy};
//!
//! let position = GamePosition::starting();
//! assert_eq!(position.legal_moves().len(), 20);
//!
//! let evaluator = Strategy::Standard.evaluator();
//! let mv = choose_move(&position, 2, None, &evaluator, &[]);
//! assert!(mv.is_some());
//! ```

mod attack_tables;
mod error;
mod eval;
mod eval_terms;
mod fen;
mod key;
mod movegen;
mod position;
pub mod prelude;
pub(crate) mod search;
mod state;
pub(crate) mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveParseError, SquareError, StrategyParseError};
pub use key::{is_third_repetition, KeyHistory, KeyLink, PositionKey};
pub use movegen::{legal_captures, legal_moves};
pub use position::GamePosition;
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece,
    ScoredMove, ScoredMoveList, Square,
};

// Public API - evaluation
pub use eval::{
    EvalProfile, Evaluator, MaterialEvaluator, Noisy, Strategy, TerminalAware, WeightedEvaluator,
    DEFAULT_NOISE_AMPLITUDE, DEFAULT_NOISE_SEED, TERMINAL_SCORE,
};

// Public API - search functions and configuration
pub use search::{
    choose_move, HistoryTable, KillerTable, SearchOutcome, SearchParams, SearchState, MATE_SCORE,
    MATE_THRESHOLD,
};
