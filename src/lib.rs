pub mod board;
pub mod engine;
pub mod tt;

pub use board::{choose_move, Color, GamePosition, Move, Piece, PositionKey, Square, Strategy};
pub use engine::{EngineController, SearchLimits, SearchRequest, SearchResponse};
pub use tt::TranspositionTable;
