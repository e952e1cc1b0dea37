//! Search constants.
//!
//! Score scale and move-ordering priorities used by the alpha-beta search.

use crate::board::types::MAX_PLY;

// ============================================================================
// SCORES
// ============================================================================

/// Score of delivering mate at the root; mate at ply `p` scores `MATE_SCORE - p`
pub const MATE_SCORE: i32 = 100_000;

/// Scores with absolute value >= this are considered checkmate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_PLY as i32;

/// Search window bound, beyond any reachable score
pub const INFINITY: i32 = 1_000_000;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores = tried earlier. Ordered: TT > captures > promotions > killers > history

/// Hash move (from transposition table) - highest priority
pub const TT_MOVE_SCORE: i32 = 1_000_000;

/// Base for captures; MVV-LVA is added on top
pub const CAPTURE_BASE_SCORE: i32 = 100_000;

/// Quiet promotion
pub const PROMOTION_SCORE: i32 = 90_000;

/// First killer move (quiet that caused beta cutoff at same ply)
pub const KILLER1_SCORE: i32 = 80_000;

/// Second killer move
pub const KILLER2_SCORE: i32 = 79_000;

/// History scores saturate here so they never reach the killer band
pub const HISTORY_MAX: i32 = 50_000;

// ============================================================================
// REDUCTIONS
// ============================================================================

/// Move index and depth from which LMR reduces by two plies instead of one
pub const LMR_DEEP_MOVE_INDEX: usize = 8;
pub const LMR_DEEP_MIN_DEPTH: u32 = 6;
