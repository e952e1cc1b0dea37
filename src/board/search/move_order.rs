//! Move ordering utilities for search.

use super::super::types::{Move, MoveList, Piece, ScoredMoveList};
use super::constants::{
    CAPTURE_BASE_SCORE, HISTORY_MAX, KILLER1_SCORE, KILLER2_SCORE, PROMOTION_SCORE, TT_MOVE_SCORE,
};
use super::{HistoryTable, KillerTable};

/// Piece value used only for ordering; the king ranks above everything.
pub(crate) fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::King => 1000,
        other => other.value(),
    }
}

/// Most valuable victim, least valuable attacker
pub(crate) fn mvv_lva_score(mv: Move) -> i32 {
    match mv.captured() {
        Some(victim) => CAPTURE_BASE_SCORE + piece_value(victim) * 10 - piece_value(mv.piece()),
        None => 0,
    }
}

/// Order moves: TT move, captures (MVV-LVA), promotions, killers, then history.
///
/// The sort is stable so equally scored moves keep generation order.
pub(crate) fn order_moves(
    moves: &MoveList,
    tt_move: Option<Move>,
    killers: &KillerTable,
    history: &HistoryTable,
    ply: usize,
) -> ScoredMoveList {
    let primary = killers.primary(ply);
    let secondary = killers.secondary(ply);

    let mut scored = ScoredMoveList::with_capacity(moves.len());
    for mv in moves.iter() {
        let score = if Some(mv) == tt_move {
            TT_MOVE_SCORE
        } else if mv.is_capture() {
            mvv_lva_score(mv)
        } else if mv.is_promotion() {
            PROMOTION_SCORE
        } else if Some(mv) == primary {
            KILLER1_SCORE
        } else if Some(mv) == secondary {
            KILLER2_SCORE
        } else {
            history.score(mv).min(HISTORY_MAX)
        };
        scored.push(mv, score);
    }
    scored.sort_by_score_desc();
    scored
}

/// Captures ordered by MVV-LVA for quiescence
pub(crate) fn order_captures(moves: &MoveList) -> ScoredMoveList {
    let mut scored = ScoredMoveList::with_capacity(moves.len());
    for mv in moves.iter() {
        scored.push(mv, mvv_lva_score(mv));
    }
    scored.sort_by_score_desc();
    scored
}
