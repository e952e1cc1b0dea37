use super::super::constants::MATE_SCORE;
use super::super::move_order::order_captures;
use super::SearchContext;
use crate::board::position::GamePosition;

impl SearchContext<'_> {
    /// Quiescence search over captures.
    ///
    /// The static evaluation is a lower bound for the side to move: the
    /// result is never below it unless the side to move is mated.
    pub(super) fn quiescence(
        &mut self,
        position: &GamePosition,
        mut alpha: i32,
        beta: i32,
        ply: usize,
        qdepth: u32,
    ) -> i32 {
        if self.should_stop() {
            return alpha;
        }
        self.nodes += 1;

        if position.is_in_check() && !position.has_legal_move() {
            return -(MATE_SCORE - ply as i32);
        }

        let stand_pat = self.stand_pat(position, ply);
        if stand_pat >= beta || qdepth >= self.state.params().max_qsearch_depth {
            return stand_pat;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let captures = position.legal_captures();
        for scored in order_captures(&captures).iter() {
            let child = position.apply(scored.mv);
            let score = -self.quiescence(&child, -beta, -alpha, ply + 1, qdepth + 1);

            if self.stopped {
                break;
            }
            if score >= beta {
                return score;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
