use super::super::constants::MATE_THRESHOLD;
use super::{NodeContext, SearchContext};
use crate::board::key::KeyHistory;
use crate::board::position::GamePosition;

impl SearchContext<'_> {
    /// Try null move pruning.
    ///
    /// The side to move passes and the opponent is searched with a null
    /// window at reduced depth; a result still at or above beta cuts. The
    /// passed position is not added to the key history.
    pub(super) fn try_null_move(
        &mut self,
        position: &GamePosition,
        beta: i32,
        node: &NodeContext,
        history: KeyHistory<'_>,
    ) -> Option<i32> {
        let params = self.state.params();
        let (enabled, min_depth, reduction) =
            (params.null_move, params.null_min_depth, params.null_reduction);

        // Zugzwang is likely with only king and pawns
        if !enabled
            || node.in_check
            || node.depth < min_depth
            || !position
                .board()
                .has_non_pawn_material(position.side_to_move())
        {
            return None;
        }

        let reduced_depth = node.depth.saturating_sub(1 + reduction);
        let score = -self.negamax(
            &position.pass(),
            reduced_depth,
            -beta,
            -beta + 1,
            node.ply + 1,
            false,
            history,
        );

        if self.stopped || score < beta {
            return None;
        }

        // A mate found after passing is not a proven mate
        if score >= MATE_THRESHOLD {
            Some(beta)
        } else {
            Some(score)
        }
    }
}
