use log::debug;

use super::super::constants::{INFINITY, MATE_SCORE, MATE_THRESHOLD};
use super::super::move_order::order_moves;
use super::super::SearchOutcome;
use super::SearchContext;
use crate::board::key::KeyHistory;
use crate::board::position::GamePosition;
use crate::board::types::{Move, MoveList, MAX_PLY};
use crate::tt::BoundType;

impl SearchContext<'_> {
    /// Iterative deepening from depth 1 up to `max_depth`.
    ///
    /// Only completed iterations count: an iteration interrupted by the
    /// clock is thrown away. If none completes, the first generated move
    /// is returned.
    pub(in crate::board::search) fn iterative_deepening(
        &mut self,
        root: &GamePosition,
        max_depth: u32,
        history: KeyHistory<'_>,
    ) -> SearchOutcome {
        let moves = root.legal_moves();
        let mut best_move = moves.first();
        let mut score = if moves.is_empty() && root.is_in_check() {
            -MATE_SCORE
        } else {
            0
        };
        let mut completed = 0;

        if !moves.is_empty() {
            for depth in 1..=max_depth.min(MAX_PLY as u32 / 2) {
                if self.should_stop() {
                    break;
                }
                let Some((mv, iteration_score)) = self.search_root(root, &moves, depth, history)
                else {
                    break;
                };

                best_move = Some(mv);
                score = iteration_score;
                completed = depth;
                debug!(
                    "depth {} score {} nodes {} best {} ({:?})",
                    depth,
                    score,
                    self.nodes,
                    mv,
                    self.clock.elapsed()
                );

                // A proven mate cannot be improved by searching deeper
                if score.abs() >= MATE_THRESHOLD {
                    break;
                }
            }
        }

        SearchOutcome {
            best_move,
            score,
            depth: completed,
            nodes: self.nodes,
            elapsed: self.clock.elapsed(),
        }
    }

    /// Full-width search of every root move; `None` when the clock ran out.
    fn search_root(
        &mut self,
        root: &GamePosition,
        moves: &MoveList,
        depth: u32,
        history: KeyHistory<'_>,
    ) -> Option<(Move, i32)> {
        let key = root.key();
        let tt_move = self.state.tt.probe(&key, 0).and_then(|entry| entry.best_move);
        let ordered = order_moves(moves, tt_move, &self.state.killers, &self.state.history, 0);

        let mover = root.side_to_move();
        let mut alpha = -INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for scored in ordered.iter() {
            let mv = scored.mv;
            let child = root.apply(mv);
            let child_key = child.key();

            let score = if history.is_third_repetition(child_key) {
                self.repetition_score(&child, mover)
            } else {
                let link = history.link(child_key);
                -self.negamax(&child, depth - 1, -INFINITY, -alpha, 1, true, link.history())
            };

            if self.stopped {
                return None;
            }

            // Strictly better only, so ties keep the earlier move
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        if let Some((mv, score)) = best {
            self.state
                .tt
                .store(key, depth, score, BoundType::Exact, Some(mv), 0);
        }
        best
    }
}
