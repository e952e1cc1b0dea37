//! Core search implementation.
//!
//! This module implements:
//! - Iterative deepening under a wall-clock budget
//! - Negamax alpha-beta with a transposition table
//! - Null move pruning
//! - Late move reductions (LMR)
//! - Mate distance pruning
//! - Draw-biased scoring of threefold repetitions
//! - Quiescence search over captures

mod iterative;
mod pruning;
mod quiescence;

use crate::tt::BoundType;

use super::super::eval::Evaluator;
use super::super::key::KeyHistory;
use super::super::position::GamePosition;
use super::super::types::{Color, Move};
use super::constants::{INFINITY, LMR_DEEP_MIN_DEPTH, LMR_DEEP_MOVE_INDEX, MATE_SCORE, MATE_THRESHOLD};
use super::move_order::order_moves;
use super::{SearchClock, SearchState};

/// Search context for a single top-level search
pub(super) struct SearchContext<'a> {
    state: &'a mut SearchState,
    evaluator: &'a dyn Evaluator,
    clock: SearchClock,
    nodes: u64,
    /// Sticky once the clock has expired
    stopped: bool,
}

#[derive(Clone, Copy)]
struct NodeContext {
    ply: usize,
    depth: u32,
    in_check: bool,
}

impl<'a> SearchContext<'a> {
    pub(super) fn new(
        state: &'a mut SearchState,
        evaluator: &'a dyn Evaluator,
        clock: SearchClock,
    ) -> Self {
        SearchContext {
            state,
            evaluator,
            clock,
            nodes: 0,
            stopped: false,
        }
    }

    /// Check if we should stop searching
    #[inline]
    fn should_stop(&mut self) -> bool {
        if !self.stopped && self.clock.expired() {
            self.stopped = true;
        }
        self.stopped
    }

    /// Fixed score for a move into a third repetition, from `mover`'s side.
    ///
    /// A mover ahead in material is penalized for repeating, a mover behind
    /// is rewarded, and a balanced repetition scores as a plain draw.
    fn repetition_score(&self, position: &GamePosition, mover: Color) -> i32 {
        let params = self.state.params();
        let balance = position.board().material_balance(mover);
        if balance > params.repetition_margin {
            -params.repetition_contempt
        } else if balance < -params.repetition_margin {
            params.repetition_contempt
        } else {
            0
        }
    }

    /// Negamax alpha-beta; the score is from the perspective of the side to move.
    #[allow(clippy::too_many_arguments)]
    fn negamax(
        &mut self,
        position: &GamePosition,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        ply: usize,
        allow_null: bool,
        history: KeyHistory<'_>,
    ) -> i32 {
        if self.should_stop() {
            return alpha;
        }
        self.nodes += 1;

        // Mate distance pruning
        let mate_here = MATE_SCORE - ply as i32;
        alpha = alpha.max(-mate_here);
        beta = beta.min(mate_here - 1);
        if alpha >= beta {
            return alpha;
        }

        let key = position.key();
        let mut tt_move = None;
        if let Some(entry) = self.state.tt.probe(&key, ply) {
            tt_move = entry.best_move;
            if let Some(score) = entry.cutoff(depth, alpha, beta) {
                return score;
            }
        }

        if depth == 0 {
            return self.quiescence(position, alpha, beta, ply, 0);
        }

        let in_check = position.is_in_check();
        let moves = position.legal_moves();
        if moves.is_empty() {
            return if in_check { -mate_here } else { 0 };
        }

        let node = NodeContext {
            ply,
            depth,
            in_check,
        };

        if allow_null {
            if let Some(score) = self.try_null_move(position, beta, &node, history) {
                return score;
            }
        }

        let ordered = order_moves(
            &moves,
            tt_move,
            &self.state.killers,
            &self.state.history,
            ply,
        );

        let original_alpha = alpha;
        let mut best_score = -INFINITY;
        let mut best_move = None;
        let mover = position.side_to_move();

        for (idx, scored) in ordered.iter().enumerate() {
            let mv = scored.mv;
            let child = position.apply(mv);
            let child_key = child.key();

            let score = if history.is_third_repetition(child_key) {
                self.repetition_score(&child, mover)
            } else {
                let link = history.link(child_key);
                self.search_child(&child, mv, idx, alpha, beta, &node, link.history())
            };

            if self.stopped {
                break;
            }

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                if mv.is_quiet() {
                    self.state.killers.update(ply, mv);
                    self.state.history.update(mv, depth);
                }
                break;
            }
        }

        if self.stopped {
            return if best_move.is_some() { best_score } else { alpha };
        }

        let bound = if best_score >= beta {
            BoundType::LowerBound
        } else if best_score > original_alpha {
            BoundType::Exact
        } else {
            BoundType::UpperBound
        };
        self.state
            .tt
            .store(key, depth, best_score, bound, best_move, ply);

        best_score
    }

    /// Search one child, first at reduced depth with a null window when LMR applies
    #[allow(clippy::too_many_arguments)]
    fn search_child(
        &mut self,
        child: &GamePosition,
        mv: Move,
        idx: usize,
        alpha: i32,
        beta: i32,
        node: &NodeContext,
        history: KeyHistory<'_>,
    ) -> i32 {
        let params = self.state.params();
        let reducible = params.lmr
            && !node.in_check
            && mv.is_quiet()
            && idx >= params.lmr_min_move
            && node.depth >= params.lmr_min_depth
            && !child.is_in_check();

        if reducible {
            let reduction = if idx >= LMR_DEEP_MOVE_INDEX && node.depth >= LMR_DEEP_MIN_DEPTH {
                2
            } else {
                1
            };
            let reduced = node.depth.saturating_sub(1 + reduction);
            let score = -self.negamax(
                child,
                reduced,
                -alpha - 1,
                -alpha,
                node.ply + 1,
                true,
                history,
            );
            if self.stopped || score <= alpha {
                return score;
            }
        }

        -self.negamax(child, node.depth - 1, -beta, -alpha, node.ply + 1, true, history)
    }

    /// Static evaluation for the side to move, with mate-range scores pinned to this ply
    fn stand_pat(&self, position: &GamePosition, ply: usize) -> i32 {
        let score = self.evaluator.evaluate(position, position.side_to_move());
        if score >= MATE_THRESHOLD {
            MATE_SCORE - ply as i32
        } else if score <= -MATE_THRESHOLD {
            -(MATE_SCORE - ply as i32)
        } else {
            score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{MaterialEvaluator, SearchParams, Strategy};

    const POSITIONS: &[&str] = &[
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1",
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ];

    #[test]
    fn quiescence_never_drops_below_stand_pat() {
        let evaluator = Strategy::Standard.evaluator();
        let mut state = SearchState::default();
        for fen in POSITIONS {
            let pos = GamePosition::from_fen(fen);
            let mut ctx = SearchContext::new(&mut state, &evaluator, SearchClock::new(None));
            let stand_pat = ctx.stand_pat(&pos, 0);
            let score = ctx.quiescence(&pos, -INFINITY, INFINITY, 0, 0);
            assert!(score >= stand_pat, "{score} < {stand_pat} on {fen}");
        }
    }

    #[test]
    fn quiescence_wins_hanging_queen() {
        let mut state = SearchState::default();
        let pos = GamePosition::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
        let mut ctx = SearchContext::new(&mut state, &MaterialEvaluator, SearchClock::new(None));
        assert_eq!(ctx.stand_pat(&pos, 0), -800);
        assert_eq!(ctx.quiescence(&pos, -INFINITY, INFINITY, 0, 0), 100);
    }

    #[test]
    fn repetition_bias_follows_material() {
        let mut state = SearchState::default();
        let ctx = SearchContext::new(&mut state, &MaterialEvaluator, SearchClock::new(None));

        let white_up = GamePosition::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(ctx.repetition_score(&white_up, Color::White), -150);
        assert_eq!(ctx.repetition_score(&white_up, Color::Black), 150);
        assert_eq!(ctx.repetition_score(&GamePosition::starting(), Color::White), 0);
    }

    #[test]
    fn expired_clock_stops_immediately() {
        let mut state = SearchState::default();
        let clock = SearchClock::new(Some(std::time::Duration::ZERO));
        let mut ctx = SearchContext::new(&mut state, &MaterialEvaluator, clock);
        let pos = GamePosition::starting();
        let _ = ctx.negamax(&pos, 3, -INFINITY, INFINITY, 1, true, KeyHistory::new(&[]));
        assert!(ctx.stopped);
        assert_eq!(ctx.nodes, 0);
    }

    fn quiet_node(depth: u32) -> NodeContext {
        NodeContext {
            ply: 0,
            depth,
            in_check: false,
        }
    }

    #[test]
    fn null_move_cuts_when_a_queen_up() {
        let mut state = SearchState::default();
        let mut ctx = SearchContext::new(&mut state, &MaterialEvaluator, SearchClock::new(None));
        let pos = GamePosition::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1");
        let score = ctx.try_null_move(&pos, 0, &quiet_node(4), KeyHistory::new(&[]));
        assert!(matches!(score, Some(s) if s >= 0), "expected a cutoff, got {score:?}");
    }

    #[test]
    fn null_move_skipped_in_check() {
        let mut state = SearchState::default();
        let mut ctx = SearchContext::new(&mut state, &MaterialEvaluator, SearchClock::new(None));
        let pos = GamePosition::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1");
        let node = NodeContext {
            in_check: true,
            ..quiet_node(4)
        };
        assert_eq!(ctx.try_null_move(&pos, 0, &node, KeyHistory::new(&[])), None);
        assert_eq!(ctx.nodes, 0);
    }

    #[test]
    fn null_move_skipped_with_only_pawns() {
        let mut state = SearchState::default();
        let mut ctx = SearchContext::new(&mut state, &MaterialEvaluator, SearchClock::new(None));
        let pos = GamePosition::from_fen("4k3/pppp4/8/8/8/8/PPPP4/4K3 w - - 0 1");
        assert_eq!(
            ctx.try_null_move(&pos, -INFINITY + 1, &quiet_node(6), KeyHistory::new(&[])),
            None
        );
        assert_eq!(ctx.nodes, 0);
    }

    #[test]
    fn null_move_needs_depth_and_switch() {
        let pos = GamePosition::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1");

        let mut state = SearchState::default();
        let mut ctx = SearchContext::new(&mut state, &MaterialEvaluator, SearchClock::new(None));
        let shallow = quiet_node(SearchParams::default().null_min_depth - 1);
        assert_eq!(ctx.try_null_move(&pos, 0, &shallow, KeyHistory::new(&[])), None);

        let mut state = SearchState::new(SearchParams::default().with_null_move(false));
        let mut ctx = SearchContext::new(&mut state, &MaterialEvaluator, SearchClock::new(None));
        assert_eq!(ctx.try_null_move(&pos, 0, &quiet_node(6), KeyHistory::new(&[])), None);
    }

    #[test]
    fn pruning_switches_agree_on_quiet_mate_in_two() {
        // Rb7 (or Ra7) is quiet; the rook lift mates next move
        let pos = GamePosition::from_fen("7k/8/8/8/8/8/1R6/R3K3 w - - 0 1");
        let evaluator = Strategy::Standard.evaluator();

        let mut scores = Vec::new();
        for null_move in [true, false] {
            for lmr in [true, false] {
                let params = SearchParams::default()
                    .with_null_move(null_move)
                    .with_lmr(lmr);
                let outcome = SearchState::new(params).search(&pos, 4, None, &evaluator, &[]);
                assert_eq!(outcome.mate_in(), Some(3), "null {null_move} lmr {lmr}");
                scores.push(outcome.score);
            }
        }
        assert!(scores.iter().all(|&s| s == MATE_SCORE - 3));
    }
}
