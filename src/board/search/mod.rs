//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening under an optional wall-clock budget
//! - Negamax alpha-beta with null move pruning and LMR
//! - Mate distance pruning and draw-biased repetition scores
//! - Quiescence search with stand-pat
//! - Move ordering (TT move, MVV-LVA, promotions, killers, history)
//! - Transposition table for move ordering and cutoffs

mod alphabeta;
pub(crate) mod constants;
mod move_order;
mod params;

use std::time::{Duration, Instant};

use log::debug;

use crate::tt::TranspositionTable;

use super::eval::Evaluator;
use super::key::{KeyHistory, PositionKey};
use super::position::GamePosition;
use super::types::{Move, MAX_PLY};

use alphabeta::SearchContext;
pub use constants::{MATE_SCORE, MATE_THRESHOLD};
pub use params::SearchParams;

/// Two quiet moves per ply that recently caused a beta cutoff
pub struct KillerTable {
    slots: [[Option<Move>; 2]; MAX_PLY],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: [[None; 2]; MAX_PLY],
        }
    }

    #[must_use]
    pub fn primary(&self, ply: usize) -> Option<Move> {
        self.slots.get(ply).and_then(|row| row[0])
    }

    #[must_use]
    pub fn secondary(&self, ply: usize) -> Option<Move> {
        self.slots.get(ply).and_then(|row| row[1])
    }

    pub fn update(&mut self, ply: usize, mv: Move) {
        let Some(row) = self.slots.get_mut(ply) else {
            return;
        };
        if row[0] != Some(mv) {
            row[1] = row[0];
            row[0] = Some(mv);
        }
    }

    pub fn reset(&mut self) {
        self.slots = [[None; 2]; MAX_PLY];
    }
}

/// Cutoff statistics per from/to square pair
pub struct HistoryTable {
    entries: [i32; 4096],
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        HistoryTable { entries: [0; 4096] }
    }

    fn index(mv: Move) -> usize {
        mv.from().index() * 64 + mv.to().index()
    }

    #[must_use]
    pub fn score(&self, mv: Move) -> i32 {
        self.entries[Self::index(mv)]
    }

    /// Credit a quiet move that caused a beta cutoff at `depth`
    pub fn update(&mut self, mv: Move, depth: u32) {
        let bonus = (depth * depth) as i32;
        let entry = &mut self.entries[Self::index(mv)];
        *entry = entry.saturating_add(bonus);
    }

    pub fn reset(&mut self) {
        self.entries = [0; 4096];
    }
}

/// What one top-level search produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` only when the position has no legal move
    pub best_move: Option<Move>,
    /// Score of the last completed depth, from the mover's perspective
    pub score: i32,
    /// Deepest fully completed iteration (0 when none completed)
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
}

impl SearchOutcome {
    /// Plies to mate when the score is a mate score; negative when being mated
    #[must_use]
    pub fn mate_in(&self) -> Option<i32> {
        if self.score >= MATE_THRESHOLD {
            Some(MATE_SCORE - self.score)
        } else if self.score <= -MATE_THRESHOLD {
            Some(-(MATE_SCORE + self.score))
        } else {
            None
        }
    }
}

/// Wall-clock budget of one search
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchClock {
    start: Instant,
    deadline: Option<Instant>,
}

impl SearchClock {
    pub(crate) fn new(budget: Option<Duration>) -> Self {
        let start = Instant::now();
        SearchClock {
            start,
            deadline: budget.and_then(|b| start.checked_add(b)),
        }
    }

    pub(crate) fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Tables and configuration owned by one player.
///
/// The transposition table persists across searches and ages once per
/// search; killers and history are reset at the start of each search.
pub struct SearchState {
    pub(crate) tt: TranspositionTable,
    pub(crate) killers: KillerTable,
    pub(crate) history: HistoryTable,
    params: SearchParams,
}

impl SearchState {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        SearchState {
            tt: TranspositionTable::with_stale_ages(params.tt_capacity, params.tt_stale_ages),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            params,
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Replace the configuration; the transposition table is rebuilt empty
    /// when its capacity or staleness changes.
    pub fn set_params(&mut self, params: SearchParams) {
        if params.tt_capacity != self.params.tt_capacity
            || params.tt_stale_ages != self.params.tt_stale_ages
        {
            self.tt = TranspositionTable::with_stale_ages(params.tt_capacity, params.tt_stale_ages);
        }
        self.params = params;
    }

    #[must_use]
    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Forget everything learned in earlier searches
    pub fn clear(&mut self) {
        self.tt.clear();
        self.killers.reset();
        self.history.reset();
    }

    fn new_search(&mut self) {
        self.tt.new_search();
        self.killers.reset();
        self.history.reset();
    }

    /// Search `position` to at most `max_depth` plies within `time_budget`.
    ///
    /// `history` holds the keys of the positions reached so far in the game;
    /// the current position's key is appended when it is not already last.
    pub fn search(
        &mut self,
        position: &GamePosition,
        max_depth: u32,
        time_budget: Option<Duration>,
        evaluator: &dyn Evaluator,
        history: &[PositionKey],
    ) -> SearchOutcome {
        self.new_search();

        let root_key = position.key();
        let with_root;
        let prior: &[PositionKey] = if history.last() == Some(&root_key) {
            history
        } else {
            with_root = [history, &[root_key]].concat();
            &with_root
        };

        let clock = SearchClock::new(time_budget);
        let mut ctx = SearchContext::new(self, evaluator, clock);
        let outcome = ctx.iterative_deepening(position, max_depth.max(1), KeyHistory::new(prior));

        debug!(
            "search done: best {} score {} depth {} nodes {} in {:?}",
            outcome
                .best_move
                .map_or_else(|| "none".to_string(), |m| m.to_string()),
            outcome.score,
            outcome.depth,
            outcome.nodes,
            outcome.elapsed
        );
        outcome
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(SearchParams::default())
    }
}

/// Choose a move for the side to move with fresh tables.
///
/// Returns `None` only when the side to move has no legal move.
#[must_use]
pub fn choose_move(
    position: &GamePosition,
    max_depth: u32,
    time_budget: Option<Duration>,
    evaluator: &dyn Evaluator,
    history: &[PositionKey],
) -> Option<Move> {
    SearchState::default()
        .search(position, max_depth, time_budget, evaluator, history)
        .best_move
}
