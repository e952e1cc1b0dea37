//! Engine controller implementation.

use std::io;
use std::panic;
use std::sync::mpsc::{self, Receiver, RecvError, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::info;
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{GamePosition, Move, PositionKey, SearchOutcome, SearchParams, SearchState, Strategy};

/// Search thread stack size (32 MB)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// Depth used when a request does not say otherwise
const DEFAULT_MAX_DEPTH: u32 = 5;

/// How far and how long a search may go
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchLimits {
    pub max_depth: u32,
    /// Wall-clock budget; `None` searches to `max_depth` regardless of time
    pub time_budget: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_depth: DEFAULT_MAX_DEPTH,
            time_budget: None,
        }
    }
}

impl SearchLimits {
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchLimits {
            max_depth,
            time_budget: None,
        }
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

/// One request from the host: the position, the limits and how to judge it
#[derive(Clone, Debug)]
pub struct SearchRequest {
    /// Board, side to move, castling rights and last move
    pub position: GamePosition,
    pub limits: SearchLimits,
    pub strategy: Strategy,
    /// Keys of the positions reached so far in the game, oldest first
    pub history: Vec<PositionKey>,
}

impl SearchRequest {
    #[must_use]
    pub fn new(position: GamePosition) -> Self {
        SearchRequest {
            position,
            limits: SearchLimits::default(),
            strategy: Strategy::default(),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: Vec<PositionKey>) -> Self {
        self.history = history;
        self
    }
}

/// The single answer to a [`SearchRequest`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResponse {
    /// `None` only when the side to move has no legal move
    pub best_move: Option<Move>,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        SearchResponse {
            best_move: outcome.best_move,
        }
    }
}

/// A search running on a worker thread
pub struct SearchJob {
    response: Receiver<SearchResponse>,
    /// Handle to the search thread
    handle: JoinHandle<()>,
}

impl SearchJob {
    /// Block until the search answers.
    ///
    /// A panic on the search thread is resumed on the caller's thread.
    #[must_use]
    pub fn wait(self) -> SearchResponse {
        match self.response.recv() {
            Ok(response) => {
                let _ = self.handle.join();
                response
            }
            Err(_) => match self.handle.join() {
                Err(payload) => panic::resume_unwind(payload),
                Ok(()) => SearchResponse { best_move: None },
            },
        }
    }

    /// Poll for the response without blocking.
    ///
    /// `None` while the search is still running. `Some(Err(_))` when the
    /// worker ended without answering (it panicked); call [`SearchJob::wait`]
    /// to resume the panic.
    #[must_use]
    pub fn try_response(&self) -> Option<Result<SearchResponse, RecvError>> {
        match self.response.try_recv() {
            Ok(response) => Some(Ok(response)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(RecvError)),
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Search driver for one computer player.
///
/// Owns the player's search tables; two controllers never share any.
/// Requests submitted while another is running queue on the tables' lock.
pub struct EngineController {
    /// Search state (transposition table, killers, history)
    search_state: Arc<Mutex<SearchState>>,
}

impl Default for EngineController {
    fn default() -> Self {
        EngineController::new()
    }
}

impl EngineController {
    #[must_use]
    pub fn new() -> Self {
        EngineController::with_params(SearchParams::default())
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        EngineController {
            search_state: Arc::new(Mutex::new(SearchState::new(params))),
        }
    }

    /// Get a reference to the search state
    #[must_use]
    pub fn search_state(&self) -> &Arc<Mutex<SearchState>> {
        &self.search_state
    }

    /// Replace the search configuration for later requests
    pub fn set_params(&self, params: SearchParams) {
        self.search_state.lock().set_params(params);
    }

    /// Forget tables from earlier games
    pub fn new_game(&self) {
        self.search_state.lock().clear();
    }

    /// Start a search on a named worker thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the search thread cannot be spawned.
    pub fn submit(&self, request: SearchRequest) -> io::Result<SearchJob> {
        info!(
            "search request: {} to move, depth {}, budget {:?}, strategy {}",
            request.position.side_to_move(),
            request.limits.max_depth,
            request.limits.time_budget,
            request.strategy
        );

        let search_state = Arc::clone(&self.search_state);
        let (tx, rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let response = Self::run(&search_state, &request);
                // The job may have been dropped; nobody is left to answer
                let _ = tx.send(response);
            })?;

        Ok(SearchJob {
            response: rx,
            handle,
        })
    }

    /// Run a search on the caller's thread
    #[must_use]
    pub fn search_blocking(&self, request: &SearchRequest) -> SearchResponse {
        info!(
            "search request: {} to move, depth {}, budget {:?}, strategy {}",
            request.position.side_to_move(),
            request.limits.max_depth,
            request.limits.time_budget,
            request.strategy
        );
        Self::run(&self.search_state, request)
    }

    fn run(search_state: &Mutex<SearchState>, request: &SearchRequest) -> SearchResponse {
        let evaluator = request.strategy.evaluator();
        let outcome = search_state.lock().search(
            &request.position,
            request.limits.max_depth,
            request.limits.time_budget,
            &evaluator,
            &request.history,
        );
        info!(
            "search response: {} (depth {}, score {}, {} nodes)",
            outcome
                .best_move
                .map_or_else(|| "none".to_string(), |m| m.to_string()),
            outcome.depth,
            outcome.score,
            outcome.nodes
        );
        SearchResponse::from(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocking_search_answers_with_legal_move() {
        let controller = EngineController::new();
        let request = SearchRequest::new(GamePosition::starting()).with_limits(SearchLimits::depth(2));
        let response = controller.search_blocking(&request);
        let mv = response.best_move.expect("start position has moves");
        assert!(GamePosition::starting().legal_moves().contains(mv));
    }

    #[test]
    fn submitted_job_delivers_one_response() {
        let controller = EngineController::new();
        let request = SearchRequest::new(GamePosition::starting()).with_limits(SearchLimits::depth(2));
        let job = controller.submit(request).expect("spawn search thread");
        let response = job.wait();
        assert!(response.best_move.is_some());
    }

    #[test]
    fn polling_reports_a_worker_that_never_answered() {
        let (tx, rx) = mpsc::channel::<SearchResponse>();
        let handle = thread::spawn(move || drop(tx));
        let job = SearchJob {
            response: rx,
            handle,
        };
        while !job.is_finished() {
            thread::yield_now();
        }
        assert_eq!(job.try_response(), Some(Err(RecvError)));
    }

    #[test]
    fn polling_is_empty_while_the_worker_runs() {
        let (tx, rx) = mpsc::channel::<SearchResponse>();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            let _ = release_rx.recv();
            let _ = tx.send(SearchResponse { best_move: None });
        });
        let job = SearchJob {
            response: rx,
            handle,
        };
        assert_eq!(job.try_response(), None);
        release_tx.send(()).expect("worker is waiting");
        assert_eq!(job.wait(), SearchResponse { best_move: None });
    }
}
