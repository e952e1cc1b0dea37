//! Request/response tests for the engine controller.

use std::thread;
use std::time::Duration;

use chess_ai::board::{GamePosition, SearchParams};
use chess_ai::{EngineController, SearchLimits, SearchRequest, Strategy};

fn request(fen: &str, depth: u32) -> SearchRequest {
    SearchRequest::new(GamePosition::from_fen(fen)).with_limits(SearchLimits::depth(depth))
}

#[test]
fn worker_answers_with_mate() {
    let controller = EngineController::new();
    let job = controller
        .submit(request("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 3))
        .expect("spawn search thread");
    let response = job.wait();
    assert_eq!(response.best_move.map(|m| m.to_string()).as_deref(), Some("a1a8"));
}

#[test]
fn worker_answers_none_when_mated() {
    let controller = EngineController::new();
    let job = controller
        .submit(request(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
            3,
        ))
        .expect("spawn search thread");
    assert_eq!(job.wait().best_move, None);
}

#[test]
fn polling_eventually_yields_the_response() {
    let controller = EngineController::new();
    let job = controller
        .submit(request("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 2))
        .expect("spawn search thread");

    let mut response = None;
    for _ in 0..3000 {
        if let Some(answer) = job.try_response() {
            response = Some(answer.expect("search thread answered"));
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }
    let mv = response
        .and_then(|r| r.best_move)
        .expect("search should answer within the polling window");
    assert!(GamePosition::starting().legal_moves().contains(mv));
}

#[test]
fn time_limited_request_returns_a_legal_move() {
    let controller = EngineController::new();
    let position = GamePosition::starting();
    let req = SearchRequest::new(position)
        .with_limits(SearchLimits::depth(50).with_time_budget(Duration::from_millis(50)))
        .with_strategy(Strategy::Casual);

    let response = controller.search_blocking(&req);
    let mv = response.best_move.expect("start position has moves");
    assert!(position.legal_moves().contains(mv));
}

#[test]
fn history_in_request_steers_away_from_repetition() {
    // Black is a queen down; White should not allow a third repetition
    let start =
        GamePosition::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let mut history = vec![start.key()];
    let mut position = start;
    for mv in ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"] {
        position = position.play(mv).expect("legal move");
        history.push(position.key());
    }

    let controller = EngineController::with_params(SearchParams::default().with_tt_capacity(1 << 14));
    let req = SearchRequest::new(position)
        .with_limits(SearchLimits::depth(3))
        .with_history(history);
    let mv = controller
        .search_blocking(&req)
        .best_move
        .expect("position has moves");
    assert!(position.legal_moves().contains(mv));
    assert_ne!(mv.to_string(), "g1f3", "repeating throws away the extra queen");

    // Without the game record the same position has nothing to avoid
    let fresh = EngineController::with_params(SearchParams::default().with_tt_capacity(1 << 14));
    let req = SearchRequest::new(position).with_limits(SearchLimits::depth(3));
    let mv = fresh.search_blocking(&req).best_move.expect("position has moves");
    assert_eq!(mv.to_string(), "g1f3");
}

#[test]
fn controllers_keep_independent_tables() {
    let first = EngineController::new();
    let second = EngineController::new();

    let _ = first.search_blocking(&request(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        3,
    ));

    assert!(!first.search_state().lock().tt().is_empty());
    assert!(second.search_state().lock().tt().is_empty());

    first.new_game();
    assert!(first.search_state().lock().tt().is_empty());
}
