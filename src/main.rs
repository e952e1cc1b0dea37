use std::env;
use std::process::ExitCode;
use std::time::Duration;

use chess_ai::board::GamePosition;
use chess_ai::{EngineController, SearchLimits, SearchRequest, Strategy};

const USAGE: &str = "usage: chess_ai [fen|startpos] [depth] [millis] [strategy]";

fn parse_args(args: &[String]) -> Result<SearchRequest, String> {
    let position = match args.first().map(String::as_str) {
        None | Some("startpos") => GamePosition::starting(),
        Some(fen) => GamePosition::try_from_fen(fen).map_err(|e| format!("bad FEN: {e}"))?,
    };

    let mut limits = SearchLimits::default();
    if let Some(depth) = args.get(1) {
        limits.max_depth = depth
            .parse()
            .map_err(|_| format!("bad depth: {depth}"))?;
    }
    if let Some(millis) = args.get(2) {
        let millis: u64 = millis
            .parse()
            .map_err(|_| format!("bad time budget: {millis}"))?;
        if millis > 0 {
            limits = limits.with_time_budget(Duration::from_millis(millis));
        }
    }

    let strategy = match args.get(3) {
        Some(name) => name.parse::<Strategy>().map_err(|e| e.to_string())?,
        None => Strategy::default(),
    };

    Ok(SearchRequest::new(position)
        .with_limits(limits)
        .with_strategy(strategy))
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let request = match parse_args(&args) {
        Ok(request) => request,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let controller = EngineController::new();
    let job = match controller.submit(request) {
        Ok(job) => job,
        Err(e) => {
            eprintln!("failed to start search: {e}");
            return ExitCode::FAILURE;
        }
    };

    match job.wait().best_move {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove (none)"),
    }
    ExitCode::SUCCESS
}
