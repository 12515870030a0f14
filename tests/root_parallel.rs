use draughtbot::board::{Board, Color};
use draughtbot::movegen::SeedPolicy;
use draughtbot::search::{Optimization, ScoringMode, SearchParams, Searcher};

fn params(depth: u32, threads: usize) -> SearchParams {
    SearchParams {
        max_depth: depth,
        scoring: ScoringMode::NumberAndPotential,
        optimization: Optimization::None,
        seed: SeedPolicy::Fixed(3),
        threads,
    }
}

#[test]
fn root_parallel_turn_equals_single_thread() {
    let b = Board::start();
    let r1 = Searcher::new(params(3, 1)).choose_turn(&b, Color::White);
    let r2 = Searcher::new(params(3, 4)).choose_turn(&b, Color::White);
    assert_eq!(r2.score, r1.score, "score differs between single and multi-thread at fixed depth");
    assert_eq!(r2.turn, r1.turn);
}

#[test]
fn root_parallel_keeps_capture_chains() {
    // two capturing men; the left one can take twice
    let b: Board = "
        ........
        ........
        ........
        ....b...
        ........
        ..b...b.
        .w...w..
        ........".parse().unwrap();
    let r1 = Searcher::new(params(2, 1)).choose_turn(&b, Color::White);
    let r2 = Searcher::new(params(2, 4)).choose_turn(&b, Color::White);
    assert!(!r1.turn.is_empty());
    assert!(r1.turn.iter().all(|m| m.is_capture()));
    assert_eq!(r2.score, r1.score);
    assert_eq!(r2.turn, r1.turn);
}
