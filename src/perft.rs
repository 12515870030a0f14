use crate::board::{Board, Color};
use crate::movegen::complete_turns;

/// Count complete turns (capture chains count once) `depth` turns deep.
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let turns = complete_turns(board, color);
    if depth == 1 { return turns.len() as u64; }
    turns.iter().map(|t| perft(&board.apply_turn(t), color.opposite(), depth - 1)).sum()
}

/// Per-root-turn breakdown, for debugging generator changes. Empty at depth 0,
/// where there is no root turn to split on.
pub fn divide(board: &Board, color: Color, depth: u32) -> Vec<(String, u64)> {
    if depth == 0 { return Vec::new(); }
    complete_turns(board, color)
        .into_iter()
        .map(|t| {
            let n = if depth == 1 { 1 } else { perft(&board.apply_turn(&t), color.opposite(), depth - 1) };
            (crate::notation::format_turn(&t), n)
        })
        .collect()
}
