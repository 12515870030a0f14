use crate::board::{Board, Cell, Color, Piece};
use std::sync::OnceLock;

pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

static TABLE: OnceLock<[u64; 4 * 64]> = OnceLock::new();
static SIDE_KEY: OnceLock<u64> = OnceLock::new();

fn init_table() -> &'static [u64; 4 * 64] {
    TABLE.get_or_init(|| {
        let mut t = [0u64; 4 * 64];
        let mut seed = 0xC0DE_D1A6_0A11_5EED;
        for v in &mut t {
            seed = splitmix64(seed);
            *v = seed;
        }
        t
    })
}

fn init_side() -> u64 {
    *SIDE_KEY.get_or_init(|| splitmix64(0x1234_5678_9ABC_DEF0))
}

fn piece_index(piece: Piece) -> usize { piece.code() as usize - 1 }

/// Position key of the grid with `to_move` on move.
pub fn compute(board: &Board, to_move: Color) -> u64 {
    let table = init_table();
    let mut key = 0u64;
    for cell in Cell::all() {
        if let Some(p) = board.get(cell) { key ^= table[piece_index(p) * 64 + cell.index()]; }
    }
    if to_move == Color::Black { key ^= init_side(); }
    key
}
