use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Color, Piece};

/// Stands in for an infinite score: the evaluated side has no material left.
pub const INF: f64 = 1e9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringMode {
    Number,
    #[default]
    NumberAndPotential,
}

impl ScoringMode {
    pub fn king_weight(self) -> f64 {
        match self { ScoringMode::Number => 4.0, ScoringMode::NumberAndPotential => 5.0 }
    }
}

const POTENTIAL_PER_ROW: f64 = 0.05;

#[derive(Default)]
struct Material {
    men: f64,
    kings: f64,
}

impl Material {
    fn total(&self, king_weight: f64) -> f64 { self.men + self.kings * king_weight }
    fn is_gone(&self) -> bool { self.men + self.kings == 0.0 }
}

/// Material ratio opponent/own from `color`'s view; higher is worse for `color`.
/// `INF` when `color` has nothing left, `0` when the opponent has nothing left.
pub fn score(board: &Board, color: Color, mode: ScoringMode) -> f64 {
    let mut white = Material::default();
    let mut black = Material::default();
    for cell in Cell::all() {
        let Some(piece) = board.get(cell) else { continue };
        let side = if piece.color() == Color::White { &mut white } else { &mut black };
        if piece.is_king() {
            side.kings += 1.0;
        } else {
            side.men += 1.0;
            if mode == ScoringMode::NumberAndPotential { side.men += POTENTIAL_PER_ROW * advancement(cell, piece) as f64; }
        }
    }
    let (own, opp) = match color { Color::White => (white, black), Color::Black => (black, white) };
    if own.is_gone() { return INF; }
    if opp.is_gone() { return 0.0; }
    let k = mode.king_weight();
    opp.total(k) / own.total(k)
}

// Rows travelled from the man's own back rank.
fn advancement(cell: Cell, piece: Piece) -> u8 {
    match piece.color() { Color::White => 7 - cell.row, Color::Black => cell.row }
}
