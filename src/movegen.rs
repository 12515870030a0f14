//! Legal move generation under the forced-capture rule.
//!
//! A [`Move`] is one leg: a slide, or a single jump over one enemy piece. A
//! player's turn may chain several capture legs made by the same piece; use
//! [`complete_turns`] to enumerate whole turns.

use std::fmt;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{zobrist, Board, Cell, Color, Piece, DIAGONALS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
    /// Square of the jumped piece; `None` for a plain slide.
    pub captured: Option<Cell>,
}

impl Move {
    pub fn slide(from: Cell, to: Cell) -> Self { Self { from, to, captured: None } }

    pub fn capture(from: Cell, to: Cell, captured: Cell) -> Self { Self { from, to, captured: Some(captured) } }

    pub fn is_capture(&self) -> bool { self.captured.is_some() }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { ':' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// Legal moves for one mover at one ply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnSet {
    pub moves: Vec<Move>,
    /// True iff at least one capture exists; then `moves` holds captures only.
    pub forced_capture: bool,
}

impl TurnSet {
    pub fn is_empty(&self) -> bool { self.moves.is_empty() }
    pub fn len(&self) -> usize { self.moves.len() }
}

/// Moves of the single piece on `cell`. Captures suppress slides for the piece.
/// An empty cell yields an empty set.
pub fn legal_moves_for_piece(board: &Board, cell: Cell) -> TurnSet {
    let piece = match board.get(cell) {
        Some(p) => p,
        None => return TurnSet::default(),
    };
    let mut moves = if piece.is_king() { king_captures(board, cell, piece) } else { man_captures(board, cell, piece) };
    if !moves.is_empty() {
        return TurnSet { moves, forced_capture: true };
    }
    if piece.is_king() { king_slides(board, cell, &mut moves) } else { man_slides(board, cell, piece, &mut moves) }
    TurnSet { moves, forced_capture: false }
}

/// Moves of every piece of `color`, in row-major order of the moving piece.
/// Once any capture is found, slides are dropped and only captures collected.
pub fn legal_moves_for_color(board: &Board, color: Color) -> TurnSet {
    let mut out = TurnSet::default();
    for (cell, _) in board.pieces(color) {
        let local = legal_moves_for_piece(board, cell);
        if local.forced_capture && !out.forced_capture {
            out.forced_capture = true;
            out.moves.clear();
        }
        if local.forced_capture || !out.forced_capture {
            out.moves.extend(local.moves);
        }
    }
    out
}

fn is_enemy(board: &Board, cell: Cell, mover: Piece) -> bool {
    board.get(cell).map_or(false, |p| p.color() != mover.color())
}

// Men jump in all four directions but slide forward only.
fn man_captures(board: &Board, from: Cell, piece: Piece) -> Vec<Move> {
    let mut out = Vec::new();
    for &(dr, dc) in &DIAGONALS {
        let (Some(over), Some(land)) = (from.offset(dr, dc, 1), from.offset(dr, dc, 2)) else { continue };
        if board.is_empty_at(land) && is_enemy(board, over, piece) {
            out.push(Move::capture(from, land, over));
        }
    }
    out
}

fn man_slides(board: &Board, from: Cell, piece: Piece, out: &mut Vec<Move>) {
    let dr = piece.color().forward();
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dr, dc, 1) {
            if board.is_empty_at(to) { out.push(Move::slide(from, to)); }
        }
    }
}

// A king's ray may pass empty squares, jump exactly one enemy piece and land on
// any empty square beyond it. A friendly piece or a second piece ends the ray.
fn king_captures(board: &Board, from: Cell, piece: Piece) -> Vec<Move> {
    let mut out = Vec::new();
    for &(dr, dc) in &DIAGONALS {
        let mut jumped: Option<Cell> = None;
        for cell in from.ray(dr, dc) {
            match board.get(cell) {
                Some(p) if p.color() == piece.color() || jumped.is_some() => break,
                Some(_) => jumped = Some(cell),
                None => {
                    if let Some(over) = jumped { out.push(Move::capture(from, cell, over)); }
                }
            }
        }
    }
    out
}

fn king_slides(board: &Board, from: Cell, out: &mut Vec<Move>) {
    for &(dr, dc) in &DIAGONALS {
        for cell in from.ray(dr, dc).take_while(|&c| board.is_empty_at(c)) {
            out.push(Move::slide(from, cell));
        }
    }
}

/// Every complete turn for `color`: slides as single legs, captures extended
/// until the moving piece has no further capture.
pub fn complete_turns(board: &Board, color: Color) -> Vec<Vec<Move>> {
    let mut out = Vec::new();
    for mv in legal_moves_for_color(board, color).moves {
        if mv.is_capture() {
            extend_chain(&board.apply(mv), mv.to, vec![mv], &mut out);
        } else {
            out.push(vec![mv]);
        }
    }
    out
}

fn extend_chain(board: &Board, at: Cell, prefix: Vec<Move>, out: &mut Vec<Vec<Move>>) {
    let next = legal_moves_for_piece(board, at);
    if !next.forced_capture {
        out.push(prefix);
        return;
    }
    for mv in next.moves {
        let mut legs = prefix.clone();
        legs.push(mv);
        extend_chain(&board.apply(mv), mv.to, legs, out);
    }
}

/// Where the move-order shuffle takes its base seed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Reproducible ordering.
    Fixed(u64),
    /// Base seed drawn once from the OS when the generator is built.
    Entropy,
}

impl Default for SeedPolicy {
    fn default() -> Self { SeedPolicy::Entropy }
}

impl SeedPolicy {
    pub fn resolve(self) -> u64 {
        match self {
            SeedPolicy::Fixed(s) => s,
            SeedPolicy::Entropy => rand::random(),
        }
    }
}

/// Color-level generation with randomized ordering. The shuffle of a position
/// depends only on the base seed, the grid and the mover, so generators with
/// the same seed always agree and hold no mutable state.
#[derive(Clone, Copy, Debug)]
pub struct MoveGenerator {
    seed: u64,
}

impl MoveGenerator {
    pub fn new(policy: SeedPolicy) -> Self { Self { seed: policy.resolve() } }

    pub fn legal_moves_for_color(&self, board: &Board, color: Color) -> TurnSet {
        let mut set = legal_moves_for_color(board, color);
        let mut rng = SmallRng::seed_from_u64(self.seed ^ zobrist::compute(board, color));
        set.moves.shuffle(&mut rng);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_has_seven_slides() {
        let set = legal_moves_for_color(&Board::start(), Color::White);
        assert_eq!(set.len(), 7);
        assert!(!set.forced_capture);
        assert!(set.moves.iter().all(|m| m.from.row == 5 && m.to.row == 4));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let b = Board::start();
        let g = MoveGenerator::new(SeedPolicy::Fixed(7));
        let mut shuffled = g.legal_moves_for_color(&b, Color::Black).moves;
        let mut plain = legal_moves_for_color(&b, Color::Black).moves;
        shuffled.sort_by_key(|m| (m.from, m.to));
        plain.sort_by_key(|m| (m.from, m.to));
        assert_eq!(shuffled, plain);
    }

    #[test]
    fn empty_cell_has_no_moves() {
        let set = legal_moves_for_piece(&Board::start(), Cell::new(4, 3));
        assert!(set.is_empty());
        assert!(!set.forced_capture);
    }
}
