use crate::board::{zobrist, Board, Color};
use crate::error::ParseError;
use crate::movegen::{complete_turns, Move};
use crate::notation;

/// The live game board with per-turn history. `history[0]` is the initial
/// grid and each committed turn appends the grid it produced.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    first_to_move: Color,
    history: Vec<Board>,
}

impl Position {
    pub fn startpos() -> Self { Self::new(Board::start(), Color::White) }

    pub fn new(board: Board, to_move: Color) -> Self {
        Self { board, first_to_move: to_move, history: vec![board] }
    }

    pub fn from_text(text: &str, to_move: Color) -> Result<Self, ParseError> {
        Ok(Self::new(text.parse()?, to_move))
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn side_to_move(&self) -> Color {
        if self.turns_played() % 2 == 0 { self.first_to_move } else { self.first_to_move.opposite() }
    }

    pub fn turns_played(&self) -> usize { self.history.len() - 1 }

    pub fn key(&self) -> u64 { zobrist::compute(&self.board, self.side_to_move()) }

    /// True when legs of the current turn have been played but the turn is not committed.
    pub fn turn_in_progress(&self) -> bool { self.history.last() != Some(&self.board) }

    /// Play one leg on the live board without ending the turn.
    pub fn play_leg(&mut self, mv: Move) { self.board = self.board.apply(mv); }

    pub fn end_turn(&mut self) { self.history.push(self.board); }

    pub fn play_turn(&mut self, turn: &[Move]) {
        for &mv in turn { self.play_leg(mv); }
        self.end_turn();
    }

    /// Throw away the legs of an unfinished turn.
    pub fn restart_turn(&mut self) {
        if let Some(&b) = self.history.last() { self.board = b; }
    }

    /// Undo `turns` committed turns (and any unfinished one). Returns false and
    /// leaves the position untouched when the history is too short.
    pub fn rollback(&mut self, turns: usize) -> bool {
        if turns > self.turns_played() { return false; }
        self.history.truncate(self.history.len() - turns);
        self.restart_turn();
        true
    }

    pub fn reset(&mut self) {
        self.history.truncate(1);
        self.restart_turn();
    }

    pub fn legal_turns_count(&self) -> usize { complete_turns(&self.board, self.side_to_move()).len() }

    /// Play a whole turn given in square notation, e.g. `c3-d4` or `c3:e5:g7`.
    pub fn play_notation(&mut self, text: &str) -> Result<(), ParseError> {
        let squares = notation::parse_squares(text)?;
        let turns = complete_turns(&self.board, self.side_to_move());
        let turn = notation::find_turn(&turns, &squares).ok_or_else(|| ParseError::IllegalTurn(text.to_string()))?;
        self.play_turn(&turn);
        Ok(())
    }

    pub fn set_from_start_and_turns(turns: &[String]) -> Result<Self, ParseError> {
        let mut pos = Self::startpos();
        for t in turns { pos.play_notation(t)?; }
        Ok(pos)
    }
}
