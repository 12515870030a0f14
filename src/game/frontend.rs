use std::collections::VecDeque;

use crate::board::{Board, Cell, Color};
use crate::movegen::Move;

/// What the human-input side answers when asked for a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    Cell(Cell),
    /// Take back moves.
    Back,
    /// Start a new game from the initial position.
    Replay,
    Quit,
}

/// The collaborator that renders the game and turns human input into squares.
pub trait Frontend {
    /// Ask for a square. `selectable` are the squares the game would accept.
    fn pick(&mut self, board: &Board, selectable: &[Cell]) -> Response;

    /// A leg was played on the live board (`board` is the position after it).
    fn on_leg(&mut self, _board: &Board, _mv: &Move) {}

    fn on_turn_start(&mut self, _board: &Board, _color: Color) {}
}

/// Frontend for bot-only games: keeps the legs played and quits if asked for input.
#[derive(Debug, Default)]
pub struct Headless {
    pub legs: Vec<Move>,
}

impl Frontend for Headless {
    fn pick(&mut self, _board: &Board, _selectable: &[Cell]) -> Response { Response::Quit }

    fn on_leg(&mut self, _board: &Board, mv: &Move) { self.legs.push(*mv); }
}

/// Replays a fixed list of responses, then quits. Keeps every leg it is shown.
#[derive(Debug, Default)]
pub struct Scripted {
    script: VecDeque<Response>,
    pub legs: Vec<Move>,
    pub prompts: Vec<Vec<Cell>>,
}

impl Scripted {
    pub fn new<I: IntoIterator<Item = Response>>(script: I) -> Self {
        Self { script: script.into_iter().collect(), ..Self::default() }
    }

    pub fn remaining(&self) -> usize { self.script.len() }
}

impl Frontend for Scripted {
    fn pick(&mut self, _board: &Board, selectable: &[Cell]) -> Response {
        self.prompts.push(selectable.to_vec());
        self.script.pop_front().unwrap_or(Response::Quit)
    }

    fn on_leg(&mut self, _board: &Board, mv: &Move) { self.legs.push(*mv); }
}
